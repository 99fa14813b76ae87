//! JSON configuration for the command-line tool.

pub mod runtime;

pub use runtime::{load_config, parse_config, OutputConfig, OutputFormat, RuntimeConfig};
