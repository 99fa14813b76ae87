use crate::error::{EstimateError, Result};
use crate::EstimatorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Boundary response JSON.
    pub json_out: Option<PathBuf>,
    /// Mask image; the encoder follows the file extension.
    pub mask_out: Option<PathBuf>,
    /// Detailed report with timings.
    pub report_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub area_km2: Option<f64>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: EstimatorParams,
}

/// Parse and validate a configuration document.
///
/// An inverted color band is rejected here with `InvalidRange`.
pub fn parse_config(contents: &str) -> Result<RuntimeConfig> {
    let config: RuntimeConfig = serde_json::from_str(contents)
        .map_err(|e| EstimateError::config(format!("failed to parse config: {e}")))?;
    config.params.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        EstimateError::config(format!("failed to read config {}: {e}", path.display()))
    })?;
    let mut config = parse_config(&contents).map_err(|e| match e {
        EstimateError::Config(msg) => EstimateError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    // Relative input paths are resolved against the config file's directory.
    if config.input_path.is_relative() {
        if let Some(dir) = path.parent() {
            config.input_path = dir.join(&config.input_path);
        }
    }
    Ok(config)
}
