//! Error type shared by the classifier, the estimator and the boundary helpers.
//!
//! A zero tree count (non-positive area or coverage) is a regular result, not
//! an error, and therefore has no variant here.

/// Failures reported by the estimation pipeline.
#[derive(thiserror::Error, Debug)]
pub enum EstimateError {
    /// Unreadable, empty or oversized raster.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Classifier band with a lower bound above its upper bound.
    #[error("invalid color range: channel {channel} has lower={lower} > upper={upper}")]
    InvalidRange { channel: usize, lower: u8, upper: u8 },

    /// Image or area absent (or unparsable) at the boundary.
    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EstimateError {
    pub fn invalid_image<T: ToString>(msg: T) -> Self {
        EstimateError::InvalidImage(msg.to_string())
    }

    pub fn missing_input<T: ToString>(msg: T) -> Self {
        EstimateError::MissingInput(msg.to_string())
    }

    pub fn config<T: ToString>(msg: T) -> Self {
        EstimateError::Config(msg.to_string())
    }

    /// Faults the caller can fix by resubmitting different input.
    pub fn is_request_fault(&self) -> bool {
        matches!(
            self,
            EstimateError::InvalidImage(_) | EstimateError::MissingInput(_)
        )
    }
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, EstimateError>;
