use thiserror::Error;

/// Result type for plainnet operations
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Main error type for the checked entry points of the library.
///
/// The hot paths (`setup`, `predict`, `train`) do not return errors; they
/// document their preconditions instead. Everything that validates caller
/// input up front reports through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// Invalid dimensions for operations
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// No samples to train on
    #[error("Empty data set: {0}")]
    EmptyDataset(String),

    /// The network has not been set up yet
    #[error("Network has no layers; call setup() first")]
    Uninitialized,

    /// Configuration could not be parsed or written
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        NetworkError::Config(err.to_string())
    }
}

// Helper functions for common error patterns
impl NetworkError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        NetworkError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        NetworkError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
