//! Error types shared by the Lingo binaries.

use thiserror::Error;

use crate::validation::ValidationError;

/// Startup and tooling failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    /// The model API rejected or failed a request
    #[error("External service error: {0}")]
    External(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: Error = ValidationError::MissingField {
            field: "model.model".into(),
        }
        .into();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Missing required field: model.model"
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::Config("missing GEMINI_API_KEY".into()).to_string(),
            "Configuration error: missing GEMINI_API_KEY"
        );
        assert_eq!(
            Error::External("quota".into()).to_string(),
            "External service error: quota"
        );
    }
}
