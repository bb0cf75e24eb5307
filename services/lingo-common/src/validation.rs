//! Configuration validation for Lingo services.
//!
//! Provides validation logic for configuration fields to ensure
//! all required values are present and within valid ranges.

use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{Config, ModelConfig, NetworkConfig, ObservabilityConfig};
use crate::logging::LogFormat;

/// Log levels accepted by the logging setup.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Log formats accepted by the logging setup.
pub const LOG_FORMATS: &[&str] = &["json", "pretty", "compact"];

/// Configuration validation error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port {port}: must be between 1 and 65535")]
    InvalidPort { port: u16, field: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trait for validatable configuration sections.
pub trait Validate {
    /// Validate this configuration section.
    fn validate(&self) -> ValidationResult<()>;
}

impl Validate for Config {
    /// Validate the entire configuration, collecting every section's error.
    fn validate(&self) -> ValidationResult<()> {
        let mut errors: Vec<ValidationError> = [
            self.network.validate(),
            self.model.validate(),
            self.observability.validate(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple(errors)),
        }
    }
}

impl Validate for NetworkConfig {
    fn validate(&self) -> ValidationResult<()> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort {
                port: self.port,
                field: "network.port".into(),
            });
        }

        if IpAddr::from_str(&self.bind).is_err() {
            return Err(ValidationError::InvalidValue {
                field: "network.bind".into(),
                reason: format!("'{}' is not an IP address", self.bind),
            });
        }

        Ok(())
    }
}

impl Validate for ModelConfig {
    fn validate(&self) -> ValidationResult<()> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "model.model".into(),
            });
        }

        if let Err(e) = url::Url::parse(&self.base_url) {
            return Err(ValidationError::InvalidValue {
                field: "model.base_url".into(),
                reason: e.to_string(),
            });
        }

        if self.timeout_secs == Some(0) {
            return Err(ValidationError::InvalidValue {
                field: "model.timeout_secs".into(),
                reason: "must be greater than zero when set".into(),
            });
        }

        Ok(())
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> ValidationResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_level".into(),
                reason: format!("expected one of {:?}", LOG_LEVELS),
            });
        }

        if self.log_format.parse::<LogFormat>().is_err() {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_format".into(),
                reason: format!("expected one of {:?}", LOG_FORMATS),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = Config::default();
        config.network.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPort { port: 0, .. })
        ));
    }

    #[test]
    fn test_bad_bind_address_rejected() {
        let network = NetworkConfig {
            bind: "localhost:80".into(),
            port: 3001,
        };
        let err = network.validate().unwrap_err();
        assert!(err.to_string().contains("network.bind"));
    }

    #[test]
    fn test_model_section_rules() {
        let mut model = ModelConfig::default();
        model.model = "  ".into();
        assert!(matches!(
            model.validate(),
            Err(ValidationError::MissingField { .. })
        ));

        let mut model = ModelConfig::default();
        model.base_url = "not a url".into();
        assert!(model.validate().is_err());

        let mut model = ModelConfig::default();
        model.timeout_secs = Some(0);
        assert!(model.validate().is_err());

        // Missing credential is allowed
        let model = ModelConfig::default();
        assert!(model.api_key.is_none());
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_log_settings_rules() {
        let mut obs = ObservabilityConfig::default();
        obs.log_level = "DEBUG".into();
        assert!(obs.validate().is_ok());

        obs.log_level = "loud".into();
        assert!(obs.validate().is_err());

        let mut obs = ObservabilityConfig::default();
        obs.log_format = "compact".into();
        assert!(obs.validate().is_ok());

        obs.log_format = "xml".into();
        assert!(obs.validate().is_err());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut config = Config::default();
        config.network.port = 0;
        config.observability.log_format = "xml".into();

        match config.validate() {
            Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected multiple errors, got {:?}", other),
        }
    }
}
