//! Lingo Common - Shared configuration, logging, and error types for the Lingo services.
//!
//! This crate provides:
//! - Configuration types and loading (JSON file, `.env`, environment overrides)
//! - Configuration validation
//! - Error types shared by the service binaries
//! - Logging setup with noise filtering

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::{Config, ModelConfig, NetworkConfig, ObservabilityConfig};
pub use error::Error;
pub use logging::LogFormat;
pub use validation::{Validate, ValidationError, ValidationResult};
