//! Configuration management for Lingo services.
//!
//! Services read an optional configuration file at `~/.lingo/config.json`.
//!
//! # Configuration Priority
//!
//! 1. Environment variables (a `.env` file in the working directory is loaded first)
//! 2. Explicit config file values
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! ## Network
//! - `PORT` → network.port
//! - `LINGO_BIND_ADDRESS` → network.bind
//!
//! ## Model
//! - `GEMINI_API_KEY` (or `GOOGLE_API_KEY`) → model.api_key
//! - `LINGO_MODEL` → model.model
//! - `LINGO_MODEL_BASE_URL` → model.base_url
//! - `LINGO_MODEL_TIMEOUT_SECS` → model.timeout_secs
//!
//! ## Observability
//! - `LINGO_LOG_LEVEL` → observability.log_level
//! - `LINGO_LOG_FORMAT` → observability.log_format

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".lingo"),
        |dirs| dirs.home_dir().join(".lingo"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Network Configuration
// ============================================================================

/// Listener configuration for the HTTP service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Bind address. Defaults to all interfaces so mobile clients on the LAN can connect.
    #[serde(default = "default_bind_address")]
    pub bind: String,

    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind: default_bind_address(),
            port: default_port(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

// ============================================================================
// Model Configuration
// ============================================================================

/// Generative-language model configuration.
///
/// A missing or empty `api_key` is not an error: the analysis endpoints then
/// answer from their offline fallbacks.
#[derive(Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Gemini API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name used for analysis prompts
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_model_base_url")]
    pub base_url: String,

    /// Optional request timeout in seconds. `None` leaves timing to the transport.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ModelConfig {
    /// The configured credential, if it is present and non-empty.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_model_base_url(),
            timeout_secs: None,
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_model_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

// ============================================================================
// Observability Configuration
// ============================================================================

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level", alias = "level")]
    pub log_level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format", alias = "format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration for Lingo services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Listener configuration
    #[serde(default)]
    pub network: NetworkConfig,

    /// Generative model configuration
    #[serde(default)]
    pub model: ModelConfig,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Environment overrides that were rejected while loading. Held until
    /// logging is initialised so they can be reported.
    #[serde(skip)]
    pub override_warnings: Vec<String>,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration with `.env` and environment variable overrides.
    pub fn load_with_env() -> Result<Self> {
        // A missing .env file is the common case in production.
        let _ = dotenv::dotenv();

        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source.
    ///
    /// Unparseable numeric values leave the existing value in place and are
    /// recorded in `override_warnings`. Empty values count as unset.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = lookup("PORT") {
            match port.trim().parse() {
                Ok(p) => self.network.port = p,
                Err(_) => self
                    .override_warnings
                    .push(format!("Ignoring invalid PORT: {}", port)),
            }
        }

        if let Some(bind) = lookup("LINGO_BIND_ADDRESS") {
            self.network.bind = bind;
        }

        if let Some(key) = lookup("GEMINI_API_KEY").or_else(|| lookup("GOOGLE_API_KEY")) {
            self.model.api_key = Some(key);
        }

        if let Some(model) = lookup("LINGO_MODEL") {
            self.model.model = model;
        }

        if let Some(base_url) = lookup("LINGO_MODEL_BASE_URL") {
            self.model.base_url = base_url;
        }

        if let Some(timeout) = lookup("LINGO_MODEL_TIMEOUT_SECS") {
            match timeout.trim().parse() {
                Ok(secs) => self.model.timeout_secs = Some(secs),
                Err(_) => self
                    .override_warnings
                    .push(format!("Ignoring invalid LINGO_MODEL_TIMEOUT_SECS: {}", timeout)),
            }
        }

        if let Some(level) = lookup("LINGO_LOG_LEVEL") {
            self.observability.log_level = level;
        }

        if let Some(format) = lookup("LINGO_LOG_FORMAT") {
            self.observability.log_format = format;
        }
    }

    /// Socket address string the service listens on.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.network.bind, self.network.port)
    }
}
