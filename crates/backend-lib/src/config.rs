// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
//!
//! Settings cover the HTTP surface and logging only; the password policy
//! itself is fixed (see [`crate::policy`]).
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Prefix for environment overrides, e.g. `PASSWORD_SERVICE__SERVER__PORT`
pub const ENV_PREFIX: &str = "PASSWORD_SERVICE";

/// Default config file looked up (any supported extension) by [`Settings::load`]
pub const DEFAULT_CONFIG_PATH: &str = "config/default";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors raised while loading or checking settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub http: HttpSettings,
}

/// Listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host name or IP to bind
    pub host: String,
    pub port: u16,
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter level; `RUST_LOG` takes precedence when set
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP layer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Maximum accepted request body size
    pub body_limit_bytes: usize,
    /// Allow any origin, method and header (CORS)
    pub permissive_cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            body_limit_bytes: 16 * 1024,
            permissive_cors: false,
        }
    }
}

impl Settings {
    /// Load settings from `config/default.*` (optional) and the environment
    pub fn load() -> Result<Self, SettingsError> {
        Self::build(File::with_name(DEFAULT_CONFIG_PATH).required(false))
    }

    /// Load settings from an explicit file (required) and the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::build(File::from(path.as_ref()))
    }

    fn build<S>(file: S) -> Result<Self, SettingsError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.server.host.trim().is_empty() {
            return Err(SettingsError::Invalid("server.host must not be empty".to_string()));
        }
        if self.server.port == 0 {
            return Err(SettingsError::Invalid("server.port must not be 0".to_string()));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(SettingsError::Invalid(format!(
                "logging.level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }
        if self.http.body_limit_bytes == 0 {
            return Err(SettingsError::Invalid(
                "http.body_limit_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
