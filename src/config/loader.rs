//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::WebhookConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Listen port override.
pub const ENV_PORT: &str = "PORT";
/// Expected bearer-token substring; empty disables authorization.
pub const ENV_AUTH_TOKEN_PART: &str = "CHAT_AUTH_TOKEN_PART";
/// Log level override.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Log format override (`pretty` or `json`).
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {reason}")]
    Env { var: &'static str, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<WebhookConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: WebhookConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

impl WebhookConfig {
    /// Build the runtime configuration.
    ///
    /// Priority (lowest to highest): built-in defaults, the optional TOML
    /// file, then process environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => load_config(path)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// A variable that is set but empty still counts as set, so an empty
    /// `CHAT_AUTH_TOKEN_PART` disables a token configured in the file.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            self.listener.port = port.trim().parse().map_err(|e| ConfigError::Env {
                var: ENV_PORT,
                reason: format!("'{port}' is not a valid port: {e}"),
            })?;
        }

        if let Some(token_part) = lookup(ENV_AUTH_TOKEN_PART) {
            self.auth.token_part = token_part;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|l| !l.trim().is_empty()) {
            self.observability.log_level = level;
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT).filter(|f| !f.trim().is_empty()) {
            self.observability.log_format = format.parse().map_err(|reason| ConfigError::Env {
                var: ENV_LOG_FORMAT,
                reason,
            })?;
        }

        Ok(())
    }
}
