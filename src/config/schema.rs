//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the webhook.
//! All types derive `Deserialize` for loading from config files.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Root configuration for the chat webhook.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WebhookConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Bearer-token authorization settings.
    pub auth: AuthConfig,

    /// Request size and time limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Port to bind. Overridden by `PORT`.
    pub port: u16,
}

impl ListenerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Shared-secret authorization for inbound callbacks.
///
/// When `token_part` is empty every request is admitted without an
/// `Authorization` header. That mode is only suitable for local testing.
#[derive(Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AuthConfig {
    /// Substring that the bearer token must contain. Overridden by
    /// `CHAT_AUTH_TOKEN_PART`.
    pub token_part: String,
}

impl AuthConfig {
    /// Creates an auth config expecting the given token substring.
    pub fn with_token(token_part: impl Into<String>) -> Self {
        Self {
            token_part: token_part.into(),
        }
    }

    /// The expected token substring, or `None` when authorization is disabled.
    pub fn expected_token(&self) -> Option<&str> {
        Some(self.token_part.as_str()).filter(|t| !t.is_empty())
    }

    /// Whether bearer-token checks are enforced.
    pub fn is_enabled(&self) -> bool {
        self.expected_token().is_some()
    }
}

// The secret must never end up in logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_part", &if self.is_enabled() { "***" } else { "" })
            .finish()
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum accepted request body in bytes.
    pub max_body_bytes: usize,

    /// Total time allowed per request in seconds.
    pub request_timeout_secs: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
            request_timeout_secs: 30,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, one event per line.
    #[default]
    Pretty,
    /// Newline-delimited JSON for log aggregation.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}', expected 'pretty' or 'json'")),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level filter (trace, debug, info, warn, error). `RUST_LOG` wins.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
