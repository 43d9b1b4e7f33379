//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → config file (TOML, optional)  loader.rs
//!     → environment (PORT, CHAT_AUTH_TOKEN_PART, ...)
//!     → validation.rs (semantic checks)
//!     → WebhookConfig (validated, immutable)
//!     → shared via Arc with every request handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; nothing mutates it at runtime
//! - All fields have defaults so the service runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AuthConfig, LimitsConfig, ListenerConfig, LogFormat, ObservabilityConfig, WebhookConfig};
pub use validation::{validate_config, ValidationError};
