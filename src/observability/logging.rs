//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the process-wide tracing subscriber
//! - Select pretty or JSON output from config
//!
//! # Design Decisions
//! - `RUST_LOG` takes precedence over the configured level
//! - Output goes to stdout through `tracing-subscriber`, never `println!`

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

pub use tracing_subscriber::util::TryInitError;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
    }
}

#[cfg(test)]
pub(crate) use capture::capture_logs;
