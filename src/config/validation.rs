//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges. All problems are
//! reported together rather than stopping at the first one.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::WebhookConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.port must be greater than 0")]
    ZeroPort,

    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("limits.max_body_bytes must be greater than 0")]
    ZeroBodyLimit,

    #[error("limits.request_timeout_secs must be greater than 0")]
    ZeroTimeout,

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &WebhookConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }
    if config.limits.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&WebhookConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = WebhookConfig::default();
        config.listener.port = 0;
        config.limits.max_body_bytes = 0;
        config.limits.request_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroPort,
                ValidationError::ZeroBodyLimit,
                ValidationError::ZeroTimeout,
            ]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = WebhookConfig::default();
        config.observability.metrics_address = "not-an-address".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidMetricsAddress(_)));
    }
}
