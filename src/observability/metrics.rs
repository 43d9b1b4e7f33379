//! Metrics collection and exposition.
//!
//! # Metrics
//! - `webhook_requests_total` (counter): requests by admission outcome
//! - `webhook_request_duration_seconds` (histogram): handler latency
//! - `webhook_events_total` (counter): classified events by kind
//!
//! Without an installed recorder every call here is a no-op, so tests and
//! deployments with metrics disabled pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a finished webhook request.
pub fn record_request(outcome: &'static str, start: Instant) {
    record_outcome(outcome);
    metrics::histogram!("webhook_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

/// Count a request outcome without timing, e.g. when a panic was caught.
pub fn record_outcome(outcome: &'static str) {
    metrics::counter!("webhook_requests_total", "outcome" => outcome).increment(1);
}

/// Record a classified event.
pub fn record_event(kind: &'static str) {
    metrics::counter!("webhook_events_total", "kind" => kind).increment(1);
}
