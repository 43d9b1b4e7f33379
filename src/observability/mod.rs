//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! admission + classifier + server
//!     → logging.rs (structured log events, one per decision point)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID from the HTTP layer is attached to every request span
//! - Payload contents are never logged beyond event type and space name

pub mod logging;
pub mod metrics;
