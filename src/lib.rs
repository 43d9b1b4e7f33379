//! Chat platform webhook library.

pub mod chat;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use chat::{ChatResponse, Classifier, IncomingEvent, Responder};
pub use config::WebhookConfig;
pub use error::WebhookError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
