//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → admission.rs (bearer token, JSON body)
//!     → chat::Classifier
//!     → response.rs (JSON body or error mapping)
//!     → Send to client
//! ```

pub mod admission;
pub mod request;
pub mod response;
pub mod server;

pub use admission::{admit, AuthContext};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer, LIVENESS_TEXT};
