//! Chat event domain.
//!
//! # Data Flow
//! ```text
//! admitted JSON body
//!     → event.rs (IncomingEvent, lenient typed decode)
//!     → classifier.rs (type → response, first match wins)
//!     → response.rs (ChatResponse, serialized by the HTTP layer)
//! ```

pub mod classifier;
pub mod event;
pub mod response;

pub use classifier::{AckResponder, Classifier, Responder};
pub use event::{EventType, IncomingEvent, UNKNOWN_USER};
pub use response::ChatResponse;
