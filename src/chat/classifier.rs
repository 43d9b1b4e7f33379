//! Event classification.
//!
//! # Responsibilities
//! - Map an [`IncomingEvent`] to exactly one [`ChatResponse`]
//! - Log one line per classification outcome
//!
//! # Design Decisions
//! - Pure and memoryless: the same event always yields the same response
//! - Never fails; every field access has a default
//! - Message replies go through the [`Responder`] trait so a generating
//!   backend can replace the acknowledgement later

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::chat::event::{EventType, IncomingEvent};
use crate::chat::response::ChatResponse;
use crate::observability::metrics;

/// Produces the reply text for a `MESSAGE` event.
///
/// Implementations must be synchronous and must not fail.
pub trait Responder: Send + Sync + fmt::Debug {
    fn reply(&self, sender: &str, text: &str) -> String;
}

/// Placeholder responder that acknowledges the message it received.
#[derive(Debug, Clone, Copy, Default)]
pub struct AckResponder;

impl Responder for AckResponder {
    fn reply(&self, sender: &str, text: &str) -> String {
        format!("Thanks {sender}, I received your message: \"{text}\"")
    }
}

/// Routes events to their response.
#[derive(Debug, Clone)]
pub struct Classifier {
    responder: Arc<dyn Responder>,
}

impl Classifier {
    /// Create a classifier that answers messages with `responder`.
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self { responder }
    }

    /// Classify one event. First matching arm wins.
    pub fn classify(&self, event: &IncomingEvent) -> ChatResponse {
        metrics::record_event(event.event_type.metric_label());
        let space = event.space_name().unwrap_or("unknown");

        match &event.event_type {
            EventType::Message => {
                let text = self.responder.reply(event.sender_name(), event.message_text());
                info!(
                    event_type = %event.event_type,
                    space = %space,
                    "Message event acknowledged"
                );
                ChatResponse::with_text(text)
            }
            EventType::AddedToSpace => {
                info!(space = %space, "Added to space");
                ChatResponse::empty()
            }
            EventType::RemovedFromSpace => {
                info!(space = %space, "Removed from space");
                ChatResponse::empty()
            }
            EventType::Other(_) | EventType::Missing => {
                warn!(
                    event_type = %event.event_type,
                    space = %space,
                    "Unrecognized event type, ignoring"
                );
                ChatResponse::empty()
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Arc::new(AckResponder))
    }
}
