//! Synchronous reply returned to the chat platform.

use serde::Serialize;

/// Body of a successful webhook response.
///
/// An empty response (`{}`) acknowledges the event without posting anything
/// visible in the conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ChatResponse {
    /// Silent acknowledgement.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reply that posts `text` back into the conversation.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
    }
}
