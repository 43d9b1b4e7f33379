//! Inbound chat event model.
//!
//! Events are decoded from arbitrary JSON without ever failing: a field that
//! is missing, `null`, or of the wrong shape simply resolves to its default.
//! Only syntactically invalid JSON is rejected, and that happens before this
//! module is reached.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Sender name used when `user.displayName` is absent.
pub const UNKNOWN_USER: &str = "UnknownUser";

/// Longest unrecognized `type` string kept on an event, in characters.
pub const MAX_TYPE_LEN: usize = 64;

/// Kind of event delivered by the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventType {
    /// A user posted a message.
    Message,
    /// The bot was added to a space.
    AddedToSpace,
    /// The bot was removed from a space.
    RemovedFromSpace,
    /// A `type` value this service does not handle. Strings are cut to
    /// [`MAX_TYPE_LEN`]; any other JSON value keeps only its kind, e.g.
    /// `<object>`.
    Other(String),
    /// No `type` field, or `null`.
    #[default]
    Missing,
}

impl EventType {
    /// Resolve the `type` field of a raw event.
    pub fn parse(raw: Option<&Value>) -> Self {
        match raw {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::String(s)) => match s.as_str() {
                "MESSAGE" => Self::Message,
                "ADDED_TO_SPACE" => Self::AddedToSpace,
                "REMOVED_FROM_SPACE" => Self::RemovedFromSpace,
                _ => Self::Other(s.chars().take(MAX_TYPE_LEN).collect()),
            },
            Some(other) => Self::Other(json_kind(other).to_string()),
        }
    }

    /// Wire name of the type, as received.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Message => "MESSAGE",
            Self::AddedToSpace => "ADDED_TO_SPACE",
            Self::RemovedFromSpace => "REMOVED_FROM_SPACE",
            Self::Other(raw) => raw,
            Self::Missing => "<missing>",
        }
    }

    /// Bounded label for metrics; unknown values collapse to one bucket.
    pub fn metric_label(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::AddedToSpace => "added_to_space",
            Self::RemovedFromSpace => "removed_from_space",
            Self::Other(_) | Self::Missing => "unknown",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversation the event happened in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    /// Stable space identifier, e.g. `spaces/AAAA`.
    pub name: Option<String>,
}

/// User that triggered the event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub display_name: Option<String>,
}

/// Message payload of a `MESSAGE` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub text: Option<String>,
}

/// A decoded chat-platform callback.
///
/// Request scoped and immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct IncomingEvent {
    pub event_type: EventType,
    pub space: Space,
    pub user: User,
    pub message: Message,
}

impl IncomingEvent {
    /// Space name, if the event carried one.
    pub fn space_name(&self) -> Option<&str> {
        self.space.name.as_deref()
    }

    /// Sender display name, defaulting to [`UNKNOWN_USER`].
    pub fn sender_name(&self) -> &str {
        self.user.display_name.as_deref().unwrap_or(UNKNOWN_USER)
    }

    /// Message text, defaulting to the empty string.
    pub fn message_text(&self) -> &str {
        self.message.text.as_deref().unwrap_or_default()
    }
}

impl From<Value> for IncomingEvent {
    fn from(value: Value) -> Self {
        Self {
            event_type: EventType::parse(value.get("type")),
            space: Space {
                name: nested_string(&value, "space", "name"),
            },
            user: User {
                display_name: nested_string(&value, "user", "displayName"),
            },
            message: Message {
                text: nested_string(&value, "message", "text"),
            },
        }
    }
}

/// Placeholder naming the kind of a non-string, non-null JSON value.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "<bool>",
        Value::Number(_) => "<number>",
        Value::Array(_) => "<array>",
        Value::Object(_) => "<object>",
        Value::Null | Value::String(_) => "<missing>",
    }
}

/// `value[outer][inner]` as a string, or `None` if any step has the wrong shape.
fn nested_string(value: &Value, outer: &str, inner: &str) -> Option<String> {
    value.get(outer)?.get(inner)?.as_str().map(str::to_owned)
}
