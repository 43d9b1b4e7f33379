//! Request admission.
//!
//! # Responsibilities
//! - Enforce the optional shared-secret bearer token
//! - Decode the body into an [`IncomingEvent`]
//! - Log exactly one admission outcome per request
//!
//! # Design Decisions
//! - Authorization runs first: an unauthorized payload is never parsed
//! - Only event type and space name are logged on accept
//! - No secret configured means no check at all (startup warns about it)

use axum::http::{header, HeaderMap};
use tracing::{info, warn};

use crate::chat::IncomingEvent;
use crate::config::AuthConfig;
use crate::error::{AuthRejection, BodyError, WebhookError};

/// Per-request authorization facts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// A `Bearer` token was present in the `Authorization` header.
    pub token_present: bool,
    /// The token contained the configured secret. Always `false` when
    /// authorization is disabled.
    pub token_matched: bool,
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthRejection> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthRejection::MissingHeader)?
        .to_str()
        .map_err(|_| AuthRejection::WrongScheme)?;

    match value.trim().split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => Ok(token.trim()),
        _ => Err(AuthRejection::WrongScheme),
    }
}

/// Check the request against the configured secret.
pub fn authorize(headers: &HeaderMap, auth: &AuthConfig) -> Result<AuthContext, AuthRejection> {
    let Some(expected) = auth.expected_token() else {
        return Ok(AuthContext {
            token_present: bearer_token(headers).is_ok(),
            token_matched: false,
        });
    };

    let token = bearer_token(headers)?;
    if token.contains(expected) {
        Ok(AuthContext {
            token_present: true,
            token_matched: true,
        })
    } else {
        Err(AuthRejection::TokenMismatch)
    }
}

/// Decode a request body. Any valid JSON value is an event.
pub fn decode_event(body: &[u8]) -> Result<IncomingEvent, BodyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(BodyError::Empty);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Admit a request: authorize, then decode.
///
/// Rejected requests never reach the classifier.
pub fn admit(headers: &HeaderMap, body: &[u8], auth: &AuthConfig) -> Result<IncomingEvent, WebhookError> {
    let auth_context = authorize(headers, auth).map_err(|rejection| {
        warn!(reason = %rejection, "Request rejected: unauthorized");
        WebhookError::from(rejection)
    })?;

    let event = decode_event(body).map_err(|err| {
        warn!(error = %err, body_len = body.len(), "Request rejected: invalid body");
        WebhookError::from(err)
    })?;

    info!(
        event_type = %event.event_type,
        space = event.space_name().unwrap_or("unknown"),
        token_present = auth_context.token_present,
        "Request accepted"
    );
    Ok(event)
}
