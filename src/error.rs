//! Request-level error taxonomy.
//!
//! Every variant is terminal for the request. The `Display` text of each
//! variant is exactly what the client sees; the wrapped detail is for logs.

use std::fmt;

use axum::http::StatusCode;
use thiserror::Error;

/// Why a request body could not be turned into an event.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("request body is empty")]
    Empty,

    #[error("request body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Why the bearer-token check rejected a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No `Authorization` header at all.
    MissingHeader,
    /// Header present but not `Bearer <token>`.
    WrongScheme,
    /// Bearer token does not contain the configured secret.
    TokenMismatch,
}

impl AuthRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::WrongScheme => "wrong_scheme",
            Self::TokenMismatch => "token_mismatch",
        }
    }
}

impl fmt::Display for AuthRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure outcome for a webhook request.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Invalid request body, expected JSON")]
    InvalidBody(#[source] BodyError),

    #[error("Unauthorized")]
    Unauthorized(AuthRejection),

    #[error("An internal server error occurred")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl WebhookError {
    /// Wrap an unexpected server-side fault.
    pub fn internal(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Internal(err.into())
    }

    /// HTTP status for this outcome.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label used for the `outcome` metric dimension.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "invalid_body",
            Self::Unauthorized(_) => "unauthorized",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl From<BodyError> for WebhookError {
    fn from(err: BodyError) -> Self {
        Self::InvalidBody(err)
    }
}

impl From<AuthRejection> for WebhookError {
    fn from(rejection: AuthRejection) -> Self {
        Self::Unauthorized(rejection)
    }
}
