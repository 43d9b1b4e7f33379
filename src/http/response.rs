//! Response construction and error mapping.
//!
//! # Responsibilities
//! - Serialize success bodies explicitly so failures surface as errors
//! - Map [`WebhookError`] to its status code and `{"error": "..."}` body
//! - Turn handler panics into the same 500 body
//!
//! # Design Decisions
//! - Error bodies carry only the fixed client message, never internals

use std::any::Any;
use std::backtrace::Backtrace;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::WebhookError;
use crate::observability::metrics;

/// Client-visible error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Serialize `value` as a JSON response.
///
/// Unlike `axum::Json`, a serialization failure is returned to the caller
/// as [`WebhookError::Internal`] instead of being turned into a plain-text
/// 500 by the framework.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, WebhookError> {
    let bytes = serde_json::to_vec(value).map_err(WebhookError::internal)?;
    let mut response = (status, bytes).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(response)
}

/// Response for a panic caught by `CatchPanicLayer`.
///
/// The backtrace is captured regardless of `RUST_BACKTRACE`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&'static str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        panic = %detail,
        backtrace = %Backtrace::force_capture(),
        "Request handler panicked"
    );
    let error = WebhookError::internal(detail.to_string());
    metrics::record_outcome(error.outcome());
    error.into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde::ser::Error as _;
    use serde::Serializer;

    use super::*;
    use crate::error::{AuthRejection, BodyError};
    use crate::observability::logging::capture_logs;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot serialize internal state"))
        }
    }

    #[tokio::test]
    async fn test_error_shapes() {
        let cases = [
            (
                WebhookError::from(BodyError::Empty),
                StatusCode::BAD_REQUEST,
                "Invalid request body, expected JSON",
            ),
            (
                WebhookError::from(AuthRejection::MissingHeader),
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
            ),
            (
                WebhookError::internal("db password leaked"),
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred",
            ),
        ];

        for (error, status, message) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), status);
            assert_eq!(body_json(response).await, serde_json::json!({ "error": message }));
        }
    }

    #[tokio::test]
    async fn test_json_response_sets_content_type() {
        let response = json_response(StatusCode::OK, &serde_json::json!({})).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_json(response).await, serde_json::json!({}));
    }

    #[test]
    fn test_serialization_failure_is_internal() {
        let err = json_response(StatusCode::OK, &Unserializable).unwrap_err();
        assert!(matches!(err, WebhookError::Internal(_)));
    }

    #[tokio::test]
    async fn test_panic_response_hides_payload() {
        let response = panic_response(Box::new("index out of bounds: secret"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "An internal server error occurred");
        assert!(!body.to_string().contains("secret"));
    }

    #[test]
    fn test_panic_response_logs_error_with_backtrace() {
        let logs = capture_logs(|| {
            let response = panic_response(Box::new(String::from("responder state corrupted")));
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        });

        assert!(logs.contains("ERROR"));
        assert!(logs.contains("Request handler panicked"));
        assert!(logs.contains("responder state corrupted"));
        assert!(logs.contains("backtrace="));
        assert!(!logs.contains("disabled backtrace"));
    }
}
