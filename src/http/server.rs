//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the webhook handler
//! - Wire up middleware (request ID, tracing, limits, panic capture)
//! - Bind the server to a listener and shut down gracefully

use std::backtrace::Backtrace;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::chat::{Classifier, Responder};
use crate::config::WebhookConfig;
use crate::error::WebhookError;
use crate::http::admission::admit;
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::http::response::{json_response, panic_response};
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics;

/// Text served on `GET /`.
pub const LIVENESS_TEXT: &str = "Chat webhook is running";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<WebhookConfig>,
    pub classifier: Arc<Classifier>,
}

/// HTTP server for the chat webhook.
pub struct HttpServer {
    router: Router,
    config: Arc<WebhookConfig>,
}

impl HttpServer {
    /// Create a server that acknowledges messages with the default responder.
    pub fn new(config: WebhookConfig) -> Self {
        Self::with_classifier(config, Classifier::default())
    }

    /// Create a server whose message replies come from `responder`.
    pub fn with_responder(config: WebhookConfig, responder: Arc<dyn Responder>) -> Self {
        Self::with_classifier(config, Classifier::new(responder))
    }

    fn with_classifier(config: WebhookConfig, classifier: Classifier) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
            classifier: Arc::new(classifier),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &WebhookConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(liveness_handler).post(webhook_handler))
            .with_state(state)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.limits.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "webhook_request",
                    method = %req.method(),
                    path = %req.uri().path(),
                    request_id = %request_id(req.headers()),
                )
            }))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// The router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, mut shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            auth_enabled = self.config.auth.is_enabled(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { shutdown.recv().await })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn liveness_handler() -> &'static str {
    LIVENESS_TEXT
}

/// Webhook endpoint: admit, classify, respond.
async fn webhook_handler(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let start = Instant::now();

    match handle_event(&state, &headers, &body) {
        Ok(response) => {
            metrics::record_request("accepted", start);
            response
        }
        Err(err) => {
            if let WebhookError::Internal(source) = &err {
                tracing::error!(
                    error = %source,
                    details = ?source,
                    backtrace = %Backtrace::force_capture(),
                    "Failed to handle webhook event"
                );
            }
            metrics::record_request(err.outcome(), start);
            err.into_response()
        }
    }
}

fn handle_event(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<Response, WebhookError> {
    let event = admit(headers, body, &state.config.auth)?;
    let reply = state.classifier.classify(&event);
    json_response(StatusCode::OK, &reply)
}
