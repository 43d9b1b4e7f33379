//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chat_webhook::chat::Responder;
use chat_webhook::config::{AuthConfig, WebhookConfig};
use chat_webhook::http::HttpServer;
use chat_webhook::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A webhook server bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub responder: Arc<CountingResponder>,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// How many times the classifier asked for a message reply.
    pub fn replies(&self) -> usize {
        self.responder.calls.load(Ordering::SeqCst)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Responder that counts invocations and echoes the text back.
#[derive(Debug, Default)]
pub struct CountingResponder {
    calls: AtomicUsize,
}

impl Responder for CountingResponder {
    fn reply(&self, sender: &str, text: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        format!("{sender} said: {text}")
    }
}

/// Start a server with authorization enabled when `token_part` is non-empty.
pub async fn start_server(token_part: &str) -> TestServer {
    let mut config = WebhookConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.auth = AuthConfig::with_token(token_part);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let responder = Arc::new(CountingResponder::default());
    let server = HttpServer::with_responder(config, responder.clone());
    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, signal).await;
    });

    TestServer {
        addr,
        responder,
        shutdown,
    }
}

/// A client that never reuses pooled connections between tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
