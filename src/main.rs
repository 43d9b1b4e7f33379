//! Chat platform webhook.
//!
//! Receives event callbacks on `POST /`, classifies them and answers
//! synchronously with a JSON body.
//!
//! ```text
//!   chat platform ──POST /──▶ admission ──▶ classifier ──▶ 200 {"text": ...} / {}
//!                               │
//!                               └─ 400 invalid JSON / 401 bad bearer token
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use chat_webhook::config::WebhookConfig;
use chat_webhook::http::HttpServer;
use chat_webhook::lifecycle::{wait_for_signal, Shutdown};
use chat_webhook::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "chat-webhook")]
#[command(about = "Webhook endpoint for chat platform event callbacks", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port; overrides the config file and `PORT`.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = WebhookConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.listener.port = port;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address(),
        max_body_bytes = config.limits.max_body_bytes,
        request_timeout_secs = config.limits.request_timeout_secs,
        "chat-webhook starting"
    );

    if !config.auth.is_enabled() {
        tracing::warn!(
            "CHAT_AUTH_TOKEN_PART is not set: bearer-token authorization is DISABLED. \
             Any caller can post events. Do not run this configuration in production."
        );
    }

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, signal).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
