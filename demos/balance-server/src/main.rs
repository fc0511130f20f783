//! Balance Sheet web server.
//!
//! Serves the decoded Xero Balance Sheet at `GET /balance`.
//!
//! Usage:
//!   # Against the production API
//!   cargo run --package balance-server
//!
//!   # Against a local mock upstream
//!   XERO_URL=http://mock-xero:3000 cargo run --package balance-server

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xero_http::XeroClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "balance_server=debug,xero_http=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut client = XeroClient::new();

    if let Ok(base) = std::env::var("XERO_URL") {
        tracing::info!(base = %base, "using Xero base URL override");
        client = client.with_base_url(base);
    }

    // The report frontend is served from a different origin.
    let cors = CorsLayer::new().allow_origin(Any);

    let app = xero_http::router(client)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".to_string());

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;

    tracing::info!(%addr, "Balance Sheet server listening");

    axum::serve(listener, app)
        .await
        .context("server exited with an error")?;

    Ok(())
}
