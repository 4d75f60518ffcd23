//! Widget API server binary
//!
//! Reads `API_TOKEN` and `BIND_ADDR` from the environment, wires the
//! in-memory store behind the router and serves until Ctrl+C / SIGTERM.

use anyhow::Result;
use std::sync::Arc;

use widget_api::config::AppConfig;
use widget_api::server;
use widget_api::storage::InMemoryWidgetService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (RUST_LOG controls the filter)
    tracing_subscriber::fmt::init();

    let config = Arc::new(AppConfig::from_env());
    if config.api_token.is_empty() {
        tracing::warn!("API_TOKEN is not set; every /api request will be rejected with 401");
    }

    let widgets = Arc::new(InMemoryWidgetService::new());

    let addr = config.bind_addr.clone();
    let app = server::app(config, widgets);

    server::serve(&addr, app).await
}
