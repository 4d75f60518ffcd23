//! Router assembly and server lifecycle
//!
//! `app` wires the widget routes under `/api` behind the auth gate and the
//! `X-Day` decoration; `serve` binds and runs with graceful shutdown on
//! Ctrl+C / SIGTERM.

pub mod auth;
pub mod day_header;
pub mod handlers;

use anyhow::Result;
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::core::service::WidgetService;
use handlers::{
    AppState, create_widget, delete_widget, list_widgets, show_widget, update_widget,
};

/// Build the application router.
///
/// Route table:
/// - `GET    /api/widgets`       - List all widgets
/// - `POST   /api/widgets`       - Create a widget
/// - `GET    /api/widgets/{id}`  - Show a widget
/// - `PUT    /api/widgets/{id}`  - Update a widget (partial)
/// - `PATCH  /api/widgets/{id}`  - Update a widget (partial)
/// - `DELETE /api/widgets/{id}`  - Delete a widget
/// - `GET    /health`, `/healthz` - Liveness (outside the auth gate)
pub fn app(config: Arc<AppConfig>, widgets: Arc<dyn WidgetService>) -> Router {
    let state = AppState { widgets };

    let api = Router::new()
        .route("/widgets", get(list_widgets).post(create_widget))
        .route(
            "/widgets/{id}",
            get(show_widget)
                .put(update_widget)
                .patch(update_widget)
                .delete(delete_widget),
        )
        .with_state(state)
        // Innermost first: the gate runs before handlers, the decoration
        // wraps everything so rejections carry X-Day too
        .layer(middleware::from_fn_with_state(config, auth::require_api_token))
        .layer(middleware::from_fn(day_header::attach_day_header));

    health_routes()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}

/// Serve the application with graceful shutdown.
pub async fn serve(addr: &str, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "widget-api"
    }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
