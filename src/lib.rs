//! # Widget API
//!
//! A token-guarded REST API exposing CRUD operations over a single `Widget`
//! resource.
//!
//! ## Surface
//!
//! - **Routes**: `GET/POST /api/widgets`, `GET/PUT/PATCH/DELETE
//!   /api/widgets/{id}`, plus unauthenticated `/health` probes
//! - **Auth gate**: every `/api` route requires an `api-token` header equal
//!   to the `API_TOKEN` secret loaded once at startup
//! - **Envelope**: every body is `{"data": <widget-or-array>}`
//! - **X-Day**: every response carries the current server-local weekday name
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use widget_api::prelude::*;
//!
//! let config = Arc::new(AppConfig::from_env());
//! let widgets = Arc::new(InMemoryWidgetService::new());
//! let app = widget_api::server::app(config.clone(), widgets);
//! widget_api::server::serve(&config.bind_addr, app).await?;
//! ```
//!
//! Persistence sits behind the [`WidgetService`](core::WidgetService) trait;
//! the shipped backend is in-memory, and any relational or embedded store can
//! implement the same five operations.

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        ApiError, CreateWidgetRequest, ErrorResponse, FieldViolation, UpdateWidgetRequest,
        Widget, WidgetDraft, WidgetId, WidgetPatch, WidgetService, MAX_DESCRIPTION_CHARS,
    };

    // === Storage ===
    pub use crate::storage::InMemoryWidgetService;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::handlers::{AppState, DataEnvelope};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
