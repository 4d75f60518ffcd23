//! HTTP handlers for the five widget operations
//!
//! Each handler follows the same shape: validate (for mutating requests),
//! resolve the id against the store (lookup-or-404 before anything else on
//! id-scoped routes), perform the single store call, wrap the result in the
//! `data` envelope.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;

use crate::core::error::ApiError;
use crate::core::service::WidgetService;
use crate::core::validation::{CreateWidgetRequest, UpdateWidgetRequest};
use crate::core::widget::{Widget, WidgetId};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub widgets: Arc<dyn WidgetService>,
}

/// Response envelope: every body is `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// GET /api/widgets
pub async fn list_widgets(
    State(state): State<AppState>,
) -> Result<Json<DataEnvelope<Vec<Widget>>>, ApiError> {
    let widgets = state.widgets.list().await?;

    Ok(Json(DataEnvelope { data: widgets }))
}

/// POST /api/widgets
pub async fn create_widget(
    State(state): State<AppState>,
    Json(payload): Json<CreateWidgetRequest>,
) -> Result<(StatusCode, Json<DataEnvelope<Widget>>), ApiError> {
    let draft = payload.validate()?;
    let widget = state.widgets.create(draft).await?;

    Ok((StatusCode::CREATED, Json(DataEnvelope { data: widget })))
}

/// GET /api/widgets/{id}
pub async fn show_widget(
    State(state): State<AppState>,
    Path(id): Path<WidgetId>,
) -> Result<Json<DataEnvelope<Widget>>, ApiError> {
    let widget = state
        .widgets
        .get(id)
        .await?
        .ok_or(ApiError::WidgetNotFound { id })?;

    Ok(Json(DataEnvelope { data: widget }))
}

/// PUT/PATCH /api/widgets/{id}
pub async fn update_widget(
    State(state): State<AppState>,
    Path(id): Path<WidgetId>,
    Json(payload): Json<UpdateWidgetRequest>,
) -> Result<Json<DataEnvelope<Widget>>, ApiError> {
    // Unresolved id is terminal before the payload is even looked at
    if state.widgets.get(id).await?.is_none() {
        return Err(ApiError::WidgetNotFound { id });
    }

    let patch = payload.validate()?;
    let widget = state
        .widgets
        .update(id, patch)
        .await?
        .ok_or(ApiError::WidgetNotFound { id })?;

    Ok(Json(DataEnvelope { data: widget }))
}

/// DELETE /api/widgets/{id}
pub async fn delete_widget(
    State(state): State<AppState>,
    Path(id): Path<WidgetId>,
) -> Result<Json<DataEnvelope<Option<Widget>>>, ApiError> {
    let removed = state.widgets.delete(id).await?;
    if !removed {
        return Err(ApiError::WidgetNotFound { id });
    }

    // 200 with an explicit null acknowledgement
    Ok(Json(DataEnvelope { data: None }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wraps_single_object() {
        let envelope = DataEnvelope {
            data: Widget {
                id: 1,
                name: "foo".to_string(),
                description: "bar".to_string(),
            },
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["data"]["name"], "foo");
    }

    #[test]
    fn test_envelope_wraps_collection() {
        let envelope = DataEnvelope::<Vec<Widget>> { data: vec![] };
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_delete_ack_is_null_data() {
        let envelope = DataEnvelope::<Option<Widget>> { data: None };
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value["data"].is_null());
    }
}
