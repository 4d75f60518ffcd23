//! Core module containing the entity, validation, service contract and errors

pub mod error;
pub mod service;
pub mod validation;
pub mod widget;

pub use error::{ApiError, ErrorResponse, FieldViolation};
pub use service::WidgetService;
pub use validation::{CreateWidgetRequest, UpdateWidgetRequest, MAX_DESCRIPTION_CHARS};
pub use widget::{Widget, WidgetDraft, WidgetId, WidgetPatch};
