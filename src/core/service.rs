//! Service trait for widget persistence

use anyhow::Result;
use async_trait::async_trait;

use crate::core::widget::{Widget, WidgetDraft, WidgetId, WidgetPatch};

/// Service trait for managing widgets
///
/// Implementations provide CRUD operations over the Widget store. The API is
/// agnostic to the underlying storage mechanism; the shipped backend is
/// [`InMemoryWidgetService`](crate::storage::InMemoryWidgetService), but any
/// relational or embedded store can implement this trait.
///
/// Absent rows are reported in-band (`None` / `false`); `Err` is reserved for
/// backend failures, which the HTTP layer maps to a 500.
#[async_trait]
pub trait WidgetService: Send + Sync {
    /// List all widgets (order unspecified)
    async fn list(&self) -> Result<Vec<Widget>>;

    /// Get a widget by id
    async fn get(&self, id: WidgetId) -> Result<Option<Widget>>;

    /// Insert a new widget, assigning its id
    async fn create(&self, draft: WidgetDraft) -> Result<Widget>;

    /// Apply a partial update to a widget
    ///
    /// Supplied fields overwrite, absent fields are retained. Returns `None`
    /// when no widget has the given id.
    async fn update(&self, id: WidgetId, patch: WidgetPatch) -> Result<Option<Widget>>;

    /// Delete a widget by id, returning whether a row was removed
    async fn delete(&self, id: WidgetId) -> Result<bool>;
}
