//! In-memory implementation of WidgetService for development and testing

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::core::service::WidgetService;
use crate::core::widget::{Widget, WidgetDraft, WidgetId, WidgetPatch};

struct Inner {
    widgets: HashMap<WidgetId, Widget>,
    next_id: WidgetId,
}

/// In-memory widget service implementation
///
/// Uses RwLock for thread-safe access. Ids are assigned from a counter that
/// starts at 1 and never reuses a value, mirroring an auto-increment primary
/// key.
#[derive(Clone)]
pub struct InMemoryWidgetService {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryWidgetService {
    /// Create a new, empty in-memory widget service
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                widgets: HashMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryWidgetService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WidgetService for InMemoryWidgetService {
    async fn list(&self) -> Result<Vec<Widget>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(inner.widgets.values().cloned().collect())
    }

    async fn get(&self, id: WidgetId) -> Result<Option<Widget>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(inner.widgets.get(&id).cloned())
    }

    async fn create(&self, draft: WidgetDraft) -> Result<Widget> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = inner.next_id;
        inner.next_id += 1;

        let widget = Widget {
            id,
            name: draft.name,
            description: draft.description,
        };
        inner.widgets.insert(id, widget.clone());

        Ok(widget)
    }

    async fn update(&self, id: WidgetId, patch: WidgetPatch) -> Result<Option<Widget>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(widget) = inner.widgets.get_mut(&id) else {
            return Ok(None);
        };

        widget.apply(patch);

        Ok(Some(widget.clone()))
    }

    async fn delete(&self, id: WidgetId) -> Result<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(inner.widgets.remove(&id).is_some())
    }
}
