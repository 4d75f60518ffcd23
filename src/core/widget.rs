//! The Widget entity and its value types

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a Widget.
///
/// Ids start at 1 and increment; once assigned they are immutable.
pub type WidgetId = u64;

/// The sole entity of this API.
///
/// The wire representation is exactly these three fields, wrapped in a
/// `{"data": ...}` envelope by the handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    pub name: String,
    pub description: String,
}

/// Validated payload for creating a Widget.
///
/// Produced by [`CreateWidgetRequest::validate`](crate::core::validation::CreateWidgetRequest::validate);
/// the store assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDraft {
    pub name: String,
    pub description: String,
}

/// Validated partial update for a Widget.
///
/// Fields left as `None` keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl WidgetPatch {
    /// True when no field is supplied (a valid no-op update).
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

impl Widget {
    /// Overwrite the fields supplied by the patch, keeping the rest.
    pub fn apply(&mut self, patch: WidgetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}
