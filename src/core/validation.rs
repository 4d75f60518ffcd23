//! Payload validation for create and update operations
//!
//! Validation is a pure function from raw payload to a validated value or a
//! list of field violations. Every violation is collected and reported, not
//! just the first one. Oversized input is rejected outright, never truncated.

use serde::Deserialize;

use crate::core::error::{ApiError, FieldViolation};
use crate::core::widget::{WidgetDraft, WidgetPatch};

/// Maximum stored length of `description`, counted in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 100;

/// Raw create payload as received on the wire.
///
/// Both fields are deserialized as optional so that a missing field becomes a
/// reported violation instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateWidgetRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Raw update payload as received on the wire (partial update semantics).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWidgetRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

fn check_name(name: String, violations: &mut Vec<FieldViolation>) -> Option<String> {
    if name.trim().is_empty() {
        violations.push(FieldViolation::new("name", "must be a non-empty string"));
        None
    } else {
        Some(name)
    }
}

fn check_description(description: String, violations: &mut Vec<FieldViolation>) -> Option<String> {
    if description.trim().is_empty() {
        violations.push(FieldViolation::new(
            "description",
            "must be a non-empty string",
        ));
        None
    } else if description.chars().count() > MAX_DESCRIPTION_CHARS {
        violations.push(FieldViolation::new(
            "description",
            format!("must not exceed {} characters", MAX_DESCRIPTION_CHARS),
        ));
        None
    } else {
        Some(description)
    }
}

impl CreateWidgetRequest {
    /// Validate into a [`WidgetDraft`]: both fields required, non-empty,
    /// description within the length bound.
    pub fn validate(self) -> Result<WidgetDraft, ApiError> {
        let mut violations = Vec::new();

        let name = match self.name {
            Some(name) => check_name(name, &mut violations),
            None => {
                violations.push(FieldViolation::new("name", "is required"));
                None
            }
        };

        let description = match self.description {
            Some(description) => check_description(description, &mut violations),
            None => {
                violations.push(FieldViolation::new("description", "is required"));
                None
            }
        };

        match (name, description) {
            (Some(name), Some(description)) => Ok(WidgetDraft { name, description }),
            _ => Err(ApiError::Validation(violations)),
        }
    }
}

impl UpdateWidgetRequest {
    /// Validate into a [`WidgetPatch`]: only supplied fields are checked,
    /// with the same constraints as creation. An empty payload is a valid
    /// no-op patch.
    pub fn validate(self) -> Result<WidgetPatch, ApiError> {
        let mut violations = Vec::new();

        let name = self.name.and_then(|name| check_name(name, &mut violations));
        let description = self
            .description
            .and_then(|description| check_description(description, &mut violations));

        if violations.is_empty() {
            Ok(WidgetPatch { name, description })
        } else {
            Err(ApiError::Validation(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(err: ApiError) -> Vec<FieldViolation> {
        match err {
            ApiError::Validation(v) => v,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_valid() {
        let draft = CreateWidgetRequest {
            name: Some("foo".to_string()),
            description: Some("bar".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(draft.name, "foo");
        assert_eq!(draft.description, "bar");
    }

    #[test]
    fn test_create_missing_both_fields_reports_both() {
        let errs = violations(CreateWidgetRequest::default().validate().unwrap_err());
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].field, "name");
        assert_eq!(errs[1].field, "description");
    }

    #[test]
    fn test_create_empty_name_rejected() {
        let errs = violations(
            CreateWidgetRequest {
                name: Some("   ".to_string()),
                description: Some("fine".to_string()),
            }
            .validate()
            .unwrap_err(),
        );
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "name");
    }

    #[test]
    fn test_create_description_at_bound_accepted() {
        let draft = CreateWidgetRequest {
            name: Some("foo".to_string()),
            description: Some("x".repeat(MAX_DESCRIPTION_CHARS)),
        }
        .validate()
        .unwrap();
        assert_eq!(draft.description.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_create_description_over_bound_rejected() {
        let errs = violations(
            CreateWidgetRequest {
                name: Some("foo".to_string()),
                description: Some("x".repeat(MAX_DESCRIPTION_CHARS + 1)),
            }
            .validate()
            .unwrap_err(),
        );
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "description");
    }

    #[test]
    fn test_create_bound_counts_characters_not_bytes() {
        // 100 two-byte characters: 200 bytes but exactly at the bound
        let description = "é".repeat(MAX_DESCRIPTION_CHARS);
        assert!(description.len() > MAX_DESCRIPTION_CHARS);
        let result = CreateWidgetRequest {
            name: Some("foo".to_string()),
            description: Some(description),
        }
        .validate();
        assert!(result.is_ok());
    }

    #[test]
    fn test_update_empty_payload_is_valid_noop() {
        let patch = UpdateWidgetRequest::default().validate().unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_update_single_field() {
        let patch = UpdateWidgetRequest {
            name: Some("renamed".to_string()),
            description: None,
        }
        .validate()
        .unwrap();
        assert_eq!(patch.name.as_deref(), Some("renamed"));
        assert!(patch.description.is_none());
    }

    #[test]
    fn test_update_supplied_field_still_validated() {
        let errs = violations(
            UpdateWidgetRequest {
                name: None,
                description: Some("x".repeat(MAX_DESCRIPTION_CHARS + 1)),
            }
            .validate()
            .unwrap_err(),
        );
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "description");
    }

    #[test]
    fn test_update_empty_supplied_name_rejected() {
        let errs = violations(
            UpdateWidgetRequest {
                name: Some(String::new()),
                description: None,
            }
            .validate()
            .unwrap_err(),
        );
        assert_eq!(errs[0].field, "name");
    }
}
