use serde::Serialize;
use serde_json::Value;

/// Placeholder shown for optional contact fields that were left blank.
pub const PLACEHOLDER: &str = "—";

/// A contact-form submission. Nothing is validated server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project_type: Option<String>,
    pub timeline: Option<String>,
    pub budget: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Read the known fields out of a decoded request body, ignoring anything else.
    pub fn from_value(raw: &Value) -> Self {
        Self {
            name: text_field(raw, "name").unwrap_or_default(),
            email: text_field(raw, "email").unwrap_or_default(),
            project_type: optional_field(raw, "projectType"),
            timeline: optional_field(raw, "timeline"),
            budget: optional_field(raw, "budget"),
            message: text_field(raw, "message").unwrap_or_default(),
        }
    }

    pub fn project_type_or_placeholder(&self) -> &str {
        or_placeholder(&self.project_type)
    }

    pub fn timeline_or_placeholder(&self) -> &str {
        or_placeholder(&self.timeline)
    }

    pub fn budget_or_placeholder(&self) -> &str {
        or_placeholder(&self.budget)
    }
}

fn or_placeholder(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

fn text_field(raw: &Value, field: &str) -> Option<String> {
    match raw.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn optional_field(raw: &Value, field: &str) -> Option<String> {
    text_field(raw, field).filter(|s| !s.is_empty())
}
