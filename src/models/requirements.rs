use serde::{Deserialize, Serialize};

/// Distinct values offered by the contact form's select fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementOptions {
    pub project_types: Vec<String>,
    pub timelines: Vec<String>,
    pub budgets: Vec<String>,
}
