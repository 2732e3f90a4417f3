use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Comma-separated tags, as entered in the sheet.
    pub tag: String,
    /// Font Awesome class token, e.g. `fa-robot`.
    pub icon: String,
    pub status: String,
    pub link: String,
    pub link_status: String,
}
