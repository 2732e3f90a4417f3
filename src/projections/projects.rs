use regex::Regex;
use std::sync::LazyLock;

use crate::models::Project;
use crate::sheets::Sheet;

pub const DEFAULT_ICON: &str = "fa-code";

static ICON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fa-[A-Za-z0-9_-]+").unwrap());

/// Every data row becomes a project, blank rows included.
pub fn project(sheet: &Sheet) -> Vec<Project> {
    sheet
        .data_rows()
        .map(|(id, row)| Project {
            id,
            title: row.cell(0).to_string(),
            description: row.cell(1).to_string(),
            category: row.cell(2).to_string(),
            tag: row.cell(3).to_string(),
            icon: icon_class(row.cell(4)),
            status: row.cell(5).to_string(),
            link: row.cell(6).to_string(),
            link_status: row.cell(7).to_string(),
        })
        .collect()
}

/// Pull the first `fa-*` class out of an icon snippet such as `<i class="fas fa-robot"></i>`.
pub fn icon_class(markup: &str) -> String {
    ICON_RE
        .find(markup)
        .map(|m| m.as_str())
        .unwrap_or(DEFAULT_ICON)
        .to_string()
}
