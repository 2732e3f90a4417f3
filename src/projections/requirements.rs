use crate::models::RequirementOptions;
use crate::sheets::Sheet;

/// Columns 0, 1 and 2 are read independently, so a row may contribute to any subset of lists.
pub fn project(sheet: &Sheet) -> RequirementOptions {
    let mut options = RequirementOptions::default();

    for (_, row) in sheet.data_rows() {
        push_distinct(&mut options.project_types, row.cell(0));
        push_distinct(&mut options.timelines, row.cell(1));
        push_distinct(&mut options.budgets, row.cell(2));
    }

    options
}

fn push_distinct(values: &mut Vec<String>, cell: &str) {
    let value = cell.trim();
    if value.is_empty() || values.iter().any(|v| v == value) {
        return;
    }
    values.push(value.to_string());
}
