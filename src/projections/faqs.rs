use super::answer;
use crate::models::Faq;
use crate::sheets::Sheet;

/// Rows whose question is blank or whitespace are dropped. Question and answer are trimmed.
pub fn project(sheet: &Sheet) -> Vec<Faq> {
    sheet
        .data_rows()
        .filter(|(_, row)| !row.cell(0).trim().is_empty())
        .map(|(id, row)| {
            let text = row.cell(1).trim().to_string();
            Faq {
                id,
                question: row.cell(0).trim().to_string(),
                blocks: answer::format(&text),
                answer: text,
            }
        })
        .collect()
}
