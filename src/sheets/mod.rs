pub mod google;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::SheetSource;

pub use google::GoogleSheetsStore;
pub use memory::MemoryStore;

/// A named grid of cell values, header row included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    rows: Vec<Vec<String>>,
}

/// One row of a sheet. Cells past the end of a ragged row read as empty.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    cells: &'a [String],
}

impl Sheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a sheet from raw JSON cells (strings, numbers, booleans or nulls).
    pub fn from_values(rows: &[Vec<Value>]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(cell_text).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Rows after the header, paired with their 1-based offset below it.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, Row<'_>)> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, cells)| (i, Row { cells }))
    }
}

impl<'a> Row<'a> {
    pub fn cell(&self, index: usize) -> &'a str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug)]
pub enum StoreError {
    Transport(String),
    Status { status: u16, body: String },
    Decode(String),
    Io(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Transport(msg) => write!(f, "Sheet store unreachable: {msg}"),
            StoreError::Status { status, body } => {
                write!(f, "Sheet store returned {status}: {body}")
            }
            StoreError::Decode(msg) => write!(f, "Unreadable sheet data: {msg}"),
            StoreError::Io(msg) => write!(f, "Workbook I/O error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read access to the fixed portfolio spreadsheet.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Look up a sheet by name. `Ok(None)` means the workbook has no such sheet.
    async fn sheet(&self, name: &str) -> Result<Option<Sheet>, StoreError>;
}

/// Build the store selected by configuration.
pub fn connect(source: &SheetSource) -> Result<Arc<dyn SheetStore>, StoreError> {
    match source {
        SheetSource::Workbook(path) => {
            let store = MemoryStore::from_file(path)?;
            tracing::info!("Serving workbook from {}", path.display());
            Ok(Arc::new(store))
        }
        SheetSource::Google {
            spreadsheet_id,
            api_key,
            api_url,
        } => {
            let store = GoogleSheetsStore::new(api_url, spreadsheet_id, api_key)?;
            tracing::info!("Serving spreadsheet {spreadsheet_id} via Sheets API");
            Ok(Arc::new(store))
        }
    }
}
