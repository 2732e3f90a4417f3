use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use super::{Sheet, SheetStore, StoreError};

/// Workbook held entirely in memory, keyed by sheet name.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sheets: HashMap<String, Sheet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: &str, rows: Vec<Vec<&str>>) -> Self {
        self.insert(
            name,
            Sheet::new(
                rows.into_iter()
                    .map(|row| row.into_iter().map(str::to_string).collect())
                    .collect(),
            ),
        );
        self
    }

    pub fn insert(&mut self, name: &str, sheet: Sheet) {
        self.sheets.insert(name.to_string(), sheet);
    }

    /// Parse a JSON workbook of the form `{ "<sheet>": [[cell, ...], ...] }`.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let parsed: HashMap<String, Vec<Vec<Value>>> =
            serde_json::from_str(raw).map_err(|e| StoreError::Decode(e.to_string()))?;

        Ok(Self {
            sheets: parsed
                .into_iter()
                .map(|(name, rows)| (name, Sheet::from_values(&rows)))
                .collect(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }
}

#[async_trait]
impl SheetStore for MemoryStore {
    async fn sheet(&self, name: &str) -> Result<Option<Sheet>, StoreError> {
        Ok(self.sheets.get(name).cloned())
    }
}
