use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use super::{Sheet, SheetStore, StoreError};

/// Reads sheets through the Google Sheets v4 REST API with an API key.
pub struct GoogleSheetsStore {
    client: reqwest::Client,
    base_url: Url,
    spreadsheet_id: String,
    api_key: String,
}

#[derive(Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Deserialize)]
struct ValueRange {
    // Omitted by the API when the sheet has no values at all.
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl GoogleSheetsStore {
    pub fn new(api_url: &str, spreadsheet_id: &str, api_key: &str) -> Result<Self, StoreError> {
        let base_url = Url::parse(api_url)
            .map_err(|e| StoreError::Transport(format!("Invalid Sheets API URL: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| StoreError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            spreadsheet_id: spreadsheet_id.to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Transport("Sheets API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("spreadsheets")
            .push(&self.spreadsheet_id)
            .extend(segments);
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: Url) -> Result<T, StoreError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(512)
                .collect::<String>();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn sheet_titles(&self) -> Result<Vec<String>, StoreError> {
        let url = self.url(&[], &[("fields", "sheets.properties.title")])?;
        let meta: SpreadsheetMeta = self.get_json(url).await?;
        Ok(meta
            .sheets
            .into_iter()
            .map(|s| s.properties.title)
            .collect())
    }
}

#[async_trait]
impl SheetStore for GoogleSheetsStore {
    async fn sheet(&self, name: &str) -> Result<Option<Sheet>, StoreError> {
        // The values endpoint cannot tell a missing sheet from a bad range, so check titles first.
        if !self.sheet_titles().await?.iter().any(|t| t == name) {
            return Ok(None);
        }

        let range = format!("'{}'", name.replace('\'', "''"));
        let url = self.url(
            &["values", range.as_str()],
            &[
                ("majorDimension", "ROWS"),
                ("valueRenderOption", "FORMATTED_VALUE"),
            ],
        )?;
        let values: ValueRange = self.get_json(url).await?;

        tracing::debug!("Fetched {} rows from sheet '{name}'", values.values.len());
        Ok(Some(Sheet::from_values(&values.values)))
    }
}
