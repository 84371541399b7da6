//! Google Sheets v4 `values` API client.
//!
//! Writes use `valueInputOption=USER_ENTERED`, so the sheet interprets cell
//! content the same way it would for a typing user. The base URL is
//! configurable so tests can point the client at a local server.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SheetsConfig;
use crate::core::Row;
use crate::store::{StoreError, TabularStore};

const VALUE_INPUT_OPTION: (&str, &str) = ("valueInputOption", "USER_ENTERED");

pub struct SheetsStore {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    token: String,
    sheet_tab: String,
}

#[derive(Serialize)]
struct ValueRange<'a> {
    values: &'a [Row],
}

#[derive(Deserialize)]
struct ValueRangeBody {
    #[serde(default)]
    values: Vec<Row>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl SheetsStore {
    pub fn new(config: &SheetsConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            token: config.token.clone(),
            sheet_tab: config.sheet_tab.clone(),
        })
    }

    fn values_url(&self, range: &str, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}!{}{}",
            self.base_url, self.spreadsheet_id, self.sheet_tab, range, suffix
        )
    }

    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.error)
            .map(|detail| detail.message)
            .unwrap_or(body);
        warn!(status = status.as_u16(), %message, "sheets API rejected request");
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TabularStore for SheetsStore {
    async fn append(&self, range: &str, rows: &[Row]) -> Result<(), StoreError> {
        debug!(range, rows = rows.len(), "appending rows");
        let response = self
            .http
            .post(self.values_url(range, ":append"))
            .bearer_auth(&self.token)
            .query(&[VALUE_INPUT_OPTION])
            .json(&ValueRange { values: rows })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update(&self, range: &str, rows: &[Row]) -> Result<(), StoreError> {
        debug!(range, rows = rows.len(), "updating rows");
        let response = self
            .http
            .put(self.values_url(range, ""))
            .bearer_auth(&self.token)
            .query(&[VALUE_INPUT_OPTION])
            .json(&ValueRange { values: rows })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn get(&self, range: &str) -> Result<Vec<Row>, StoreError> {
        let response = self
            .http
            .get(self.values_url(range, ""))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = Self::check(response).await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        let body: ValueRangeBody = response
            .json()
            .await
            .map_err(|err| StoreError::InvalidResponse(err.to_string()))?;
        Ok(body.values)
    }
}

#[cfg(test)]
mod tests {
    use super::SheetsStore;
    use crate::config::SheetsConfig;

    fn config() -> SheetsConfig {
        SheetsConfig {
            base_url: "https://sheets.googleapis.com/".to_string(),
            spreadsheet_id: "sheet-id".to_string(),
            token: "token".to_string(),
            sheet_tab: "Sheet1".to_string(),
            request_timeout: std::time::Duration::from_secs(30),
        }
    }

    #[test]
    fn qualifies_ranges_with_the_configured_tab() {
        let store = SheetsStore::new(&config()).unwrap();
        assert_eq!(
            store.values_url("A:D", ":append"),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/Sheet1!A:D:append"
        );
        assert_eq!(
            store.values_url("A5:D5", ""),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/Sheet1!A5:D5"
        );
    }
}
