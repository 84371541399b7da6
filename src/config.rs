use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Connection settings for the spreadsheet store.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// API endpoint, overridable for tests against a local server.
    pub base_url: String,
    pub spreadsheet_id: String,
    /// Bearer token sent with every request.
    pub token: String,
    /// Sheet tab used to qualify every range.
    pub sheet_tab: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub sheets: SheetsConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("APP_PORT must be a valid u16")?;

        let spreadsheet_id =
            env::var("GOOGLE_SHEET_ID").context("GOOGLE_SHEET_ID must be set")?;
        let token =
            env::var("GOOGLE_SHEETS_TOKEN").context("GOOGLE_SHEETS_TOKEN must be set")?;
        let sheet_tab =
            env::var("GOOGLE_SHEETS_TAB").unwrap_or_else(|_| "Sheet1".to_string());
        let base_url = env::var("GOOGLE_SHEETS_BASE_URL")
            .unwrap_or_else(|_| "https://sheets.googleapis.com".to_string());

        let request_timeout_secs = env::var("SHEETS_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("SHEETS_REQUEST_TIMEOUT_SECS must be a valid u64")?;

        Ok(Self {
            host,
            port,
            sheets: SheetsConfig {
                base_url,
                spreadsheet_id,
                token,
                sheet_tab,
                request_timeout: Duration::from_secs(request_timeout_secs),
            },
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
