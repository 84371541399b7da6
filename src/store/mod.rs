pub mod memory;
pub mod sheets;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::Row;

/// Opaque failure from the tabular store collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("unexpected store response: {0}")]
    InvalidResponse(String),
}

/// The row-oriented table the registration core writes to.
///
/// This is the only boundary the core depends on. Ranges use A1 notation
/// without a sheet qualifier; an implementation owns qualification, network
/// and auth concerns. No retries happen behind this trait; a failed call
/// surfaces immediately.
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// Appends rows after the last non-empty row covered by `range`.
    async fn append(&self, range: &str, rows: &[Row]) -> Result<(), StoreError>;

    /// Overwrites the cells addressed by `range` with `rows`.
    async fn update(&self, range: &str, rows: &[Row]) -> Result<(), StoreError>;

    /// Reads the rows addressed by `range`; empty when the store has no data.
    async fn get(&self, range: &str) -> Result<Vec<Row>, StoreError>;
}
