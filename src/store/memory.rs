//! In-memory [`TabularStore`] used by tests and local development.
//!
//! Rows live in a growable table indexed from 1, mirroring the sheet's row
//! numbering. Single-row ranges such as `A5:D5` address row 5; ranges
//! without a row number (`A:D`) address the whole table.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::Row;
use crate::store::{StoreError, TabularStore};

#[derive(Default)]
pub struct InMemoryStore {
    rows: RwLock<Vec<Row>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the whole table, for assertions.
    pub async fn rows(&self) -> Vec<Row> {
        self.rows.read().await.clone()
    }
}

// First run of digits in the range, e.g. "A5:D5" -> 5.
fn row_number(range: &str) -> Option<usize> {
    let start = range.find(|c: char| c.is_ascii_digit())?;
    let tail = &range[start..];
    let end = tail
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(tail.len());
    tail[..end].parse().ok()
}

#[async_trait]
impl TabularStore for InMemoryStore {
    async fn append(&self, _range: &str, rows: &[Row]) -> Result<(), StoreError> {
        self.rows.write().await.extend_from_slice(rows);
        Ok(())
    }

    async fn update(&self, range: &str, rows: &[Row]) -> Result<(), StoreError> {
        let start = row_number(range)
            .filter(|n| *n >= 1)
            .ok_or_else(|| StoreError::InvalidResponse(format!("range '{range}' has no row number")))?;

        let mut table = self.rows.write().await;
        for (offset, row) in rows.iter().enumerate() {
            let index = start - 1 + offset;
            if table.len() <= index {
                table.resize(index + 1, Row::new());
            }
            table[index] = row.clone();
        }
        Ok(())
    }

    async fn get(&self, range: &str) -> Result<Vec<Row>, StoreError> {
        let table = self.rows.read().await;
        match row_number(range) {
            Some(number) => Ok(table
                .get(number.saturating_sub(1))
                .filter(|row| !row.is_empty())
                .map(|row| vec![row.clone()])
                .unwrap_or_default()),
            None => Ok(table.clone()),
        }
    }
}
