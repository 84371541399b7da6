//! Registration orchestration over a [`TabularStore`].

use std::sync::Arc;

use tracing::debug;

use crate::core::{GuestRegistration, GuestUpdate, Result, Row, create_row_set, merge, validate};
use crate::store::TabularStore;

/// Column scheme: one A-based four-column layout for every operation.
/// Companion rows only occupy the first three columns of the same band.
pub const CREATE_RANGE: &str = "A:D";
pub const LIST_RANGE: &str = "A:D";

/// Single-row band for an externally supplied 1-based row index.
pub fn row_range(row_index: u32) -> String {
    format!("A{row_index}:D{row_index}")
}

/// Orchestrates validation, row encoding and store round trips. The store is
/// an explicit constructor dependency; the service holds no other state and
/// no concurrency primitives.
pub struct RegistrationService {
    store: Arc<dyn TabularStore>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn TabularStore>) -> Self {
        Self { store }
    }

    /// Validates and appends one registration as `1 + guest_list.len()` rows.
    ///
    /// Fail-fast: a validation error returns before any store call, so the
    /// create path never partially writes. The store assigns the row
    /// position; no index is reported back.
    pub async fn create_registration(&self, registration: &GuestRegistration) -> Result<()> {
        validate(registration)?;

        let rows = create_row_set(registration);
        debug!(rows = rows.len(), "appending registration");
        self.store.append(CREATE_RANGE, &rows).await?;
        Ok(())
    }

    /// Merges a sparse field set into the row at `row_index` and writes it
    /// back.
    ///
    /// This is a non-atomic read-then-write: the values API offers no
    /// conditional write, so an update interleaved between the read and the
    /// write of the same row is silently lost (last-write-wins). A missing
    /// row merges against an empty snapshot, defaulting every field; nothing
    /// signals absence. Partial updates are not name-validated, and
    /// empty-string overwrites are accepted.
    pub async fn update_registration(&self, row_index: u32, update: &GuestUpdate) -> Result<()> {
        let range = row_range(row_index);
        let snapshot = self.store.get(&range).await?;
        let existing = snapshot.first().map(Vec::as_slice).unwrap_or(&[]);

        let merged = merge(existing, update);
        debug!(row_index, "updating registration row");
        self.store.update(&range, std::slice::from_ref(&merged)).await?;
        Ok(())
    }

    /// Raw row sequence of the whole table; empty when the store has no
    /// data, never an absent value.
    pub async fn list_registrations(&self) -> Result<Vec<Row>> {
        Ok(self.store.get(LIST_RANGE).await?)
    }
}
