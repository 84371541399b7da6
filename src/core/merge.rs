//! Partial-update merge against a stored row snapshot.
//!
//! The update path has no transactional read-modify-write: the snapshot is
//! whatever the store returned a moment ago, possibly empty when the target
//! row had no content. Merging always yields a complete 4-cell primary row,
//! defaulting every slot the snapshot and the partial both leave open.

use crate::core::encode::{ATTENDING, NOT_ATTENDING, encode_name};
use crate::core::model::GuestUpdate;
use crate::core::value::{Cell, Row};

/// Combines a sparse field set with a previously stored row.
///
/// Slot defaults when the snapshot is short: empty text for name, meal and
/// attendance, guest count 1. A snapshot cell that is kept is passed through
/// verbatim, whatever its type.
pub fn merge(existing: &[Cell], partial: &GuestUpdate) -> Row {
    let name = merged_name(existing.first(), partial);

    let meal = match &partial.meal {
        Some(meal) => Cell::from(meal.as_str()),
        None => existing.get(1).cloned().unwrap_or_else(|| Cell::from("")),
    };

    let attendance = match partial.will_attend {
        Some(true) => Cell::from(ATTENDING),
        Some(false) => Cell::from(NOT_ATTENDING),
        None => existing.get(2).cloned().unwrap_or_else(|| Cell::from("")),
    };

    let guest_count = match partial.number_of_guests {
        Some(count) => Cell::from(i64::from(count)),
        None => existing.get(3).cloned().unwrap_or(Cell::Int(1)),
    };

    vec![name, meal, attendance, guest_count]
}

// When neither name half is supplied the stored cell is kept untouched.
// Otherwise the stored name splits on its first space (everything after it
// is the last-name remainder, possibly empty), either half is overridden,
// and the result is re-encoded. With an empty snapshot and only a first
// name supplied this intentionally yields a trailing space and an empty
// uppercase segment.
fn merged_name(existing: Option<&Cell>, partial: &GuestUpdate) -> Cell {
    if partial.first_name.is_none() && partial.last_name.is_none() {
        return existing.cloned().unwrap_or_else(|| Cell::from(""));
    }

    let current = existing.map(|cell| cell.to_string()).unwrap_or_default();
    let (existing_first, existing_last) = match current.split_once(' ') {
        Some((first, remainder)) => (first, remainder),
        None => (current.as_str(), ""),
    };

    let first = partial.first_name.as_deref().unwrap_or(existing_first);
    let last = partial.last_name.as_deref().unwrap_or(existing_last);
    Cell::from(encode_name(first, last))
}
