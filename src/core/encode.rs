//! Pure registration-to-row encoding.
//!
//! Nothing here validates or touches the store; inputs are assumed to have
//! passed [`crate::core::validate::validate`] already.

use crate::core::model::{GuestEntry, GuestRegistration};
use crate::core::value::{Cell, Row};

pub const ATTENDING: &str = "Oui";
pub const NOT_ATTENDING: &str = "Non";

/// Display name for a row: `"{first} {LAST}"`.
///
/// A single space separates the halves; internal whitespace in either name
/// is preserved verbatim.
pub fn encode_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {}", last_name.to_uppercase())
}

fn attendance(will_attend: bool) -> Cell {
    Cell::from(if will_attend { ATTENDING } else { NOT_ATTENDING })
}

/// The 4-cell row for the primary attendee:
/// `[Name, Meal, Attendance, GuestCount]`.
///
/// The meal is blanked when the primary is not attending; the guest count
/// defaults to 1 when the registration carries none.
pub fn primary_row(registration: &GuestRegistration) -> Row {
    let meal = if registration.will_attend {
        registration.meal.as_str()
    } else {
        ""
    };
    vec![
        Cell::from(encode_name(
            &registration.first_name,
            &registration.last_name,
        )),
        Cell::from(meal),
        attendance(registration.will_attend),
        Cell::from(i64::from(registration.number_of_guests.unwrap_or(1))),
    ]
}

/// The 3-cell row for one companion guest: `[Name, Meal, Attendance]`.
///
/// Companion rows carry the raw meal value regardless of attendance.
pub fn guest_row(guest: &GuestEntry) -> Row {
    vec![
        Cell::from(encode_name(&guest.first_name, &guest.last_name)),
        Cell::from(guest.meal.as_str()),
        attendance(guest.will_attend),
    ]
}

/// All rows appended for one registration: the primary row followed by one
/// row per companion guest, in list order. Length is always
/// `1 + guest_list.len()`.
pub fn create_row_set(registration: &GuestRegistration) -> Vec<Row> {
    let mut rows = Vec::with_capacity(1 + registration.guest_list.len());
    rows.push(primary_row(registration));
    rows.extend(registration.guest_list.iter().map(guest_row));
    rows
}
