use serde::{Deserialize, Serialize};

/// One companion guest in a registration's party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestEntry {
    pub first_name: String,
    pub last_name: String,
    /// Free-text meal label, e.g. "Végétarien", "Sans gluten", "Normal".
    pub meal: String,
    pub will_attend: bool,
}

/// A primary attendee's RSVP submission, including their party.
///
/// Field names on the wire are camelCase; stored strings are persisted
/// verbatim (trimming is only ever used for emptiness checks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRegistration {
    pub first_name: String,
    pub last_name: String,
    pub meal: String,
    pub will_attend: bool,
    /// Party size. When absent, 1 is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<u32>,
    #[serde(default)]
    pub guest_list: Vec<GuestEntry>,
}

/// Sparse field set for updating an existing row. Any field left `None`
/// keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_attend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<u32>,
}
