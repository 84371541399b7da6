use thiserror::Error;

use crate::store::StoreError;

/// Rejection reasons for a registration payload, tagged with the offending
/// field. Guest indices are 0-based positions in `guestList`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("firstName must not be empty")]
    EmptyPrimaryFirstName,

    #[error("lastName must not be empty")]
    EmptyPrimaryLastName,

    #[error("guestList[{0}].firstName must not be empty")]
    EmptyGuestFirstName(usize),

    #[error("guestList[{0}].lastName must not be empty")]
    EmptyGuestLastName(usize),
}

/// Failure of a registration operation. Every service operation reports
/// through this one type; the HTTP layer decides how each variant renders.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
