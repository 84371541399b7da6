pub mod encode;
pub mod error;
pub mod merge;
pub mod model;
pub mod validate;
pub mod value;

pub use encode::{create_row_set, encode_name, guest_row, primary_row};
pub use error::{Result, ServiceError, ValidationError};
pub use merge::merge;
pub use model::{GuestEntry, GuestRegistration, GuestUpdate};
pub use validate::validate;
pub use value::{Cell, Row};
