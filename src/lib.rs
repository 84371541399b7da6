// ============================================================================
// RSVP Backend Library
// ============================================================================

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod handlers;
pub mod service;
pub mod state;
pub mod store;

// Re-export main types for convenience
pub use app::build_router;
pub use config::{AppConfig, SheetsConfig};
pub use core::{
    Cell, GuestEntry, GuestRegistration, GuestUpdate, Result, Row, ServiceError, ValidationError,
};
pub use service::RegistrationService;
pub use state::AppState;
pub use store::{StoreError, TabularStore, memory::InMemoryStore, sheets::SheetsStore};
