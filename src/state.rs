use std::sync::Arc;

use crate::service::RegistrationService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RegistrationService>,
}

impl AppState {
    pub fn new(service: Arc<RegistrationService>) -> Self {
        Self { service }
    }
}
