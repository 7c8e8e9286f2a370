//! Application state shared across handlers

use std::sync::Arc;

use crate::repositories::Storage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    /// Phone number that receives the admin role at registration
    pub admin_phone: Arc<str>,
}

impl AppState {
    pub fn new(storage: Storage, admin_phone: impl Into<Arc<str>>) -> Self {
        Self {
            storage,
            admin_phone: admin_phone.into(),
        }
    }
}
