//! Server application state

use crate::config::Settings;
use depot::Storage;
use std::sync::Arc;

/// State shared read-only by every request handler
pub struct AppState {
    pub settings: Settings,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(settings: Settings, storage: Arc<dyn Storage>) -> Self {
        Self { settings, storage }
    }
}
