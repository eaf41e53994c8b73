//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::{FileAuditLog, FileRegistryStore};

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<FileRegistryStore, FileAuditLog>>,
    /// Public base used when rendering short URLs; no trailing slash.
    pub base_url: String,
}
