/// Shared application state passed to axum handlers.
use std::path::PathBuf;
use std::sync::Arc;

use madmall_core::storage::local::LocalDocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LocalDocumentStore>,
    pub manifest_path: Arc<PathBuf>,
    /// Port the server actually listens on.
    pub port: u16,
}

impl AppState {
    pub fn new(content_root: PathBuf, manifest_path: PathBuf) -> Self {
        Self {
            store: Arc::new(LocalDocumentStore::new(content_root)),
            manifest_path: Arc::new(manifest_path),
            port: 0,
        }
    }
}
