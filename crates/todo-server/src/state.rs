//! Shared router state.

use std::path::PathBuf;
use std::sync::Arc;

use todo_config::ServerConfig;
use todo_db::ItemStore;

/// State cloned into every handler. The store is shared, never copied.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ItemStore>,
    pub resources_dir: PathBuf,
    pub index_path: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(store: ItemStore, server: &ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            resources_dir: server.resources_dir.clone(),
            index_path: server.index_path(),
        }
    }
}
