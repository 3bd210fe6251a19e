use anyhow::Context;
use todo_config::{DatabaseConfig, TodoConfig};
use todo_db::ItemStore;

use crate::cli::GlobalFlags;

/// Shared resources for a single command invocation.
pub struct AppContext {
    pub store: ItemStore,
}

impl AppContext {
    /// Open the item store and make sure the starter items are present.
    pub async fn init(config: &TodoConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let database = resolve_database(config, flags);
        if database.is_default() {
            tracing::warn!(
                url = %database.url,
                "using the development item store; set TODOLIST_DATABASE__URL or --database for real data"
            );
        }
        tracing::debug!(url = %database.url, remote = database.is_remote(), "opening item store");

        let store = ItemStore::open(&database)
            .await
            .with_context(|| format!("failed to open item store at {}", database.url))?;
        Self::from_store(store).await
    }

    pub async fn from_store(store: ItemStore) -> anyhow::Result<Self> {
        store
            .seed()
            .await
            .context("failed to prepopulate item store")?;
        Ok(Self { store })
    }
}

/// `--database` wins over configuration; the configured token still applies.
fn resolve_database(config: &TodoConfig, flags: &GlobalFlags) -> DatabaseConfig {
    match &flags.database {
        Some(url) => DatabaseConfig {
            url: url.clone(),
            auth_token: config.database.auth_token.clone(),
        },
        None => config.database.clone(),
    }
}
