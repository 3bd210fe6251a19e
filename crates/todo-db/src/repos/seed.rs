//! Startup prepopulation.

use crate::error::StoreError;
use crate::helpers::new_item_id;
use crate::repos::item::insert_item;
use crate::store::ItemStore;

/// Description of the item whose presence marks the store as seeded.
pub const SENTINEL_DESCRIPTION: &str = "time";

/// Items inserted on first startup, as `(description, completed)`.
pub const SEED_ITEMS: [(&str, bool); 2] = [
    ("prepopulate the db", true),
    (SENTINEL_DESCRIPTION, false),
];

impl ItemStore {
    /// Insert [`SEED_ITEMS`] unless the sentinel item is already present.
    ///
    /// Safe to call on every startup. Callers sharing this store are
    /// serialized, but the check and the insert are separate round trips, so
    /// two processes starting together against one database can both seed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the lookup or the batch insert fails;
    /// a failed batch leaves no seed rows behind.
    pub async fn seed(&self) -> Result<(), StoreError> {
        let conn = self.db().conn().await;
        let seeded = {
            let mut rows = conn
                .query(
                    "SELECT 1 FROM todo_items WHERE description = ?1 LIMIT 1",
                    [SENTINEL_DESCRIPTION],
                )
                .await?;
            rows.next().await?.is_some()
        };
        if seeded {
            tracing::debug!("item store already prepopulated");
            return Ok(());
        }

        tracing::info!("prepopulating item store");
        let tx = conn.transaction().await?;
        let mut inserted = Vec::with_capacity(SEED_ITEMS.len());
        for (description, completed) in SEED_ITEMS {
            let id = new_item_id(&tx).await?;
            insert_item(&tx, &id, description, completed).await?;
            inserted.push(id.to_string());
        }
        tx.commit().await?;

        tracing::info!(ids = ?inserted, "inserted prepopulate items");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{count_items, test_store};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn seed_inserts_two_items() {
        let store = test_store().await;
        store.seed().await.unwrap();

        let completed = store.list(true).await.unwrap();
        let incomplete = store.list(false).await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].description, "prepopulate the db");
        assert_eq!(incomplete.len(), 1);
        assert_eq!(incomplete[0].description, SENTINEL_DESCRIPTION);
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let store = test_store().await;
        store.seed().await.unwrap();
        store.seed().await.unwrap();
        assert_eq!(count_items(&store).await, 2);
    }

    #[tokio::test]
    async fn sentinel_created_by_user_suppresses_seed() {
        let store = test_store().await;
        store.create(SENTINEL_DESCRIPTION).await.unwrap();

        store.seed().await.unwrap();
        assert_eq!(count_items(&store).await, 1);
    }

    #[tokio::test]
    async fn deleting_sentinel_allows_reseed() {
        let store = test_store().await;
        store.seed().await.unwrap();
        let sentinel = store.list(false).await.unwrap().remove(0);

        store.delete(sentinel.id.as_str()).await.unwrap();
        store.seed().await.unwrap();

        // The completed seed row survives, so one extra pair lands.
        assert_eq!(count_items(&store).await, 3);
    }
}
