//! Shared test utilities for todo-db unit tests.

use crate::store::ItemStore;

/// In-memory store with the schema applied and no seed rows.
pub async fn test_store() -> ItemStore {
    ItemStore::open_local(":memory:").await.unwrap()
}

/// Count every row in the collection, regardless of completion.
pub async fn count_items(store: &ItemStore) -> i64 {
    let mut rows = store
        .db()
        .conn()
        .await
        .query("SELECT COUNT(*) FROM todo_items", ())
        .await
        .unwrap();
    rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
}
