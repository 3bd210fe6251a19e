//! Item repository: create, lookup, completion updates, delete, list.

use chrono::Utc;

use todo_core::entities::Item;
use todo_core::ids::ItemId;

use crate::error::{DatabaseError, StoreError};
use crate::helpers::{ITEM_COLS, expect_single_row, new_item_id, row_to_item};
use crate::store::ItemStore;

/// Maximum number of items returned by [`ItemStore::list`].
pub const LIST_LIMIT: u32 = 50;

/// Insert one item row. Shared by `create` and the seed batch.
pub(crate) async fn insert_item(
    conn: &libsql::Connection,
    id: &ItemId,
    description: &str,
    completed: bool,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO todo_items (id, description, completed, created_at) VALUES (?1, ?2, ?3, ?4)",
        libsql::params![
            id.as_str(),
            description,
            i64::from(completed),
            Utc::now().to_rfc3339()
        ],
    )
    .await?;
    Ok(())
}

impl ItemStore {
    /// Persist a new incomplete item and return its identifier.
    ///
    /// The description is stored as given, empty strings included.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the insert fails.
    pub async fn create(&self, description: &str) -> Result<ItemId, StoreError> {
        let conn = self.db().conn().await;
        let id = new_item_id(&conn).await?;
        insert_item(&conn, &id, description, false).await?;
        tracing::info!(%id, description, "inserted todo item");
        Ok(id)
    }

    /// Fetch a single item.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidId` for a malformed identifier and
    /// `StoreError::NotFound` if no such item exists.
    pub async fn get(&self, id: &str) -> Result<Item, StoreError> {
        let id = ItemId::parse(id)?;
        let conn = self.db().conn().await;
        let mut rows = conn
            .query(
                &format!("SELECT {ITEM_COLS} FROM todo_items WHERE id = ?1"),
                [id.as_str()],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Err(StoreError::NotFound { id: id.to_string() });
        };
        Ok(row_to_item(&row)?)
    }

    /// Whether an item with this identifier is present.
    ///
    /// A malformed identifier is reported as absent rather than as an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the lookup query fails.
    pub async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        let Ok(id) = ItemId::parse(id) else {
            tracing::debug!(id, "malformed identifier treated as absent");
            return Ok(false);
        };
        let conn = self.db().conn().await;
        let mut rows = conn
            .query("SELECT 1 FROM todo_items WHERE id = ?1 LIMIT 1", [id.as_str()])
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// Set the completion flag of an existing item. `description` is untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidId` for a malformed identifier,
    /// `StoreError::NotFound` if no such item exists, and
    /// `StoreError::Integrity` if more than one record matched.
    pub async fn set_completion(&self, id: &str, completed: bool) -> Result<(), StoreError> {
        let id = ItemId::parse(id)?;
        let affected = self
            .db()
            .conn()
            .await
            .execute(
                "UPDATE todo_items SET completed = ?1 WHERE id = ?2",
                libsql::params![i64::from(completed), id.as_str()],
            )
            .await?;

        expect_single_row(affected, &id, "update").inspect_err(|error| {
            tracing::warn!(%id, %error, "todo item not updated");
        })?;
        tracing::info!(%id, completed, "updated todo item");
        Ok(())
    }

    /// Permanently remove an item.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidId` for a malformed identifier,
    /// `StoreError::NotFound` if no such item exists, and
    /// `StoreError::Integrity` if more than one record was removed.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let id = ItemId::parse(id)?;
        let affected = self
            .db()
            .conn()
            .await
            .execute("DELETE FROM todo_items WHERE id = ?1", [id.as_str()])
            .await?;
        tracing::info!(%id, deleted = affected, "deleted todo items");

        expect_single_row(affected, &id, "delete").inspect_err(|error| {
            tracing::warn!(%id, %error, "todo item not deleted");
        })
    }

    /// Items whose completion flag equals `completed`, at most [`LIST_LIMIT`].
    ///
    /// Order is whatever the store returns; callers must not rely on it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails or a row is malformed.
    pub async fn list(&self, completed: bool) -> Result<Vec<Item>, StoreError> {
        let conn = self.db().conn().await;
        let mut rows = conn
            .query(
                &format!(
                    "SELECT {ITEM_COLS} FROM todo_items WHERE completed = ?1 LIMIT {LIST_LIMIT}"
                ),
                [i64::from(completed)],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        tracing::debug!(completed, count = items.len(), "listed todo items");
        Ok(items)
    }
}
