//! Row-to-entity parsing helpers.
//!
//! libSQL rows are column-indexed and carry `completed` as an INTEGER, so
//! every read path goes through these conversions.

use todo_core::entities::Item;
use todo_core::ids::ItemId;

use crate::error::{DatabaseError, StoreError};

/// Columns selected for every `Item` read, in `row_to_item` order.
pub(crate) const ITEM_COLS: &str = "id, description, completed";

/// Read an INTEGER 0/1 column as a bool.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for any value other than 0 or 1.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    match row.get::<i64>(idx)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(DatabaseError::InvalidState(format!(
            "expected 0 or 1 in boolean column {idx}, found {other}"
        ))),
    }
}

/// Parse an identifier read back from storage.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the stored value is malformed.
pub fn parse_stored_id(raw: &str) -> Result<ItemId, DatabaseError> {
    ItemId::parse(raw)
        .map_err(|e| DatabaseError::InvalidState(format!("stored identifier '{raw}': {e}")))
}

/// Mint an identifier on `conn`: epoch seconds as 8 hex chars, then
/// `randomblob(8)` as 16 hex chars.
pub(crate) async fn new_item_id(conn: &libsql::Connection) -> Result<ItemId, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT printf('%08x', CAST(strftime('%s', 'now') AS INTEGER)) \
             || lower(hex(randomblob(8)))",
            (),
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    parse_stored_id(&row.get::<String>(0)?)
}

pub(crate) fn row_to_item(row: &libsql::Row) -> Result<Item, DatabaseError> {
    Ok(Item {
        id: parse_stored_id(&row.get::<String>(0)?)?,
        description: row.get(1)?,
        completed: get_bool(row, 2)?,
    })
}

/// Interpret the affected-row count of a single-item mutation.
///
/// 0 rows means the item is gone; more than 1 means the primary key was
/// bypassed somehow.
pub(crate) fn expect_single_row(
    affected: u64,
    id: &ItemId,
    action: &str,
) -> Result<(), StoreError> {
    match affected {
        0 => Err(StoreError::NotFound { id: id.to_string() }),
        1 => Ok(()),
        n => Err(StoreError::Integrity(format!(
            "{action} affected {n} records for id {id}"
        ))),
    }
}
