//! # todo-db
//!
//! libSQL-backed item store for todolist.
//!
//! Holds the single `todo_items` collection: create, set-completion, delete,
//! list-by-completion, plus the idempotent startup seed. Works against a local
//! file, an in-memory database (tests), or a remote libSQL server.
//!
//! Single-item mutations are one conditional statement each and branch on the
//! affected-row count, so there is no separate existence probe to race.
//! `ItemStore::seed` still checks then inserts; two processes starting at the
//! same moment can both seed.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use tokio::sync::{Mutex, MutexGuard};
use todo_config::DatabaseConfig;
use todo_core::ids::ItemId;

pub use error::StoreError;
pub use store::ItemStore;

/// Raw database handle: connection, migrations, identifier generation.
///
/// libSQL reports affected rows per connection, so every statement sequence
/// runs while holding the connection lock.
pub struct TodoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: Mutex<libsql::Connection>,
    remote: bool,
}

impl TodoDb {
    /// Open the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Config` if the settings are unusable, or any
    /// error from [`Self::open_local`] / [`Self::open_remote`].
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        config.validate()?;
        if config.is_remote() {
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            Self::open_local(&config.url).await
        }
    }

    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let todo_db = Self {
            db,
            conn: Mutex::new(conn),
            remote: false,
        };
        todo_db.run_migrations().await?;
        tracing::debug!(path, "opened local item store");
        Ok(todo_db)
    }

    /// Open a remote libSQL database over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let todo_db = Self {
            db,
            conn: Mutex::new(conn),
            remote: true,
        };
        todo_db.run_migrations().await?;
        tracing::debug!(url, "opened remote item store");
        Ok(todo_db)
    }

    /// Lock the connection for direct queries.
    ///
    /// Hold the guard for the whole statement sequence whose results belong
    /// together (a mutation and its affected count, a transaction).
    pub async fn conn(&self) -> MutexGuard<'_, libsql::Connection> {
        self.conn.lock().await
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Generate a fresh item identifier via libSQL.
    ///
    /// Seconds since the epoch as 8 hex chars, then `randomblob(8)` as 16 hex
    /// chars.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns a malformed value.
    pub async fn generate_item_id(&self) -> Result<ItemId, DatabaseError> {
        let conn = self.conn().await;
        helpers::new_item_id(&conn).await
    }
}
