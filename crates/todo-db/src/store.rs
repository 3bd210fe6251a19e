//! The item store handed to front ends.
//!
//! `ItemStore` wraps a `TodoDb`. Operations live in `repos/` as
//! `impl ItemStore` blocks. Construct it once at startup and share it by
//! reference (or `Arc`) for the life of the process; dropping it closes the
//! connection.

use todo_config::DatabaseConfig;

use crate::TodoDb;
use crate::error::DatabaseError;

pub struct ItemStore {
    db: TodoDb,
}

impl ItemStore {
    /// Open the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the settings are invalid, the database
    /// cannot be opened, or migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = TodoDb::open(config).await?;
        tracing::info!(remote = db.is_remote(), "connected to item store");
        Ok(Self { db })
    }

    /// Open a local store at `path`, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: TodoDb::open_local(path).await?,
        })
    }

    #[must_use]
    pub const fn from_db(db: TodoDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TodoDb {
        &self.db
    }
}
