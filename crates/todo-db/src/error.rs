//! Error types for todo-db.

use thiserror::Error;
use todo_core::ids::IdError;

/// Errors from the database layer: opening, migrating, querying.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connection settings were rejected before opening.
    #[error("Invalid database configuration: {0}")]
    Config(#[from] todo_config::ConfigError),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Errors returned by `ItemStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item with this identifier exists.
    #[error("Record Not Found: {id}")]
    NotFound { id: String },

    /// The identifier string is malformed.
    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    /// A single-item mutation touched more than one record.
    #[error("Data integrity violation: {0}")]
    Integrity(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<libsql::Error> for StoreError {
    fn from(error: libsql::Error) -> Self {
        Self::Database(DatabaseError::LibSql(error))
    }
}

impl StoreError {
    /// Whether the caller addressed an item that does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the caller supplied a malformed identifier.
    #[must_use]
    pub const fn is_invalid_id(&self) -> bool {
        matches!(self, Self::InvalidId(_))
    }
}
