//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::TodoDb;
use crate::error::DatabaseError;

/// Item collection table and its lookup indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_items.sql");

impl TodoDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn()
            .await
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_items: {e}")))?;
        Ok(())
    }
}
