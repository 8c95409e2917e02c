//! Tierlist Storage Layer
//!
//! Implements the `KeyValueStore` trait for the ranking engine.
//!
//! # Architecture
//!
//! - [`SqliteStore`]: durable single-table key/value store (one row per key)
//! - [`MemoryStore`]: process-local map, for tests and throwaway sessions
//!
//! Values are opaque strings here; the engine owns their JSON shape.
//!
//! # Examples
//!
//! ```no_run
//! use tierlist_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for key/value operations
//! ```

#![warn(missing_docs)]

mod memory;

pub use memory::MemoryStore;

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tierlist_domain::KeyValueStore;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of KeyValueStore
///
/// Every key is one row of the `kv_store` table. Writes are upserts, so a
/// `set` always replaces the whole blob.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tierlist_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("tierlist.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// List every stored key, sorted
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    /// Milliseconds since the Unix epoch, for the `updated_at` column
    fn now_millis() -> Result<i64, StoreError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| StoreError::InvalidData(format!("System clock before epoch: {}", e)))?;
        Ok(elapsed.as_millis() as i64)
    }
}

impl KeyValueStore for SqliteStore {
    type Error = StoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
             value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Self::now_millis()?],
        )?;
        tracing::trace!(key, bytes = value.len(), "Stored blob");

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        let deleted = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        tracing::trace!(key, deleted, "Removed blob");

        Ok(())
    }
}
