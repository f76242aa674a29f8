//! SQLite-backed world state

use crate::StoreError;
use provchain_domain::StateStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// World state persisted in a single SQLite table
///
/// Use `:memory:` for an in-memory database (useful for testing).
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// `SqliteState` instance.
pub struct SqliteState {
    conn: Connection,
}

impl SqliteState {
    /// Open (or create) world state at the given database path
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use provchain_store::SqliteState;
    ///
    /// let state = SqliteState::new("provchain.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut state = Self { conn };
        state.initialize_schema()?;
        Ok(state)
    }

    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Number of stored keys
    pub fn len(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM state", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl StateStore for SqliteState {
    type Error = StoreError;

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT INTO state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
