//! The engine's one SQLite connection. Reads and writes alike run under a
//! single lock, so statements never interleave.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::Connection;

use profnet_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use profnet_core::errors::ProfnetResult;

use crate::to_storage_err;

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (creating if needed) the database file at `path`.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> ProfnetResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        Self::configure(conn, busy_timeout_ms)
    }

    /// Private in-memory database; gone when dropped.
    pub fn open_in_memory() -> ProfnetResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::configure(conn, DEFAULT_BUSY_TIMEOUT_MS)
    }

    fn configure(conn: Connection, busy_timeout_ms: u32) -> ProfnetResult<Self> {
        conn.busy_timeout(Duration::from_millis(u64::from(busy_timeout_ms)))
            .map_err(|e| to_storage_err(e.to_string()))?;
        // SQLite ships with foreign keys off.
        conn.pragma_update(None, "foreign_keys", true)
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the connection for the duration of `f`.
    pub fn with_conn<F, T>(&self, f: F) -> ProfnetResult<T>
    where
        F: FnOnce(&Connection) -> ProfnetResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
