//! Versioned schema migrations, tracked in `schema_version`.

mod v001_users;
mod v002_connections;
mod v003_messages;

use rusqlite::{params, Connection};

use profnet_core::errors::{ProfnetResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> ProfnetResult<()>;

const MIGRATIONS: &[(u32, MigrationFn)] = &[
    (1, v001_users::migrate),
    (2, v002_connections::migrate),
    (3, v003_messages::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 3;

/// Apply every migration newer than the recorded schema version.
/// Safe to call on every open.
pub fn run_migrations(conn: &Connection) -> ProfnetResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::debug!(version, "applied migration");
    }
    Ok(())
}

/// Highest applied version, 0 on a fresh database.
pub fn current_version(conn: &Connection) -> ProfnetResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
