//! v001: users.

use rusqlite::Connection;

use profnet_core::errors::ProfnetResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ProfnetResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            user_id        TEXT PRIMARY KEY,
            email          TEXT NOT NULL,
            name           TEXT NOT NULL DEFAULT '',
            date_of_birth  TEXT,
            password_hash  TEXT NOT NULL,
            password_salt  TEXT NOT NULL,
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_users_name ON users(name);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
