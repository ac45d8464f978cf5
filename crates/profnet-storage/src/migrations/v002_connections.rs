//! v002: connection_usr, connection requests and their status.

use rusqlite::Connection;

use profnet_core::errors::ProfnetResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ProfnetResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS connection_usr (
            user_id        TEXT NOT NULL,
            connection_id  TEXT NOT NULL,
            status         TEXT NOT NULL CHECK (status IN ('Request', 'Accept', 'Reject')),
            created_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (user_id, connection_id),
            FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE,
            FOREIGN KEY (connection_id) REFERENCES users(user_id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_connection_target ON connection_usr(connection_id, status);
        CREATE INDEX IF NOT EXISTS idx_connection_source ON connection_usr(user_id, status);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
