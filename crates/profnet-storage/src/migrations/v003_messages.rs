//! v003: messages with per-party delete status.

use rusqlite::Connection;

use profnet_core::errors::ProfnetResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ProfnetResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS messages (
            msg_id         INTEGER PRIMARY KEY AUTOINCREMENT,
            sender_id      TEXT NOT NULL,
            receiver_id    TEXT NOT NULL,
            contents       TEXT NOT NULL,
            send_time      TEXT NOT NULL,
            delete_status  INTEGER NOT NULL DEFAULT 0 CHECK (delete_status BETWEEN 0 AND 3),
            status         TEXT NOT NULL DEFAULT 'Delivered' CHECK (status IN ('Delivered', 'Read')),
            FOREIGN KEY (sender_id) REFERENCES users(user_id) ON DELETE CASCADE,
            FOREIGN KEY (receiver_id) REFERENCES users(user_id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_messages_sender ON messages(sender_id);
        CREATE INDEX IF NOT EXISTS idx_messages_receiver ON messages(receiver_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
