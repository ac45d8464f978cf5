//! Message CRUD and per-party visibility filters.

use rusqlite::{params, Connection, OptionalExtension, Row};

use profnet_core::errors::ProfnetResult;
use profnet_core::models::{DeleteStatus, Message, MessageStatus, NewMessage};

use super::parse_timestamp;
use crate::to_storage_err;

const MESSAGE_COLUMNS: &str =
    "msg_id, sender_id, receiver_id, contents, send_time, delete_status, status";

/// Raw column values; decoded outside the rusqlite row closure so decode
/// failures surface as storage errors.
type RawMessage = (i64, String, String, String, String, i64, String);

fn read_raw(row: &Row<'_>) -> rusqlite::Result<RawMessage> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

fn decode(raw: RawMessage) -> ProfnetResult<Message> {
    let (msg_id, sender_id, receiver_id, contents, send_time, delete_code, status) = raw;
    let delete_status = DeleteStatus::from_code(delete_code)
        .ok_or_else(|| to_storage_err(format!("unknown delete status {delete_code}")))?;
    let status = MessageStatus::from_str_name(&status)
        .ok_or_else(|| to_storage_err(format!("unknown message status {status:?}")))?;
    Ok(Message {
        msg_id,
        sender_id,
        receiver_id,
        contents,
        send_time: parse_timestamp(&send_time)?,
        delete_status,
        status,
    })
}

pub fn insert_message(conn: &Connection, message: &NewMessage) -> ProfnetResult<Message> {
    conn.execute(
        "INSERT INTO messages (sender_id, receiver_id, contents, send_time, delete_status, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            message.sender_id,
            message.receiver_id,
            message.contents,
            message.send_time.to_rfc3339(),
            DeleteStatus::None.code(),
            MessageStatus::Delivered.as_str(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let msg_id = conn.last_insert_rowid();
    get_message(conn, msg_id)?
        .ok_or_else(|| to_storage_err(format!("message {msg_id} vanished after insert")))
}

pub fn get_message(conn: &Connection, msg_id: i64) -> ProfnetResult<Option<Message>> {
    let raw = conn
        .query_row(
            &format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE msg_id = ?1"),
            params![msg_id],
            read_raw,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(decode).transpose()
}

/// Messages sent by `user_id` that the sender still has.
pub fn sent_messages(conn: &Connection, user_id: &str) -> ProfnetResult<Vec<Message>> {
    query_list(
        conn,
        &format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages
             WHERE sender_id = ?1 AND delete_status NOT IN (?2, ?3)
             ORDER BY msg_id"
        ),
        user_id,
        DeleteStatus::DeletedBySender,
    )
}

/// Messages received by `user_id` that the receiver still has.
pub fn received_messages(conn: &Connection, user_id: &str) -> ProfnetResult<Vec<Message>> {
    query_list(
        conn,
        &format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages
             WHERE receiver_id = ?1 AND delete_status NOT IN (?2, ?3)
             ORDER BY msg_id"
        ),
        user_id,
        DeleteStatus::DeletedByReceiver,
    )
}

fn query_list(
    conn: &Connection,
    sql: &str,
    user_id: &str,
    hidden: DeleteStatus,
) -> ProfnetResult<Vec<Message>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(
            params![user_id, hidden.code(), DeleteStatus::DeletedByBoth.code()],
            read_raw,
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push(decode(raw)?);
    }
    Ok(results)
}

pub fn set_message_status(
    conn: &Connection,
    msg_id: i64,
    status: MessageStatus,
) -> ProfnetResult<()> {
    conn.execute(
        "UPDATE messages SET status = ?1 WHERE msg_id = ?2",
        params![status.as_str(), msg_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn set_delete_status(
    conn: &Connection,
    msg_id: i64,
    status: DeleteStatus,
) -> ProfnetResult<()> {
    conn.execute(
        "UPDATE messages SET delete_status = ?1 WHERE msg_id = ?2",
        params![status.code(), msg_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
