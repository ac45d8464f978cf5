//! Connection request CRUD and the accepted-edge lookup used by traversal.

use rusqlite::{params, Connection, OptionalExtension};

use profnet_core::errors::ProfnetResult;
use profnet_core::models::{ConnectionEdge, ConnectionStatus};

use crate::to_storage_err;

/// Opposite endpoints of all accepted edges touching `user_id`.
pub fn fetch_accepted_edges(conn: &Connection, user_id: &str) -> ProfnetResult<Vec<String>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT CASE WHEN user_id = ?1 THEN connection_id ELSE user_id END
             FROM connection_usr
             WHERE (user_id = ?1 OR connection_id = ?1) AND status = ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id, ConnectionStatus::Accept.as_str()], |row| {
            row.get::<_, String>(0)
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let results = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(results)
}

pub fn upsert_connection(conn: &Connection, edge: &ConnectionEdge) -> ProfnetResult<()> {
    conn.execute(
        "INSERT INTO connection_usr (user_id, connection_id, status)
         VALUES (?1, ?2, ?3)
         ON CONFLICT (user_id, connection_id) DO UPDATE SET
            status = excluded.status,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![edge.user_id, edge.connection_id, edge.status.as_str()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_connection(
    conn: &Connection,
    user_id: &str,
    connection_id: &str,
) -> ProfnetResult<Option<ConnectionEdge>> {
    let status = conn
        .query_row(
            "SELECT status FROM connection_usr WHERE user_id = ?1 AND connection_id = ?2",
            params![user_id, connection_id],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    status
        .map(|raw| -> ProfnetResult<ConnectionEdge> {
            Ok(ConnectionEdge::new(
                user_id,
                connection_id,
                parse_status(&raw)?,
            ))
        })
        .transpose()
}

pub fn update_connection_status(
    conn: &Connection,
    user_id: &str,
    connection_id: &str,
    status: ConnectionStatus,
) -> ProfnetResult<bool> {
    let changed = conn
        .execute(
            "UPDATE connection_usr
             SET status = ?1, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE user_id = ?2 AND connection_id = ?3",
            params![status.as_str(), user_id, connection_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

pub fn incoming_connections(
    conn: &Connection,
    connection_id: &str,
    status: ConnectionStatus,
) -> ProfnetResult<Vec<ConnectionEdge>> {
    let mut stmt = conn
        .prepare(
            "SELECT user_id FROM connection_usr
             WHERE connection_id = ?1 AND status = ?2
             ORDER BY created_at, user_id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![connection_id, status.as_str()], |row| {
            row.get::<_, String>(0)
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut edges = Vec::new();
    for row in rows {
        let user_id = row.map_err(|e| to_storage_err(e.to_string()))?;
        edges.push(ConnectionEdge::new(&user_id, connection_id, status));
    }
    Ok(edges)
}

pub fn accepted_count(conn: &Connection, user_id: &str) -> ProfnetResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(DISTINCT CASE WHEN user_id = ?1 THEN connection_id ELSE user_id END)
             FROM connection_usr
             WHERE (user_id = ?1 OR connection_id = ?1)
               AND user_id != connection_id
               AND status = ?2",
            params![user_id, ConnectionStatus::Accept.as_str()],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

fn parse_status(raw: &str) -> ProfnetResult<ConnectionStatus> {
    ConnectionStatus::from_str_name(raw)
        .ok_or_else(|| to_storage_err(format!("unknown connection status {raw:?}")))
}
