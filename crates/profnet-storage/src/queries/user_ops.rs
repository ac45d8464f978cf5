//! User CRUD, credential lookup, people search.

use chrono::NaiveDate;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use profnet_core::errors::{ProfnetError, ProfnetResult};
use profnet_core::models::{PersonSummary, User};
use profnet_core::traits::StoredCredentials;

use super::parse_timestamp;
use crate::to_storage_err;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn insert_user(
    conn: &Connection,
    user: &User,
    credentials: &StoredCredentials,
) -> ProfnetResult<()> {
    conn.execute(
        "INSERT INTO users
            (user_id, email, name, date_of_birth, password_hash, password_salt, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user.user_id,
            user.email,
            user.name,
            user.date_of_birth.map(|d| d.format(DATE_FORMAT).to_string()),
            credentials.password_hash,
            credentials.salt,
            user.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
            ProfnetError::UserAlreadyExists {
                id: user.user_id.clone(),
            }
        }
        other => to_storage_err(other.to_string()),
    })?;
    Ok(())
}

pub fn get_user(conn: &Connection, user_id: &str) -> ProfnetResult<Option<User>> {
    let row = conn
        .query_row(
            "SELECT user_id, email, name, date_of_birth, created_at
             FROM users WHERE user_id = ?1",
            params![user_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, String>(4)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((user_id, email, name, dob, created_at)) = row else {
        return Ok(None);
    };
    let date_of_birth = dob
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, DATE_FORMAT)
                .map_err(|e| to_storage_err(format!("parse date_of_birth {raw:?}: {e}")))
        })
        .transpose()?;

    Ok(Some(User {
        user_id,
        email,
        name,
        date_of_birth,
        created_at: parse_timestamp(&created_at)?,
    }))
}

pub fn user_exists(conn: &Connection, user_id: &str) -> ProfnetResult<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM users WHERE user_id = ?1)",
        params![user_id],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn get_credentials(
    conn: &Connection,
    user_id: &str,
) -> ProfnetResult<Option<StoredCredentials>> {
    conn.query_row(
        "SELECT password_hash, password_salt FROM users WHERE user_id = ?1",
        params![user_id],
        |row| {
            Ok(StoredCredentials {
                password_hash: row.get(0)?,
                salt: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn update_credentials(
    conn: &Connection,
    user_id: &str,
    credentials: &StoredCredentials,
) -> ProfnetResult<bool> {
    let changed = conn
        .execute(
            "UPDATE users SET password_hash = ?1, password_salt = ?2 WHERE user_id = ?3",
            params![credentials.password_hash, credentials.salt, user_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

pub fn search_by_name(conn: &Connection, name: &str) -> ProfnetResult<Vec<PersonSummary>> {
    let mut stmt = conn
        .prepare(
            "SELECT name, user_id, email FROM users WHERE name = ?1 ORDER BY user_id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![name], |row| {
            Ok(PersonSummary {
                name: row.get(0)?,
                user_id: row.get(1)?,
                email: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let results = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(results)
}
