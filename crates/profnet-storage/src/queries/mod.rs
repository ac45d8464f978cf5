//! Parameterized SQL, one module per table.

pub mod connection_ops;
pub mod message_ops;
pub mod user_ops;

use chrono::{DateTime, Utc};

use profnet_core::errors::ProfnetResult;

use crate::to_storage_err;

pub(crate) fn parse_timestamp(raw: &str) -> ProfnetResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("parse timestamp {raw:?}: {e}")))
}
