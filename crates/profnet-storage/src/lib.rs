//! # profnet-storage
//!
//! SQLite persistence layer. A single serialized connection, versioned
//! migrations, and parameterized queries for users, connection requests, and
//! messages.

mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::StorageEngine;

use profnet_core::errors::{ProfnetError, StorageError};

/// Wrap a driver message as a storage error.
pub(crate) fn to_storage_err(message: String) -> ProfnetError {
    StorageError::SqliteError { message }.into()
}
