//! StorageEngine: owns the Database and implements every storage
//! trait plus the accepted-edge lookup used by the connectivity checker.

use std::path::Path;

use profnet_core::config::StorageConfig;
use profnet_core::errors::ProfnetResult;
use profnet_core::models::{
    ConnectionEdge, ConnectionStatus, DeleteStatus, Message, MessageStatus, NewMessage,
    PersonSummary, User,
};
use profnet_core::traits::{
    IConnectionGraph, IConnectionStorage, IMessageStorage, IUserStorage, StoredCredentials,
};

use crate::connection::Database;
use crate::migrations;
use crate::queries::{connection_ops, message_ops, user_ops};

/// The main storage engine.
pub struct StorageEngine {
    db: Database,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default settings.
    pub fn open(path: &Path) -> ProfnetResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed engine using the busy timeout from `config`.
    /// `config.db_path` is ignored in favour of `path`.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> ProfnetResult<Self> {
        let db = Database::open(path, config.busy_timeout_ms)?;
        let engine = Self { db };
        engine.initialize()?;
        tracing::info!(path = %path.display(), "storage engine opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> ProfnetResult<Self> {
        let db = Database::open_in_memory()?;
        let engine = Self { db };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations.
    fn initialize(&self) -> ProfnetResult<()> {
        self.db.with_conn(migrations::run_migrations)
    }

    /// Current schema version.
    pub fn schema_version(&self) -> ProfnetResult<u32> {
        self.db.with_conn(migrations::current_version)
    }
}

impl IConnectionGraph for StorageEngine {
    fn fetch_accepted_edges(&self, user_id: &str) -> ProfnetResult<Vec<String>> {
        self.db.with_conn(|conn| connection_ops::fetch_accepted_edges(conn, user_id))
    }
}

impl IUserStorage for StorageEngine {
    fn create_user(&self, user: &User, credentials: &StoredCredentials) -> ProfnetResult<()> {
        self.db.with_conn(|conn| user_ops::insert_user(conn, user, credentials))
    }

    fn get_user(&self, user_id: &str) -> ProfnetResult<Option<User>> {
        self.db.with_conn(|conn| user_ops::get_user(conn, user_id))
    }

    fn user_exists(&self, user_id: &str) -> ProfnetResult<bool> {
        self.db.with_conn(|conn| user_ops::user_exists(conn, user_id))
    }

    fn get_credentials(&self, user_id: &str) -> ProfnetResult<Option<StoredCredentials>> {
        self.db.with_conn(|conn| user_ops::get_credentials(conn, user_id))
    }

    fn update_credentials(
        &self,
        user_id: &str,
        credentials: &StoredCredentials,
    ) -> ProfnetResult<bool> {
        self.db.with_conn(|conn| user_ops::update_credentials(conn, user_id, credentials))
    }

    fn search_by_name(&self, name: &str) -> ProfnetResult<Vec<PersonSummary>> {
        self.db.with_conn(|conn| user_ops::search_by_name(conn, name))
    }
}

impl IConnectionStorage for StorageEngine {
    fn upsert_connection(&self, edge: &ConnectionEdge) -> ProfnetResult<()> {
        self.db.with_conn(|conn| connection_ops::upsert_connection(conn, edge))
    }

    fn get_connection(
        &self,
        user_id: &str,
        connection_id: &str,
    ) -> ProfnetResult<Option<ConnectionEdge>> {
        self.db.with_conn(|conn| connection_ops::get_connection(conn, user_id, connection_id))
    }

    fn update_connection_status(
        &self,
        user_id: &str,
        connection_id: &str,
        status: ConnectionStatus,
    ) -> ProfnetResult<bool> {
        self.db.with_conn(|conn| {
            connection_ops::update_connection_status(conn, user_id, connection_id, status)
        })
    }

    fn incoming_connections(
        &self,
        connection_id: &str,
        status: ConnectionStatus,
    ) -> ProfnetResult<Vec<ConnectionEdge>> {
        self.db.with_conn(|conn| connection_ops::incoming_connections(conn, connection_id, status))
    }

    fn accepted_count(&self, user_id: &str) -> ProfnetResult<usize> {
        self.db.with_conn(|conn| connection_ops::accepted_count(conn, user_id))
    }
}

impl IMessageStorage for StorageEngine {
    fn insert_message(&self, message: &NewMessage) -> ProfnetResult<Message> {
        self.db.with_conn(|conn| message_ops::insert_message(conn, message))
    }

    fn get_message(&self, msg_id: i64) -> ProfnetResult<Option<Message>> {
        self.db.with_conn(|conn| message_ops::get_message(conn, msg_id))
    }

    fn sent_messages(&self, user_id: &str) -> ProfnetResult<Vec<Message>> {
        self.db.with_conn(|conn| message_ops::sent_messages(conn, user_id))
    }

    fn received_messages(&self, user_id: &str) -> ProfnetResult<Vec<Message>> {
        self.db.with_conn(|conn| message_ops::received_messages(conn, user_id))
    }

    fn set_message_status(&self, msg_id: i64, status: MessageStatus) -> ProfnetResult<()> {
        self.db.with_conn(|conn| message_ops::set_message_status(conn, msg_id, status))
    }

    fn set_delete_status(&self, msg_id: i64, status: DeleteStatus) -> ProfnetResult<()> {
        self.db.with_conn(|conn| message_ops::set_delete_status(conn, msg_id, status))
    }
}
