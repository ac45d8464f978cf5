//! NetworkEngine: owns the store and the configuration every operation
//! reads its bounds from.

use std::path::Path;

use profnet_core::config::ProfnetConfig;
use profnet_core::errors::{ProfnetError, ProfnetResult};
use profnet_core::traits::IUserStorage;
use profnet_graph::{ConnectivityChecker, TraversalConfig};
use profnet_storage::StorageEngine;

/// Entry point for account, request, and message operations.
///
/// The operations themselves live in [`crate::accounts`],
/// [`crate::requests`], and [`crate::messages`].
pub struct NetworkEngine {
    pub(crate) storage: StorageEngine,
    pub(crate) config: ProfnetConfig,
}

impl NetworkEngine {
    pub fn new(storage: StorageEngine, config: ProfnetConfig) -> Self {
        Self { storage, config }
    }

    /// Open the file-backed store named by `config.storage.db_path`.
    pub fn open(config: ProfnetConfig) -> ProfnetResult<Self> {
        let storage =
            StorageEngine::open_with_config(Path::new(&config.storage.db_path), &config.storage)?;
        Ok(Self::new(storage, config))
    }

    /// In-memory store; nothing survives the engine.
    pub fn open_in_memory(config: ProfnetConfig) -> ProfnetResult<Self> {
        Ok(Self::new(StorageEngine::open_in_memory()?, config))
    }

    pub fn storage(&self) -> &StorageEngine {
        &self.storage
    }

    pub fn config(&self) -> &ProfnetConfig {
        &self.config
    }

    /// A checker over the store, bounded by `[graph]`.
    pub fn checker(&self) -> ConnectivityChecker<'_> {
        ConnectivityChecker::with_config(&self.storage, TraversalConfig::from(&self.config.graph))
    }

    pub(crate) fn require_user(&self, user_id: &str) -> ProfnetResult<()> {
        if self.storage.user_exists(user_id)? {
            Ok(())
        } else {
            Err(ProfnetError::UserNotFound {
                id: user_id.to_string(),
            })
        }
    }
}
