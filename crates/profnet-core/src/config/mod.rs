pub mod defaults;
mod graph_config;
mod network_config;
mod observability_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ProfnetError, ProfnetResult};

pub use graph_config::GraphConfig;
pub use network_config::NetworkConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration, one section per subsystem.
/// Every field has a default, so an empty TOML document is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfnetConfig {
    pub storage: StorageConfig,
    pub graph: GraphConfig,
    pub network: NetworkConfig,
    pub observability: ObservabilityConfig,
}

impl ProfnetConfig {
    /// Parse a TOML document, filling in defaults for anything missing.
    pub fn from_toml(content: &str) -> ProfnetResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ProfnetError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and parse a TOML config file.
    pub fn from_file(path: &Path) -> ProfnetResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProfnetError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    fn validate(&self) -> ProfnetResult<()> {
        if self.graph.max_hops == 0 {
            return Err(ProfnetError::ConfigError(
                "graph.max_hops must be at least 1".to_string(),
            ));
        }
        if self.network.request_max_hops == 0 {
            return Err(ProfnetError::ConfigError(
                "network.request_max_hops must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
