use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Connectivity checker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Hop bound used when the caller does not pass one.
    pub max_hops: usize,
    /// Wall-clock budget for one whole check, in milliseconds. Unset = unbounded.
    pub deadline_ms: Option<u64>,
    /// Maximum number of edge fetches for one check. Unset = unbounded.
    pub max_fetches: Option<usize>,
}

impl GraphConfig {
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_hops: defaults::DEFAULT_MAX_HOPS,
            deadline_ms: None,
            max_fetches: None,
        }
    }
}
