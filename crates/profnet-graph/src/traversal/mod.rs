//! Traversal configuration and results.

pub mod bounded_bfs;
pub mod neighbors;

use std::time::Duration;

use profnet_core::config::GraphConfig;

/// Bounds applied to a single connectivity check.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Hop bound used by [`crate::ConnectivityChecker::check_default`].
    pub max_hops: usize,
    /// Wall-clock budget for the whole search.
    pub deadline: Option<Duration>,
    /// Maximum number of edge fetches for the whole search.
    pub max_fetches: Option<usize>,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self::from(&GraphConfig::default())
    }
}

impl From<&GraphConfig> for TraversalConfig {
    fn from(config: &GraphConfig) -> Self {
        Self {
            max_hops: config.max_hops,
            deadline: config.deadline(),
            max_fetches: config.max_fetches,
        }
    }
}

/// Why a check could not reach a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownReason {
    /// The collaborator failed; the search was abandoned without retry.
    FetchFailed { node: String, message: String },
    DeadlineExceeded,
    FetchBudgetExhausted,
}

/// Outcome of a bounded connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reachability {
    /// Target found after `hops` hops (0 when source == target).
    Connected { hops: usize },
    /// Target not reachable within the hop bound.
    NotConnected,
    Unknown { reason: UnknownReason },
}

impl Reachability {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

/// Verdict plus the cost of reaching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityReport {
    pub reachability: Reachability,
    /// Edge fetches issued (including a failed one).
    pub fetches: usize,
    /// Distinct nodes discovered, excluding the source.
    pub frontier_size: usize,
    /// Highest hop the search started expanding.
    pub hops_explored: usize,
}
