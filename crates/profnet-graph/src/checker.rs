//! ConnectivityChecker: the validated entry point for bounded-hop checks.

use profnet_core::errors::{GraphError, ProfnetResult};
use profnet_core::traits::IConnectionGraph;

use crate::traversal::{bounded_bfs, neighbors, ConnectivityReport, Reachability, TraversalConfig};

/// Answers "is `target` within `max_hops` accepted connections of `source`?".
///
/// Holds no per-search state: every call builds its own frontier, so a
/// checker can be reused freely.
pub struct ConnectivityChecker<'g> {
    graph: &'g dyn IConnectionGraph,
    config: TraversalConfig,
}

impl<'g> ConnectivityChecker<'g> {
    pub fn new(graph: &'g dyn IConnectionGraph) -> Self {
        Self::with_config(graph, TraversalConfig::default())
    }

    pub fn with_config(graph: &'g dyn IConnectionGraph, config: TraversalConfig) -> Self {
        Self { graph, config }
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Full check with statistics.
    ///
    /// Invalid input is rejected before any fetch. A collaborator failure,
    /// an expired deadline, or an exhausted fetch budget yields
    /// [`Reachability::Unknown`] rather than an error.
    pub fn check(
        &self,
        source: &str,
        target: &str,
        max_hops: usize,
    ) -> ProfnetResult<ConnectivityReport> {
        validate(source, target, max_hops)?;

        if source == target {
            return Ok(ConnectivityReport {
                reachability: Reachability::Connected { hops: 0 },
                fetches: 0,
                frontier_size: 0,
                hops_explored: 0,
            });
        }

        let report = bounded_bfs::search(self.graph, source, target, max_hops, &self.config);
        tracing::debug!(
            source,
            target,
            max_hops,
            reachability = ?report.reachability,
            fetches = report.fetches,
            "connectivity check finished"
        );
        Ok(report)
    }

    /// [`check`](Self::check) with the configured default hop bound.
    pub fn check_default(&self, source: &str, target: &str) -> ProfnetResult<ConnectivityReport> {
        self.check(source, target, self.config.max_hops)
    }

    /// Boolean form. Anything other than a positive answer, including invalid
    /// input and an unknown outcome, is `false`.
    pub fn is_connected_within_hops(&self, source: &str, target: &str, max_hops: usize) -> bool {
        match self.check(source, target, max_hops) {
            Ok(report) => report.reachability.is_connected(),
            Err(e) => {
                tracing::warn!(error = %e, "connectivity check rejected");
                false
            }
        }
    }

    /// Distinct direct connections of `node`.
    pub fn neighbors(&self, node: &str) -> ProfnetResult<Vec<String>> {
        if node.trim().is_empty() {
            return Err(GraphError::InvalidInput {
                reason: "node id must not be empty".to_string(),
            }
            .into());
        }
        neighbors::get(self.graph, node)
    }
}

fn validate(source: &str, target: &str, max_hops: usize) -> ProfnetResult<()> {
    let reason = if source.trim().is_empty() {
        "source must not be empty".to_string()
    } else if target.trim().is_empty() {
        "target must not be empty".to_string()
    } else if max_hops == 0 {
        "max_hops must be at least 1".to_string()
    } else {
        return Ok(());
    };
    Err(GraphError::InvalidInput { reason }.into())
}
