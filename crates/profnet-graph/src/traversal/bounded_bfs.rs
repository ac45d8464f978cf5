//! Bounded BFS: expand the frontier one hop at a time, one fetch per newly
//! discovered node, stopping at the first sighting of the target.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use profnet_core::traits::IConnectionGraph;

use super::{ConnectivityReport, Reachability, TraversalConfig, UnknownReason};

/// Fetch/deadline accounting for one search.
struct SearchBudget {
    started: Instant,
    deadline: Option<Duration>,
    max_fetches: Option<usize>,
    fetches: usize,
}

impl SearchBudget {
    fn start(config: &TraversalConfig) -> Self {
        Self {
            started: Instant::now(),
            deadline: config.deadline,
            max_fetches: config.max_fetches,
            fetches: 0,
        }
    }

    /// Checked before every fetch.
    fn exhausted(&self) -> Option<UnknownReason> {
        if self.max_fetches.is_some_and(|max| self.fetches >= max) {
            return Some(UnknownReason::FetchBudgetExhausted);
        }
        if self
            .deadline
            .is_some_and(|deadline| self.started.elapsed() >= deadline)
        {
            return Some(UnknownReason::DeadlineExceeded);
        }
        None
    }
}

fn finish(
    reachability: Reachability,
    budget: &SearchBudget,
    frontier: &HashSet<String>,
    hops_explored: usize,
) -> ConnectivityReport {
    ConnectivityReport {
        reachability,
        fetches: budget.fetches,
        frontier_size: frontier.len(),
        hops_explored,
    }
}

/// Run the search. Inputs are assumed validated and `source != target`.
pub fn search(
    graph: &dyn IConnectionGraph,
    source: &str,
    target: &str,
    max_hops: usize,
    config: &TraversalConfig,
) -> ConnectivityReport {
    let mut budget = SearchBudget::start(config);
    // Nodes discovered so far. The source is the origin, never a discovery.
    let mut frontier: HashSet<String> = HashSet::new();
    // Nodes discovered on the previous hop, still to be expanded.
    let mut level: Vec<String> = vec![source.to_string()];
    let mut hops_explored = 0;

    for hop in 1..=max_hops {
        hops_explored = hop;
        let mut discovered: Vec<String> = Vec::new();

        for node in &level {
            if let Some(reason) = budget.exhausted() {
                tracing::warn!(hop, fetches = budget.fetches, ?reason, "connectivity check out of budget");
                return finish(
                    Reachability::Unknown { reason },
                    &budget,
                    &frontier,
                    hops_explored,
                );
            }

            budget.fetches += 1;
            let endpoints = match graph.fetch_accepted_edges(node) {
                Ok(endpoints) => endpoints,
                Err(e) => {
                    tracing::warn!(node = %node, hop, error = %e, "accepted-edge fetch failed, abandoning check");
                    let reason = UnknownReason::FetchFailed {
                        node: node.clone(),
                        message: e.to_string(),
                    };
                    return finish(
                        Reachability::Unknown { reason },
                        &budget,
                        &frontier,
                        hops_explored,
                    );
                }
            };

            for other in endpoints {
                if other == target {
                    tracing::debug!(hop, fetches = budget.fetches, "target reached");
                    return finish(
                        Reachability::Connected { hops: hop },
                        &budget,
                        &frontier,
                        hops_explored,
                    );
                }
                if other != source && frontier.insert(other.clone()) {
                    discovered.push(other);
                }
            }
        }

        tracing::debug!(
            hop,
            discovered = discovered.len(),
            frontier = frontier.len(),
            "hop expanded"
        );
        if discovered.is_empty() {
            // Nothing new to expand; deeper hops cannot find anything.
            break;
        }
        level = discovered;
    }

    finish(
        Reachability::NotConnected,
        &budget,
        &frontier,
        hops_explored,
    )
}
