//! Direct neighbors (depth=1) of a node.

use std::collections::HashSet;

use profnet_core::errors::ProfnetResult;
use profnet_core::traits::IConnectionGraph;

/// Distinct accepted connections of `node`, in first-seen order, excluding
/// `node` itself.
pub fn get(graph: &dyn IConnectionGraph, node: &str) -> ProfnetResult<Vec<String>> {
    let mut seen = HashSet::new();
    let neighbors = graph
        .fetch_accepted_edges(node)?
        .into_iter()
        .filter(|other| other != node && seen.insert(other.clone()))
        .collect();
    Ok(neighbors)
}
