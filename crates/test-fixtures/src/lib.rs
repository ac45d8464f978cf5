//! Test fixture loader for ProfNet graph scenarios, plus an in-memory
//! connection graph with fetch counting and failure injection.
//!
//! Scenario files live in `<workspace>/test-fixtures/graphs/*.json`.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use profnet_core::errors::{GraphError, ProfnetResult};
use profnet_core::models::{ConnectionEdge, ConnectionStatus};
use profnet_core::traits::IConnectionGraph;

/// Root directory of the test-fixtures data folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until the data folder appears.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("graphs").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/graphs from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Names of every graph scenario, sorted.
pub fn scenario_names() -> Vec<String> {
    let dir = fixtures_root().join("graphs");
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                path.file_stem().map(|s| s.to_string_lossy().into_owned())
            } else {
                None
            }
        })
        .collect();
    names.sort();
    names
}

/// One edge row in a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioEdge {
    pub from: String,
    pub to: String,
    pub status: ConnectionStatus,
}

/// One connectivity query with its expected answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioQuery {
    pub source: String,
    pub target: String,
    pub max_hops: usize,
    pub expected: bool,
}

/// A named social graph with expected connectivity answers.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub edges: Vec<ScenarioEdge>,
    pub queries: Vec<ScenarioQuery>,
}

impl GraphScenario {
    /// Load `graphs/<name>.json`.
    pub fn load(name: &str) -> Self {
        load_fixture(&format!("graphs/{name}.json"))
    }

    pub fn connection_edges(&self) -> Vec<ConnectionEdge> {
        self.edges
            .iter()
            .map(|e| ConnectionEdge::new(&e.from, &e.to, e.status))
            .collect()
    }

    /// Every user id mentioned by an edge or a query, sorted.
    pub fn user_ids(&self) -> Vec<String> {
        let mut ids: HashSet<&str> = HashSet::new();
        for edge in &self.edges {
            ids.insert(&edge.from);
            ids.insert(&edge.to);
        }
        for query in &self.queries {
            ids.insert(&query.source);
            ids.insert(&query.target);
        }
        let mut ids: Vec<String> = ids.into_iter().map(String::from).collect();
        ids.sort();
        ids
    }

    pub fn graph(&self) -> InMemoryGraph {
        InMemoryGraph::from_edges(&self.connection_edges())
    }
}

/// Adjacency-list graph implementing [`IConnectionGraph`] without a database.
///
/// Keeps every edge row (so reverse duplicates come back twice, like the
/// SQL lookup), counts fetches, and can be told to fail or stall on
/// specific nodes.
#[derive(Debug, Default)]
pub struct InMemoryGraph {
    accepted: BTreeMap<String, Vec<String>>,
    failing: HashSet<String>,
    fetch_delay: Option<Duration>,
    fetches: AtomicUsize,
}

impl InMemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges(edges: &[ConnectionEdge]) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Build from `(from, to)` pairs, all accepted.
    pub fn accepted(pairs: &[(&str, &str)]) -> Self {
        let edges: Vec<ConnectionEdge> = pairs
            .iter()
            .map(|(a, b)| ConnectionEdge::new(a, b, ConnectionStatus::Accept))
            .collect();
        Self::from_edges(&edges)
    }

    pub fn add_edge(&mut self, edge: &ConnectionEdge) {
        if !edge.status.is_traversable() {
            return;
        }
        self.accepted
            .entry(edge.user_id.clone())
            .or_default()
            .push(edge.connection_id.clone());
        if edge.user_id != edge.connection_id {
            self.accepted
                .entry(edge.connection_id.clone())
                .or_default()
                .push(edge.user_id.clone());
        }
    }

    /// Make every fetch for `node` fail.
    pub fn fail_on(mut self, node: &str) -> Self {
        self.failing.insert(node.to_string());
        self
    }

    /// Sleep this long inside every fetch.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// Number of fetches served (including failed ones).
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl IConnectionGraph for InMemoryGraph {
    fn fetch_accepted_edges(&self, user_id: &str) -> ProfnetResult<Vec<String>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.fetch_delay {
            std::thread::sleep(delay);
        }
        if self.failing.contains(user_id) {
            return Err(GraphError::FetchFailed {
                node: user_id.to_string(),
                reason: "injected failure".to_string(),
            }
            .into());
        }
        Ok(self.accepted.get(user_id).cloned().unwrap_or_default())
    }
}
