use crate::errors::ProfnetResult;

/// Read-only view of the accepted-connection graph.
///
/// This is the only capability the connectivity checker needs from the store.
pub trait IConnectionGraph: Send + Sync {
    /// Opposite endpoints of every `Accept` edge that touches `user_id`, in
    /// either direction. Order is unspecified and duplicates are possible
    /// (e.g. when both `(a, b)` and `(b, a)` are accepted); callers dedupe.
    fn fetch_accepted_edges(&self, user_id: &str) -> ProfnetResult<Vec<String>>;
}
