use crate::errors::ProfnetResult;
use crate::models::{ConnectionEdge, ConnectionStatus};

/// Connection request persistence.
pub trait IConnectionStorage: Send + Sync {
    /// Insert a new edge, or overwrite the status of an existing
    /// `(user_id, connection_id)` edge.
    fn upsert_connection(&self, edge: &ConnectionEdge) -> ProfnetResult<()>;

    /// The edge stored for exactly `(user_id, connection_id)`.
    fn get_connection(
        &self,
        user_id: &str,
        connection_id: &str,
    ) -> ProfnetResult<Option<ConnectionEdge>>;

    /// Change the status of an existing edge. Returns false if no such edge.
    fn update_connection_status(
        &self,
        user_id: &str,
        connection_id: &str,
        status: ConnectionStatus,
    ) -> ProfnetResult<bool>;

    /// Edges addressed to `connection_id` with the given status.
    fn incoming_connections(
        &self,
        connection_id: &str,
        status: ConnectionStatus,
    ) -> ProfnetResult<Vec<ConnectionEdge>>;

    /// Number of distinct users `user_id` has an accepted edge with.
    fn accepted_count(&self, user_id: &str) -> ProfnetResult<usize>;
}
