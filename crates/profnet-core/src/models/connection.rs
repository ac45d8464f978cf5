use serde::{Deserialize, Serialize};

/// Lifecycle of a connection request. Only `Accept` edges are traversable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionStatus {
    Request,
    Accept,
    Reject,
}

impl ConnectionStatus {
    /// Name as stored in the `connection_usr.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "Request",
            Self::Accept => "Accept",
            Self::Reject => "Reject",
        }
    }

    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "Request" => Some(Self::Request),
            "Accept" => Some(Self::Accept),
            "Reject" => Some(Self::Reject),
            _ => None,
        }
    }

    pub fn is_traversable(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connection record: `user_id` asked `connection_id` to connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEdge {
    pub user_id: String,
    pub connection_id: String,
    pub status: ConnectionStatus,
}

impl ConnectionEdge {
    pub fn new(user_id: &str, connection_id: &str, status: ConnectionStatus) -> Self {
        Self {
            user_id: user_id.to_string(),
            connection_id: connection_id.to_string(),
            status,
        }
    }
}
