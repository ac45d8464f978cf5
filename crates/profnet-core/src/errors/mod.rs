mod graph_error;
mod storage_error;

pub use graph_error::GraphError;
pub use storage_error::StorageError;

/// Top-level error for every ProfNet operation.
#[derive(Debug, thiserror::Error)]
pub enum ProfnetError {
    #[error("user not found: {id}")]
    UserNotFound { id: String },

    #[error("user already exists: {id}")]
    UserAlreadyExists { id: String },

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("no pending connection request from {from} to {to}")]
    RequestNotFound { from: String, to: String },

    #[error("connection request between {from} and {to} is already pending")]
    RequestPending { from: String, to: String },

    #[error("{from} and {to} are already connected")]
    AlreadyConnected { from: String, to: String },

    #[error("connection request not allowed: {reason}")]
    RequestNotAllowed { reason: String },

    #[error("message not found: {id}")]
    MessageNotFound { id: i64 },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    StorageError(#[from] StorageError),

    #[error(transparent)]
    GraphError(#[from] GraphError),
}

impl ProfnetError {
    /// Shorthand for an [`ProfnetError::InvalidInput`].
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ProfnetResult<T> = Result<T, ProfnetError>;
