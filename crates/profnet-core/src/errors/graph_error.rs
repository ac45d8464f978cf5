/// Connection graph errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid connectivity query: {reason}")]
    InvalidInput { reason: String },

    #[error("accepted-edge fetch failed for {node}: {reason}")]
    FetchFailed { node: String, reason: String },
}
