use thiserror::Error;

/// Failure to load or save a serialized expression tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("failed to read expression tree: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid expression tree json: {0}")]
    Json(#[from] serde_json::Error),
}
