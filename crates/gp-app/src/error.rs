//! Error types for the gp-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read graph document: {path}")]
    DocumentRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed graph document: {0}")]
    Document(String),

    #[error(transparent)]
    InvalidGraph(#[from] gp_graph::GraphError),

    #[error("Failed to read query batch: {path}")]
    BatchRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed query batch: {0}")]
    Batch(String),

    #[error(transparent)]
    Query(#[from] gp_query::QueryError),

    #[error("Store error: {0}")]
    Store(#[from] gp_store::StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gp-app operations.
pub type AppResult<T> = Result<T, AppError>;
