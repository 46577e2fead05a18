//! Error types for query validation and execution.

use gp_store::StoreError;

use crate::model::QueryKind;

pub type QueryResult<T> = Result<T, QueryError>;

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("invalid query: expected at least one entry in 'queries'")]
    EmptyBatch,

    #[error("invalid query #{index}: no query kind given (expected cheapest or paths)")]
    MissingKind { index: usize },

    #[error("invalid query #{index}: query must have either cheapest or paths, got {kinds:?}")]
    MultipleKinds { index: usize, kinds: Vec<String> },

    #[error("invalid query #{index}: invalid query type {kind}")]
    UnknownKind { index: usize, kind: String },

    #[error("invalid query #{index}: malformed {kind} target: {reason}")]
    InvalidTarget {
        index: usize,
        kind: QueryKind,
        reason: String,
    },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl QueryError {
    /// True for batch validation failures, as opposed to store failures.
    pub fn is_invalid_query(&self) -> bool {
        !matches!(self, QueryError::Store(_))
    }
}
