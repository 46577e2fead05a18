//! gp-query: path query batches and their execution.
//!
//! A raw batch is validated into a [`QueryBatch`] before anything runs, so a
//! malformed request fails the whole batch without touching the store.

pub mod error;
pub mod executor;
pub mod model;

pub use error::{QueryError, QueryResult};
pub use executor::{ExecutorOptions, QueryExecutor};
pub use model::{
    Answer, AnswerBatch, CheapestAnswer, PathsAnswer, QueryBatch, QueryKind, QueryRequest,
    QueryTarget, RawQueryBatch,
};
