//! Shared application service layer for graphpath.
//!
//! Reads graph documents and query batches at the process boundary, and
//! wires them to the graph model, the store, and the query executor.

pub mod error;
pub mod graph_service;
pub mod query_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use graph_service::{
    DocumentFormat, add_document, add_graph, list_graphs, load_document, parse_document,
    validate_document,
};
pub use query_service::{load_batch, parse_batch, read_batch, run_batch, write_answers};
