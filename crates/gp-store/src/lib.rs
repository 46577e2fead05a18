//! gp-store: graph persistence keyed by graph id.

pub mod key;
pub mod memory;
pub mod store;
pub mod types;

pub use key::graph_key;
pub use memory::MemoryStore;
pub use store::JsonStore;
pub use types::*;

use gp_graph::{EdgeRecord, Graph, Node};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Graph already stored: {graph_id}")]
    DuplicateGraph { graph_id: String },

    #[error("Graph not found: {graph_id}")]
    GraphNotFound { graph_id: String },
}

/// Persistence boundary for graphs.
///
/// Reads are keyed by graph id. Unknown ids read as empty, so a query
/// against a graph that was never stored finds no paths.
pub trait GraphStore {
    /// Persist a validated graph. Fails if its id is already stored.
    fn insert_graph(&mut self, graph: &Graph) -> StoreResult<()>;

    fn contains_graph(&self, graph_id: &str) -> StoreResult<bool>;

    /// All edges of `graph_id`, in the graph's edge order.
    fn edges_for(&self, graph_id: &str) -> StoreResult<Vec<EdgeRecord>>;

    /// All nodes of `graph_id`, in the graph's node order.
    fn nodes_for(&self, graph_id: &str) -> StoreResult<Vec<Node>>;

    /// Manifests of every stored graph, sorted by graph id.
    fn list_graphs(&self) -> StoreResult<Vec<GraphManifest>>;
}
