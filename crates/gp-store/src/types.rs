//! Stored data types.

use gp_graph::Graph;
use serde::{Deserialize, Serialize};

/// Summary written next to a stored graph's records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphManifest {
    pub graph_id: String,
    pub name: String,
    pub node_count: usize,
    pub edge_count: usize,
    /// RFC 3339 timestamp of insertion.
    pub stored_at: String,
}

impl GraphManifest {
    pub fn for_graph(graph: &Graph) -> Self {
        Self {
            graph_id: graph.id().to_string(),
            name: graph.name().to_string(),
            node_count: graph.nodes().len(),
            edge_count: graph.edges().len(),
            stored_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
