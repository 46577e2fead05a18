//! In-memory graph store.

use std::collections::BTreeMap;

use gp_graph::{EdgeRecord, Graph, Node};

use crate::types::GraphManifest;
use crate::{GraphStore, StoreError, StoreResult};

#[derive(Debug, Clone)]
struct StoredGraph {
    manifest: GraphManifest,
    graph: Graph,
}

/// Graph store held in memory, for tests and one-shot runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    graphs: BTreeMap<String, StoredGraph>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// The stored graph itself, if present.
    pub fn graph(&self, graph_id: &str) -> Option<&Graph> {
        self.graphs.get(graph_id).map(|s| &s.graph)
    }
}

impl GraphStore for MemoryStore {
    fn insert_graph(&mut self, graph: &Graph) -> StoreResult<()> {
        if self.graphs.contains_key(graph.id()) {
            return Err(StoreError::DuplicateGraph {
                graph_id: graph.id().to_string(),
            });
        }
        self.graphs.insert(
            graph.id().to_string(),
            StoredGraph {
                manifest: GraphManifest::for_graph(graph),
                graph: graph.clone(),
            },
        );
        Ok(())
    }

    fn contains_graph(&self, graph_id: &str) -> StoreResult<bool> {
        Ok(self.graphs.contains_key(graph_id))
    }

    fn edges_for(&self, graph_id: &str) -> StoreResult<Vec<EdgeRecord>> {
        Ok(self
            .graph(graph_id)
            .map(Graph::edge_records)
            .unwrap_or_default())
    }

    fn nodes_for(&self, graph_id: &str) -> StoreResult<Vec<Node>> {
        Ok(self
            .graph(graph_id)
            .map(|g| g.nodes().to_vec())
            .unwrap_or_default())
    }

    fn list_graphs(&self) -> StoreResult<Vec<GraphManifest>> {
        Ok(self.graphs.values().map(|s| s.manifest.clone()).collect())
    }
}
