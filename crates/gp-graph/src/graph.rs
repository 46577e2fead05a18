//! Core graph data structures.

use gp_core::Real;
use serde::{Deserialize, Serialize};

/// A vertex of a graph. Identity is the `id`; `name` is for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
}

/// A directed, weighted edge between two node ids of the same graph.
///
/// `from == to` is a self-loop. Self-loops are valid graph content but are
/// never part of an enumerated path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub cost: Real,
}

impl Edge {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// An edge as persisted and queried: tagged with the graph it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub graph_id: String,
    pub id: String,
    pub from: String,
    pub to: String,
    pub cost: Real,
}

/// The graph: a validated, immutable collection of nodes and edges.
///
/// Only [`GraphBuilder`](crate::GraphBuilder) and
/// [`GraphDocument::build`](crate::GraphDocument::build) create one, so a
/// `Graph` always satisfies:
/// - at least one node
/// - node ids are pairwise distinct
/// - every edge endpoint names a node of this graph
/// - every cost is finite and non-negative
///
/// Nodes and edges keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
}

impl Graph {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return all nodes in input order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get an edge by id.
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Project the edges into records scoped to this graph's id.
    pub fn edge_records(&self) -> Vec<EdgeRecord> {
        self.edges
            .iter()
            .map(|e| EdgeRecord {
                graph_id: self.id.clone(),
                id: e.id.clone(),
                from: e.from.clone(),
                to: e.to.clone(),
                cost: e.cost,
            })
            .collect()
    }
}
