//! Incremental graph builder.

use gp_core::Real;

use crate::error::GraphResult;
use crate::graph::{Edge, Graph, Node};
use crate::validate;

/// Builder for constructing a graph in code.
///
/// Use `add_node` and `add_edge` to build up the graph, then call `build()`
/// to validate and freeze it into an immutable `Graph`. Edges may name
/// nodes added later; references are only resolved by `build()`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    id: String,
    name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new empty builder for graph `id`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn add_node(&mut self, id: impl Into<String>, name: impl Into<String>) -> &mut Self {
        self.nodes.push(Node {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        cost: Real,
    ) -> &mut Self {
        self.edges.push(Edge {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            cost,
        });
        self
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    pub fn build(self) -> GraphResult<Graph> {
        validate::validate_structure(&self.id, &self.nodes, &self.edges)?;

        tracing::debug!(
            graph = %self.id,
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "graph built"
        );

        Ok(Graph {
            id: self.id,
            name: self.name,
            nodes: self.nodes,
            edges: self.edges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new("g0", "Graph");
        builder.add_node("a", "A").add_node("b", "B");
        builder.add_edge("e1", "a", "b", 1.5);

        assert_eq!(builder.nodes.len(), 2);
        assert_eq!(builder.edges.len(), 1);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new("g0", "Graph");
        builder.add_node("a", "A").add_node("e", "E");
        builder.add_edge("e1", "a", "e", 42.789);
        builder.add_edge("e2", "a", "a", 0.0);

        let graph = builder.build().unwrap();
        assert_eq!(graph.id(), "g0");
        assert_eq!(graph.name(), "Graph");
        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.edges().len(), 2);
        assert_eq!(graph.edges()[0].cost, 42.789);
    }

    #[test]
    fn builder_forward_reference_resolves() {
        let mut builder = GraphBuilder::new("g0", "Graph");
        builder.add_edge("e1", "a", "b", 1.0);
        builder.add_node("a", "A").add_node("b", "B");
        assert!(builder.build().is_ok());
    }

    #[test]
    fn builder_rejects_empty() {
        let err = GraphBuilder::new("g0", "Graph").build().unwrap_err();
        assert!(matches!(err, GraphError::NoNodes { .. }));
    }
}
