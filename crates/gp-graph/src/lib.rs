//! gp-graph: graph model and path enumeration for graphpath.
//!
//! Provides:
//! - Core graph data structures (Node, Edge, Graph, EdgeRecord)
//! - Input document model with section-order tracking
//! - Graph builder with semantic validation
//! - Simple-path enumeration with cheapest/all-paths queries
//!
//! # Example
//!
//! ```
//! use gp_graph::{GraphBuilder, PathEnumerator};
//!
//! let mut builder = GraphBuilder::new("g0", "Example");
//! builder.add_node("a", "A").add_node("b", "B").add_node("c", "C");
//! builder.add_edge("e1", "a", "b", 1.0);
//! builder.add_edge("e2", "b", "c", 1.0);
//! builder.add_edge("e3", "a", "c", 5.0);
//! let graph = builder.build().unwrap();
//!
//! let edges = graph.edge_records();
//! let enumerator = PathEnumerator::new(graph.id(), &edges);
//! let cheapest = enumerator.find_cheapest("a", "c").unwrap();
//! assert_eq!(cheapest.nodes, vec!["a", "b", "c"]);
//! assert_eq!(cheapest.cost, 2.0);
//! ```

pub mod builder;
pub mod document;
pub mod error;
pub mod graph;
pub mod paths;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use document::{EdgeCost, EdgeDoc, GraphBody, GraphDocument, Section};
pub use error::{EndpointSide, GraphError, GraphResult};
pub use graph::{Edge, EdgeRecord, Graph, Node};
pub use paths::{GraphPath, PathEnumerator, Paths};
