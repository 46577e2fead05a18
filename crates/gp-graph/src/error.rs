//! Graph-specific error types.

use std::fmt;

pub type GraphResult<T> = Result<T, GraphError>;

/// Which end of an edge failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointSide {
    From,
    To,
}

impl fmt::Display for EndpointSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointSide::From => f.write_str("from"),
            EndpointSide::To => f.write_str("to"),
        }
    }
}

/// Reasons a graph document or builder is rejected as an invalid graph.
///
/// Every variant carries the offending ids so the failure can be diagnosed
/// without re-reading the input.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// No nodes were defined (or the node section is missing).
    #[error("invalid graph {graph}: at least one node must be defined")]
    NoNodes { graph: String },

    /// The edge section appears before the node section.
    #[error("invalid graph {graph}: nodes must be defined before edges")]
    EdgesBeforeNodes { graph: String },

    /// The edge section is absent.
    #[error("invalid graph {graph}: edges section is missing")]
    MissingEdges { graph: String },

    #[error("invalid graph: node id {id} was already defined")]
    DuplicateNode { id: String },

    /// An edge endpoint names a node that was never defined.
    #[error("invalid graph: {side} {node} in edge {edge} is not defined in nodes")]
    UnresolvedEndpoint {
        edge: String,
        side: EndpointSide,
        node: String,
    },

    #[error("invalid graph: cost of edge {edge} is invalid ({reason})")]
    InvalidCost { edge: String, reason: String },
}

impl GraphError {
    /// Id of the node or edge the error is about, if any.
    pub fn offending_id(&self) -> Option<&str> {
        match self {
            GraphError::DuplicateNode { id } => Some(id),
            GraphError::UnresolvedEndpoint { edge, .. } | GraphError::InvalidCost { edge, .. } => {
                Some(edge)
            }
            GraphError::NoNodes { .. }
            | GraphError::EdgesBeforeNodes { .. }
            | GraphError::MissingEdges { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_message_names_side() {
        let err = GraphError::UnresolvedEndpoint {
            edge: "e1".into(),
            side: EndpointSide::To,
            node: "zz".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid graph: to zz in edge e1 is not defined in nodes"
        );
        assert_eq!(err.offending_id(), Some("e1"));
    }

    #[test]
    fn duplicate_message_names_id() {
        let err = GraphError::DuplicateNode { id: "a".into() };
        assert!(err.to_string().contains("node id a was already defined"));
    }
}
