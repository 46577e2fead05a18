//! Graph validation logic.

use std::collections::HashSet;

use gp_core::{CoreError, Real, ensure_cost};

use crate::error::{EndpointSide, GraphError, GraphResult};
use crate::graph::{Edge, Node};

/// Validate a full node/edge set: nodes first, then each edge in order.
pub(crate) fn validate_structure(
    graph_id: &str,
    nodes: &[Node],
    edges: &[Edge],
) -> GraphResult<()> {
    ensure_has_nodes(graph_id, nodes)?;
    let ids = node_ids(nodes)?;
    for edge in edges {
        resolve_endpoints(&edge.id, &edge.from, &edge.to, &ids)?;
        check_cost(&edge.id, edge.cost)?;
    }
    Ok(())
}

pub(crate) fn ensure_has_nodes(graph_id: &str, nodes: &[Node]) -> GraphResult<()> {
    if nodes.is_empty() {
        return Err(GraphError::NoNodes {
            graph: graph_id.to_string(),
        });
    }
    Ok(())
}

/// Collect node ids, failing on the first duplicate.
pub(crate) fn node_ids(nodes: &[Node]) -> GraphResult<HashSet<&str>> {
    let mut ids = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !ids.insert(node.id.as_str()) {
            return Err(GraphError::DuplicateNode {
                id: node.id.clone(),
            });
        }
    }
    Ok(ids)
}

/// Both endpoints must be defined nodes; `from` is reported first.
pub(crate) fn resolve_endpoints(
    edge_id: &str,
    from: &str,
    to: &str,
    ids: &HashSet<&str>,
) -> GraphResult<()> {
    for (side, node) in [(EndpointSide::From, from), (EndpointSide::To, to)] {
        if !ids.contains(node) {
            return Err(GraphError::UnresolvedEndpoint {
                edge: edge_id.to_string(),
                side,
                node: node.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn check_cost(edge_id: &str, cost: Real) -> GraphResult<Real> {
    ensure_cost(cost, "edge cost").map_err(|e| cost_error(edge_id, e))
}

pub(crate) fn cost_error(edge_id: &str, err: CoreError) -> GraphError {
    GraphError::InvalidCost {
        edge: edge_id.to_string(),
        reason: err.to_string(),
    }
}
