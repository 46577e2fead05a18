//! Integration tests for gp-graph.

use std::collections::HashSet;

use gp_graph::{
    EdgeCost, EdgeDoc, EndpointSide, GraphBody, GraphBuilder, GraphDocument, GraphError, Node,
    PathEnumerator,
};

fn node(id: &str) -> Node {
    Node {
        id: id.into(),
        name: format!("{id} name"),
    }
}

fn edge_doc(id: &str, from: &str, to: &str, cost: Option<f64>) -> EdgeDoc {
    EdgeDoc {
        id: id.into(),
        from: from.into(),
        to: to.into(),
        cost: cost.map(EdgeCost::from),
    }
}

#[test]
fn scenario_self_loop_excluded_from_cheapest() {
    let body = GraphBody::new("g0", "Scenario A")
        .with_nodes(vec![node("a"), node("e")])
        .with_edges(vec![
            edge_doc("e1", "a", "e", Some(42.789)),
            edge_doc("e2", "a", "a", Some(0.0)),
        ]);
    let graph = GraphDocument { graph: body }.build().unwrap();

    let edges = graph.edge_records();
    let en = PathEnumerator::new(graph.id(), &edges);
    let cheapest = en.find_cheapest("a", "e").unwrap();
    assert_eq!(cheapest.nodes, vec!["a", "e"]);
    assert_eq!(cheapest.cost, 42.789);
}

#[test]
fn scenario_triangle() {
    let mut builder = GraphBuilder::new("g1", "Scenario B");
    builder.add_node("a", "A").add_node("b", "B").add_node("c", "C");
    builder.add_edge("e1", "a", "b", 1.0);
    builder.add_edge("e2", "b", "c", 1.0);
    builder.add_edge("e3", "a", "c", 5.0);
    let graph = builder.build().unwrap();

    let edges = graph.edge_records();
    let en = PathEnumerator::new(graph.id(), &edges);

    let all: HashSet<Vec<String>> = en.find_all("a", "c").into_iter().collect();
    let expected: HashSet<Vec<String>> = [vec!["a", "c"], vec!["a", "b", "c"]]
        .into_iter()
        .map(|p| p.into_iter().map(String::from).collect())
        .collect();
    assert_eq!(all, expected);

    let cheapest = en.find_cheapest("a", "c").unwrap();
    assert_eq!(cheapest.nodes, vec!["a", "b", "c"]);
    assert_eq!(cheapest.cost, 2.0);
}

#[test]
fn scenario_unreachable() {
    let mut builder = GraphBuilder::new("g2", "Scenario C");
    builder.add_node("a", "A").add_node("b", "B").add_node("c", "C");
    builder.add_edge("e1", "a", "b", 1.0);
    let graph = builder.build().unwrap();

    let edges = graph.edge_records();
    let en = PathEnumerator::new(graph.id(), &edges);
    assert!(en.find_cheapest("a", "c").is_none());
    assert!(en.find_all("a", "c").is_empty());
}

#[test]
fn missing_cost_behaves_like_zero() {
    let with_default = GraphBody::new("g", "n")
        .with_nodes(vec![node("a"), node("b")])
        .with_edges(vec![edge_doc("e1", "a", "b", None)])
        .build()
        .unwrap();
    let with_zero = GraphBody::new("g", "n")
        .with_nodes(vec![node("a"), node("b")])
        .with_edges(vec![edge_doc("e1", "a", "b", Some(0.0))])
        .build()
        .unwrap();
    assert_eq!(with_default, with_zero);

    let edges = with_default.edge_records();
    let path = PathEnumerator::new("g", &edges)
        .find_cheapest("a", "b")
        .unwrap();
    assert_eq!(path.cost, 0.0);
}

#[test]
fn zero_nodes_rejected_regardless_of_edges() {
    for edges in [vec![], vec![edge_doc("e1", "a", "b", Some(1.0))]] {
        let err = GraphBody::new("g", "n")
            .with_nodes(vec![])
            .with_edges(edges)
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::NoNodes { .. }));
    }
}

#[test]
fn empty_nodes_reported_before_section_order() {
    let err = GraphBody::new("g", "n")
        .with_edges(vec![])
        .with_nodes(vec![])
        .build()
        .unwrap_err();
    assert!(matches!(err, GraphError::NoNodes { .. }));
}

#[test]
fn section_order_reported_before_missing_references() {
    let err = GraphBody::new("g", "n")
        .with_edges(vec![edge_doc("e1", "x", "y", None)])
        .with_nodes(vec![node("a")])
        .build()
        .unwrap_err();
    assert!(matches!(err, GraphError::EdgesBeforeNodes { .. }));
}

#[test]
fn unresolved_side_is_identified() {
    let err = GraphBody::new("g", "n")
        .with_nodes(vec![node("a")])
        .with_edges(vec![edge_doc("e5", "a", "b", None)])
        .build()
        .unwrap_err();
    match err {
        GraphError::UnresolvedEndpoint { edge, side, node } => {
            assert_eq!(edge, "e5");
            assert_eq!(side, EndpointSide::To);
            assert_eq!(node, "b");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn node_and_edge_order_preserved() {
    let graph = GraphBody::new("g", "n")
        .with_nodes(vec![node("z"), node("a"), node("m")])
        .with_edges(vec![
            edge_doc("e9", "m", "a", None),
            edge_doc("e1", "z", "m", None),
        ])
        .build()
        .unwrap();
    let node_ids: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    let edge_ids: Vec<&str> = graph.edges().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(node_ids, ["z", "a", "m"]);
    assert_eq!(edge_ids, ["e9", "e1"]);
}
