//! Input document model.
//!
//! A document is shape-checked by deserialization (field presence and types).
//! Graph semantics are checked by [`GraphDocument::build`].
//!
//! serde maps are not order-sensitive, so [`GraphBody`] records the order in
//! which its `nodes` and `edges` sections appeared. `build` rejects documents
//! whose edges come before their nodes.

use std::fmt;

use gp_core::{CoreError, Real, ensure_cost, parse_cost};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Graph, Node};
use crate::validate;

/// Top-level document: `{ "graph": { ... } }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphDocument {
    pub graph: GraphBody,
}

impl GraphDocument {
    /// Validate the document and build an immutable [`Graph`].
    pub fn build(&self) -> GraphResult<Graph> {
        self.graph.build()
    }
}

/// A list section of the graph body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Nodes,
    Edges,
}

/// Edge as written in a document; `cost` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDoc {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<EdgeCost>,
}

/// A cost as written: either a number or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeCost {
    Number(Real),
    Text(String),
}

impl EdgeCost {
    pub fn resolve(&self) -> Result<Real, CoreError> {
        match self {
            EdgeCost::Number(v) => ensure_cost(*v, "edge cost"),
            EdgeCost::Text(text) => parse_cost(text, "edge cost"),
        }
    }
}

impl From<Real> for EdgeCost {
    fn from(v: Real) -> Self {
        EdgeCost::Number(v)
    }
}

/// Body of a graph document.
///
/// An absent section is `None`; a present but empty (or null) section is
/// `Some(vec![])`.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphBody {
    pub id: String,
    pub name: String,
    nodes: Option<Vec<Node>>,
    edges: Option<Vec<EdgeDoc>>,
    sections: Vec<Section>,
}

impl GraphBody {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodes: None,
            edges: None,
            sections: Vec::new(),
        }
    }

    /// Set the node section, placing it after any section already set.
    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = Some(nodes);
        self.place(Section::Nodes);
        self
    }

    /// Set the edge section, placing it after any section already set.
    pub fn with_edges(mut self, edges: Vec<EdgeDoc>) -> Self {
        self.edges = Some(edges);
        self.place(Section::Edges);
        self
    }

    fn place(&mut self, section: Section) {
        self.sections.retain(|s| *s != section);
        self.sections.push(section);
    }

    pub fn nodes(&self) -> Option<&[Node]> {
        self.nodes.as_deref()
    }

    pub fn edges(&self) -> Option<&[EdgeDoc]> {
        self.edges.as_deref()
    }

    /// Sections in the order they appeared.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Validate and build, reporting the first failing rule:
    /// nodes present and non-empty, nodes before edges, edges present,
    /// unique node ids, then per edge its endpoints and cost.
    pub fn build(&self) -> GraphResult<Graph> {
        let nodes = self.nodes().unwrap_or_default();
        validate::ensure_has_nodes(&self.id, nodes)?;

        if self.sections.first() == Some(&Section::Edges) {
            return Err(GraphError::EdgesBeforeNodes {
                graph: self.id.clone(),
            });
        }

        let edge_docs = self.edges().ok_or_else(|| GraphError::MissingEdges {
            graph: self.id.clone(),
        })?;

        let ids = validate::node_ids(nodes)?;

        let mut edges = Vec::with_capacity(edge_docs.len());
        for doc in edge_docs {
            validate::resolve_endpoints(&doc.id, &doc.from, &doc.to, &ids)?;
            let cost = match &doc.cost {
                Some(cost) => cost
                    .resolve()
                    .map_err(|e| validate::cost_error(&doc.id, e))?,
                None => 0.0,
            };
            edges.push(Edge {
                id: doc.id.clone(),
                from: doc.from.clone(),
                to: doc.to.clone(),
                cost,
            });
        }

        tracing::debug!(
            graph = %self.id,
            nodes = nodes.len(),
            edges = edges.len(),
            "graph document validated"
        );

        Ok(Graph {
            id: self.id.clone(),
            name: self.name.clone(),
            nodes: nodes.to_vec(),
            edges,
        })
    }
}

impl<'de> Deserialize<'de> for GraphBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Id,
            Name,
            Nodes,
            Edges,
            #[serde(other)]
            Other,
        }

        struct BodyVisitor;

        impl<'de> Visitor<'de> for BodyVisitor {
            type Value = GraphBody;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a graph with id, name, nodes and edges")
            }

            fn visit_map<A>(self, mut map: A) -> Result<GraphBody, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut id: Option<String> = None;
                let mut name: Option<String> = None;
                let mut nodes: Option<Vec<Node>> = None;
                let mut edges: Option<Vec<EdgeDoc>> = None;
                let mut sections = Vec::with_capacity(2);

                while let Some(key) = map.next_key::<Field>()? {
                    match key {
                        Field::Id => {
                            if id.is_some() {
                                return Err(de::Error::duplicate_field("id"));
                            }
                            id = Some(map.next_value()?);
                        }
                        Field::Name => {
                            if name.is_some() {
                                return Err(de::Error::duplicate_field("name"));
                            }
                            name = Some(map.next_value()?);
                        }
                        Field::Nodes => {
                            if nodes.is_some() {
                                return Err(de::Error::duplicate_field("nodes"));
                            }
                            let value: Option<Vec<Node>> = map.next_value()?;
                            nodes = Some(value.unwrap_or_default());
                            sections.push(Section::Nodes);
                        }
                        Field::Edges => {
                            if edges.is_some() {
                                return Err(de::Error::duplicate_field("edges"));
                            }
                            let value: Option<Vec<EdgeDoc>> = map.next_value()?;
                            edges = Some(value.unwrap_or_default());
                            sections.push(Section::Edges);
                        }
                        Field::Other => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(GraphBody {
                    id: id.ok_or_else(|| de::Error::missing_field("id"))?,
                    name: name.ok_or_else(|| de::Error::missing_field("name"))?,
                    nodes,
                    edges,
                    sections,
                })
            }
        }

        deserializer.deserialize_map(BodyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EndpointSide;

    fn parse(json: &str) -> GraphDocument {
        serde_json::from_str(json).unwrap()
    }

    const VALID: &str = r#"{
        "graph": {
            "id": "g0",
            "name": "The Graph Name",
            "nodes": [
                {"id": "a", "name": "A name"},
                {"id": "e", "name": "E name"}
            ],
            "edges": [
                {"id": "e1", "from": "a", "to": "e", "cost": 42.789},
                {"id": "e2", "from": "a", "to": "a"}
            ]
        }
    }"#;

    #[test]
    fn parse_valid_graph() {
        let g = parse(VALID).build().unwrap();

        assert_eq!(g.id(), "g0");
        assert_eq!(g.name(), "The Graph Name");
        assert_eq!(g.nodes().len(), 2);
        assert_eq!(g.nodes()[0].id, "a");
        assert_eq!(g.nodes()[0].name, "A name");
        assert_eq!(g.nodes()[1].id, "e");
        assert_eq!(g.edges().len(), 2);
        assert_eq!(g.edges()[0].id, "e1");
        assert_eq!(g.edges()[0].from, g.nodes()[0].id);
        assert_eq!(g.edges()[0].to, g.nodes()[1].id);
        assert_eq!(g.edges()[0].cost, 42.789);
        assert_eq!(g.edges()[1].id, "e2");
        assert_eq!(g.edges()[1].cost, 0.0);
    }

    #[test]
    fn sections_recorded_in_order() {
        let doc = parse(VALID);
        assert_eq!(doc.graph.sections(), &[Section::Nodes, Section::Edges]);
    }

    #[test]
    fn parse_no_edges() {
        let doc = parse(
            r#"{"graph": {"id": "g0", "name": "n",
                "nodes": [{"id": "a", "name": "A"}], "edges": []}}"#,
        );
        let g = doc.build().unwrap();
        assert_eq!(g.nodes().len(), 1);
        assert!(g.edges().is_empty());
    }

    #[test]
    fn parse_missing_nodes() {
        let doc = parse(
            r#"{"graph": {"id": "g0", "name": "n",
                "edges": [{"id": "e1", "from": "a", "to": "e", "cost": 42}]}}"#,
        );
        assert_eq!(
            doc.build(),
            Err(GraphError::NoNodes {
                graph: "g0".into()
            })
        );
    }

    #[test]
    fn parse_empty_nodes_section() {
        let doc = parse(
            r#"{"graph": {"id": "g0", "name": "n", "nodes": [],
                "edges": [{"id": "e1", "from": "a", "to": "e"}]}}"#,
        );
        assert!(matches!(doc.build(), Err(GraphError::NoNodes { .. })));
    }

    #[test]
    fn parse_missing_edges() {
        let doc = parse(
            r#"{"graph": {"id": "g0", "name": "n",
                "nodes": [{"id": "a", "name": "A"}, {"id": "e", "name": "E"}]}}"#,
        );
        assert!(matches!(doc.build(), Err(GraphError::MissingEdges { .. })));
    }

    #[test]
    fn parse_nodes_edges_out_of_order() {
        let doc = parse(
            r#"{"graph": {"id": "g0", "name": "n",
                "edges": [{"id": "e1", "from": "a", "to": "e"}],
                "nodes": [{"id": "a", "name": "A"}, {"id": "e", "name": "E"}]}}"#,
        );
        assert_eq!(doc.graph.sections(), &[Section::Edges, Section::Nodes]);
        assert!(matches!(
            doc.build(),
            Err(GraphError::EdgesBeforeNodes { .. })
        ));
    }

    #[test]
    fn parse_duplicate_node_id() {
        let doc = parse(
            r#"{"graph": {"id": "g0", "name": "n",
                "nodes": [{"id": "duplicate id", "name": "A"},
                          {"id": "duplicate id", "name": "E"}],
                "edges": []}}"#,
        );
        assert_eq!(
            doc.build(),
            Err(GraphError::DuplicateNode {
                id: "duplicate id".into()
            })
        );
    }

    #[test]
    fn parse_unresolved_from() {
        let doc = parse(
            r#"{"graph": {"id": "g0", "name": "n",
                "nodes": [{"id": "a", "name": "A"}],
                "edges": [{"id": "e9", "from": "q", "to": "a"}]}}"#,
        );
        assert_eq!(
            doc.build(),
            Err(GraphError::UnresolvedEndpoint {
                edge: "e9".into(),
                side: EndpointSide::From,
                node: "q".into(),
            })
        );
    }

    #[test]
    fn text_cost_is_parsed() {
        let doc = parse(
            r#"{"graph": {"id": "g0", "name": "n",
                "nodes": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
                "edges": [{"id": "e1", "from": "a", "to": "b", "cost": "3.25"}]}}"#,
        );
        assert_eq!(doc.build().unwrap().edges()[0].cost, 3.25);
    }

    #[test]
    fn bad_text_cost_names_edge() {
        let doc = parse(
            r#"{"graph": {"id": "g0", "name": "n",
                "nodes": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
                "edges": [{"id": "e1", "from": "a", "to": "b", "cost": "lots"}]}}"#,
        );
        let err = doc.build().unwrap_err();
        assert!(matches!(err, GraphError::InvalidCost { ref edge, .. } if edge == "e1"));
    }

    #[test]
    fn missing_id_is_shape_error() {
        let result: Result<GraphDocument, _> =
            serde_json::from_str(r#"{"graph": {"name": "n", "nodes": [], "edges": []}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn yaml_document_keeps_section_order() {
        let yaml = "
graph:
  id: g1
  name: Yaml graph
  edges: []
  nodes:
    - id: a
      name: A
";
        let doc: GraphDocument = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            doc.build(),
            Err(GraphError::EdgesBeforeNodes { .. })
        ));
    }

    #[test]
    fn body_builders_track_order() {
        let body = GraphBody::new("g", "n")
            .with_nodes(vec![Node {
                id: "a".into(),
                name: "A".into(),
            }])
            .with_edges(vec![]);
        assert_eq!(body.sections(), &[Section::Nodes, Section::Edges]);
        assert!(body.build().is_ok());
    }
}
