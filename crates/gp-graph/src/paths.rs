//! Simple-path enumeration.
//!
//! [`PathEnumerator`] indexes the edges of one graph by source node and
//! lazily yields every simple path between two nodes through [`Paths`].
//!
//! # Rules
//!
//! - A path is extended one edge at a time from its last node.
//! - An extension whose target already appears in the path is dropped. This
//!   is the only cycle rule, and it also drops every self-loop.
//! - A path is accepted when its last node is the end node after at least
//!   one edge. Accepted paths are not extended further.
//! - Only edges whose `graph_id` matches the enumerator's graph are visible.
//!
//! # Order
//!
//! Depth-first. A node's outgoing edges are tried in the order they appear in
//! the edge list, so the sequence is a pure function of the inputs.
//!
//! Every worklist entry owns its node sequence and visited set, so branches
//! never share mutable state.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use gp_core::Real;

use crate::graph::EdgeRecord;

/// An accepted path: node ids from start to end, the edges taken, and the
/// summed cost.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
    pub cost: Real,
}

impl GraphPath {
    /// Number of edges in the path.
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    /// Ordering used to pick the cheapest path: lower cost first, then the
    /// lexicographically smaller node-id sequence.
    pub fn cheaper_cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.nodes.cmp(&other.nodes))
    }
}

/// Enumerates simple paths over the edges of a single graph.
#[derive(Debug, Clone)]
pub struct PathEnumerator<'a> {
    graph_id: &'a str,
    /// Outgoing edges per source node, in edge-list order.
    outgoing: HashMap<&'a str, Vec<&'a EdgeRecord>>,
}

impl<'a> PathEnumerator<'a> {
    /// Index `edges` for `graph_id`. Records of other graphs are skipped.
    pub fn new(graph_id: &'a str, edges: &'a [EdgeRecord]) -> Self {
        let mut outgoing: HashMap<&'a str, Vec<&'a EdgeRecord>> = HashMap::new();
        let mut skipped = 0usize;
        for edge in edges {
            if edge.graph_id != graph_id {
                skipped += 1;
                continue;
            }
            outgoing.entry(edge.from.as_str()).or_default().push(edge);
        }
        if skipped > 0 {
            tracing::debug!(graph = graph_id, skipped, "ignored edges of other graphs");
        }
        Self { graph_id, outgoing }
    }

    pub fn graph_id(&self) -> &str {
        self.graph_id
    }

    /// Lazily enumerate the accepted paths from `start` to `end`.
    ///
    /// Each call starts a fresh enumeration.
    pub fn paths<'s>(&'s self, start: &'s str, end: &'s str) -> Paths<'s> {
        tracing::trace!(graph = self.graph_id, start, end, "enumerating paths");
        Paths {
            outgoing: &self.outgoing,
            end,
            stack: vec![PartialPath::start(start)],
        }
    }

    /// Every accepted path's node sequence, in enumeration order.
    pub fn find_all(&self, start: &str, end: &str) -> Vec<Vec<String>> {
        self.paths(start, end).map(|p| p.nodes).collect()
    }

    /// The accepted path with the lowest total cost, if any.
    ///
    /// Ties go to the lexicographically smallest node-id sequence.
    pub fn find_cheapest(&self, start: &str, end: &str) -> Option<GraphPath> {
        self.paths(start, end).min_by(|a, b| a.cheaper_cmp(b))
    }
}

/// Lazy iterator over accepted paths. See the module docs for the rules.
#[derive(Debug)]
pub struct Paths<'s> {
    outgoing: &'s HashMap<&'s str, Vec<&'s EdgeRecord>>,
    end: &'s str,
    stack: Vec<PartialPath<'s>>,
}

impl Iterator for Paths<'_> {
    type Item = GraphPath;

    fn next(&mut self) -> Option<GraphPath> {
        while let Some(state) = self.stack.pop() {
            let last = state.last();

            if !state.edges.is_empty() && last == self.end {
                return Some(state.finish());
            }

            let Some(out) = self.outgoing.get(last) else {
                continue;
            };

            // Pushed in reverse so edges are popped in edge-list order.
            for edge in out.iter().rev() {
                if state.visited.contains(edge.to.as_str()) {
                    tracing::trace!(edge = %edge.id, to = %edge.to, "dropped cyclic extension");
                    continue;
                }
                self.stack.push(state.extend(edge));
            }
        }
        None
    }
}

/// A worklist entry: a path under construction.
#[derive(Debug, Clone)]
struct PartialPath<'s> {
    last: &'s str,
    nodes: Vec<&'s str>,
    edges: Vec<&'s str>,
    visited: HashSet<&'s str>,
    cost: Real,
}

impl<'s> PartialPath<'s> {
    fn start(node: &'s str) -> Self {
        Self {
            last: node,
            nodes: vec![node],
            edges: Vec::new(),
            visited: HashSet::from([node]),
            cost: 0.0,
        }
    }

    fn last(&self) -> &'s str {
        self.last
    }

    /// Copy this path and append `edge`.
    fn extend(&self, edge: &'s EdgeRecord) -> Self {
        let mut next = self.clone();
        next.last = edge.to.as_str();
        next.nodes.push(edge.to.as_str());
        next.edges.push(edge.id.as_str());
        next.visited.insert(edge.to.as_str());
        next.cost += edge.cost;
        next
    }

    fn finish(self) -> GraphPath {
        GraphPath {
            nodes: self.nodes.into_iter().map(str::to_string).collect(),
            edges: self.edges.into_iter().map(str::to_string).collect(),
            cost: self.cost,
        }
    }
}
