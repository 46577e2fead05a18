//! Query and answer records.
//!
//! Wire format of a batch:
//!
//! ```json
//! {"queries": [{"cheapest": {"graph": "g0", "start": "a", "end": "e"}},
//!              {"paths": {"graph": "g0", "start": "a", "end": "e"}}]}
//! ```
//!
//! and of the answers:
//!
//! ```json
//! {"answers": [{"cheapest": {"from": "a", "to": "e", "path": ["a", "e"]}},
//!              {"paths": {"from": "a", "to": "e", "paths": [["a", "e"]]}}]}
//! ```
//!
//! A cheapest answer with no path serializes `"path": false`.

use std::collections::BTreeMap;
use std::fmt;

use gp_core::Real;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{QueryError, QueryResult};

/// The two supported query kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Cheapest,
    Paths,
}

impl QueryKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cheapest" => Some(QueryKind::Cheapest),
            "paths" => Some(QueryKind::Paths),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::Cheapest => "cheapest",
            QueryKind::Paths => "paths",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of one request: which graph, and the two endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTarget {
    pub graph: String,
    pub start: String,
    pub end: String,
}

/// A batch as deserialized, before kind validation.
///
/// Each entry maps kind names to still-undecoded bodies; a valid entry has
/// exactly one key. The kind is checked before its body is decoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQueryBatch {
    #[serde(default)]
    pub queries: Option<Vec<BTreeMap<String, Value>>>,
}

/// One validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub kind: QueryKind,
    pub graph: String,
    pub start: String,
    pub end: String,
}

impl QueryRequest {
    pub fn new(
        kind: QueryKind,
        graph: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            graph: graph.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A validated, non-empty batch of requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBatch {
    requests: Vec<QueryRequest>,
}

impl QueryBatch {
    pub fn new(requests: Vec<QueryRequest>) -> QueryResult<Self> {
        if requests.is_empty() {
            return Err(QueryError::EmptyBatch);
        }
        Ok(Self { requests })
    }

    pub fn requests(&self) -> &[QueryRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl TryFrom<RawQueryBatch> for QueryBatch {
    type Error = QueryError;

    fn try_from(raw: RawQueryBatch) -> QueryResult<Self> {
        let entries = raw.queries.unwrap_or_default();
        if entries.is_empty() {
            return Err(QueryError::EmptyBatch);
        }

        let mut requests = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            if entry.len() > 1 {
                return Err(QueryError::MultipleKinds {
                    index,
                    kinds: entry.into_keys().collect(),
                });
            }
            let Some((name, body)) = entry.into_iter().next() else {
                return Err(QueryError::MissingKind { index });
            };
            let kind = QueryKind::parse(&name)
                .ok_or(QueryError::UnknownKind { index, kind: name })?;
            let target: QueryTarget =
                serde_json::from_value(body).map_err(|e| QueryError::InvalidTarget {
                    index,
                    kind,
                    reason: e.to_string(),
                })?;
            requests.push(QueryRequest {
                kind,
                graph: target.graph,
                start: target.start,
                end: target.end,
            });
        }

        QueryBatch::new(requests)
    }
}

/// Answer to a `cheapest` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheapestAnswer {
    pub from: String,
    pub to: String,
    #[serde(serialize_with = "path_or_false")]
    pub path: Option<Vec<String>>,
    /// Total cost of `path`; not part of the wire format.
    #[serde(skip)]
    pub cost: Option<Real>,
}

/// Answer to a `paths` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathsAnswer {
    pub from: String,
    pub to: String,
    pub paths: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Cheapest(CheapestAnswer),
    Paths(PathsAnswer),
}

impl Answer {
    pub fn kind(&self) -> QueryKind {
        match self {
            Answer::Cheapest(_) => QueryKind::Cheapest,
            Answer::Paths(_) => QueryKind::Paths,
        }
    }
}

/// Response envelope: answers in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerBatch {
    pub answers: Vec<Answer>,
}

fn path_or_false<S>(path: &Option<Vec<String>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match path {
        Some(nodes) => nodes.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}
