//! Batch execution against a graph store.

use gp_graph::PathEnumerator;
use gp_store::GraphStore;
use rayon::prelude::*;

use crate::error::QueryResult;
use crate::model::{Answer, CheapestAnswer, PathsAnswer, QueryBatch, QueryKind, QueryRequest};

/// Execution settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutorOptions {
    /// Answer requests on the rayon pool. Answers keep request order either way.
    pub parallel: bool,
}

/// Runs query batches. The store is only read.
#[derive(Debug)]
pub struct QueryExecutor<'s, S: ?Sized> {
    store: &'s S,
    options: ExecutorOptions,
}

impl<'s, S> QueryExecutor<'s, S>
where
    S: GraphStore + Sync + ?Sized,
{
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            options: ExecutorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExecutorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ExecutorOptions {
        self.options
    }

    /// Answer every request, in request order.
    ///
    /// The first store failure aborts the batch; a request with no path is
    /// answered, not failed.
    pub fn execute(&self, batch: &QueryBatch) -> QueryResult<Vec<Answer>> {
        tracing::info!(
            requests = batch.len(),
            parallel = self.options.parallel,
            "executing query batch"
        );

        if self.options.parallel {
            batch
                .requests()
                .par_iter()
                .map(|request| self.answer(request))
                .collect()
        } else {
            batch
                .requests()
                .iter()
                .map(|request| self.answer(request))
                .collect()
        }
    }

    /// Answer a single request.
    pub fn answer(&self, request: &QueryRequest) -> QueryResult<Answer> {
        let edges = self.store.edges_for(&request.graph)?;
        if edges.is_empty() && !self.store.contains_graph(&request.graph)? {
            tracing::warn!(graph = %request.graph, "query against unknown graph");
        }

        let enumerator = PathEnumerator::new(&request.graph, &edges);
        let answer = match request.kind {
            QueryKind::Cheapest => {
                let best = enumerator.find_cheapest(&request.start, &request.end);
                Answer::Cheapest(CheapestAnswer {
                    from: request.start.clone(),
                    to: request.end.clone(),
                    cost: best.as_ref().map(|p| p.cost),
                    path: best.map(|p| p.nodes),
                })
            }
            QueryKind::Paths => Answer::Paths(PathsAnswer {
                from: request.start.clone(),
                to: request.end.clone(),
                paths: enumerator.find_all(&request.start, &request.end),
            }),
        };

        tracing::debug!(
            kind = %request.kind,
            graph = %request.graph,
            start = %request.start,
            end = %request.end,
            edges = edges.len(),
            "answered query"
        );
        Ok(answer)
    }
}
