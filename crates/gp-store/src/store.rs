//! Directory-backed graph store.
//!
//! Layout under the root directory, one directory per graph:
//!
//! ```text
//! <root>/<graph_key>/manifest.json
//! <root>/<graph_key>/nodes.jsonl
//! <root>/<graph_key>/edges.jsonl
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use gp_graph::{EdgeRecord, Graph, Node};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::key::graph_key;
use crate::types::GraphManifest;
use crate::{GraphStore, StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct JsonStore {
    root_dir: PathBuf,
}

impl JsonStore {
    /// Open a store for writing, creating `root_dir` if needed.
    pub fn new(root_dir: PathBuf) -> StoreResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Open a store without touching the filesystem.
    ///
    /// A missing `root_dir` reads as an empty store; the first insert creates it.
    pub fn open(root_dir: PathBuf) -> Self {
        Self { root_dir }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn graph_dir(&self, graph_id: &str) -> PathBuf {
        self.root_dir.join(graph_key(graph_id))
    }

    pub fn load_manifest(&self, graph_id: &str) -> StoreResult<GraphManifest> {
        let manifest_path = self.graph_dir(graph_id).join("manifest.json");

        if !manifest_path.exists() {
            return Err(StoreError::GraphNotFound {
                graph_id: graph_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Remove a stored graph. Missing graphs are ignored.
    pub fn delete_graph(&self, graph_id: &str) -> StoreResult<()> {
        let graph_dir = self.graph_dir(graph_id);
        if graph_dir.exists() {
            fs::remove_dir_all(graph_dir)?;
        }
        Ok(())
    }

    fn load_records<T: DeserializeOwned>(&self, graph_id: &str, file: &str) -> StoreResult<Vec<T>> {
        let path = self.graph_dir(graph_id).join(file);

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let mut records = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                records.push(serde_json::from_str(line)?);
            }
        }
        Ok(records)
    }
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> StoreResult<()> {
    let mut content = String::new();
    for record in records {
        content.push_str(&serde_json::to_string(record)?);
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}

impl GraphStore for JsonStore {
    fn insert_graph(&mut self, graph: &Graph) -> StoreResult<()> {
        if self.contains_graph(graph.id())? {
            return Err(StoreError::DuplicateGraph {
                graph_id: graph.id().to_string(),
            });
        }

        let graph_dir = self.graph_dir(graph.id());
        fs::create_dir_all(&graph_dir)?;

        write_records(&graph_dir.join("nodes.jsonl"), graph.nodes())?;
        write_records(&graph_dir.join("edges.jsonl"), &graph.edge_records())?;

        // Manifest last: a graph without one is not considered stored.
        let manifest = GraphManifest::for_graph(graph);
        let manifest_json = serde_json::to_string_pretty(&manifest)?;
        fs::write(graph_dir.join("manifest.json"), manifest_json)?;

        tracing::debug!(graph = %graph.id(), dir = %graph_dir.display(), "graph stored");
        Ok(())
    }

    fn contains_graph(&self, graph_id: &str) -> StoreResult<bool> {
        Ok(self.graph_dir(graph_id).join("manifest.json").exists())
    }

    fn edges_for(&self, graph_id: &str) -> StoreResult<Vec<EdgeRecord>> {
        if !self.contains_graph(graph_id)? {
            return Ok(Vec::new());
        }
        self.load_records(graph_id, "edges.jsonl")
    }

    fn nodes_for(&self, graph_id: &str) -> StoreResult<Vec<Node>> {
        if !self.contains_graph(graph_id)? {
            return Ok(Vec::new());
        }
        self.load_records(graph_id, "nodes.jsonl")
    }

    fn list_graphs(&self) -> StoreResult<Vec<GraphManifest>> {
        let mut graphs = Vec::new();

        if !self.root_dir.exists() {
            return Ok(graphs);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            let manifest_path = entry.path().join("manifest.json");
            if manifest_path.exists() {
                let content = fs::read_to_string(manifest_path)?;
                let manifest: GraphManifest = serde_json::from_str(&content)?;
                graphs.push(manifest);
            }
        }

        graphs.sort_by(|a, b| a.graph_id.cmp(&b.graph_id));
        Ok(graphs)
    }
}
