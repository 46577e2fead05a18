//! Graph document loading, validation, and ingestion.

use std::path::Path;

use gp_graph::{Graph, GraphDocument};
use gp_store::{GraphManifest, GraphStore};

use crate::error::{AppError, AppResult};

/// Serialization format of a graph document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` / `.yml` are YAML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

/// Shape-check a document. Graph semantics are not checked here.
pub fn parse_document(content: &str, format: DocumentFormat) -> AppResult<GraphDocument> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| AppError::Document(format!("Failed to parse graph JSON: {}", e))),
        DocumentFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| AppError::Document(format!("Failed to parse graph YAML: {}", e))),
    }
}

/// Load a graph document from a file.
pub fn load_document(path: &Path) -> AppResult<GraphDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::DocumentRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_document(&content, DocumentFormat::from_path(path))
}

/// Load and fully validate a graph document without storing it.
pub fn validate_document(path: &Path) -> AppResult<Graph> {
    let document = load_document(path)?;
    Ok(document.build()?)
}

/// Validate a parsed document and insert the graph into `store`.
pub fn add_document<S>(store: &mut S, document: &GraphDocument) -> AppResult<Graph>
where
    S: GraphStore + ?Sized,
{
    let graph = document.build()?;
    store.insert_graph(&graph)?;

    tracing::info!(
        graph = %graph.id(),
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "graph added"
    );
    Ok(graph)
}

/// Load, validate, and store the graph document at `path`.
pub fn add_graph<S>(store: &mut S, path: &Path) -> AppResult<Graph>
where
    S: GraphStore + ?Sized,
{
    let document = load_document(path)?;
    add_document(store, &document)
}

/// List all stored graphs.
pub fn list_graphs<S>(store: &S) -> AppResult<Vec<GraphManifest>>
where
    S: GraphStore + ?Sized,
{
    Ok(store.list_graphs()?)
}
