//! JSON graph description accepted by the CLI.
//!
//! Labels exist only in this file format; the core graph model stays
//! label-free. Building resolves labels to vertex IDs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ng_core::{Metadata, VertexId};
use ng_graph::{Directedness, Graph, GraphError, GraphRestrictions};

pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("duplicate vertex label '{label}'")]
    DuplicateLabel { label: String },

    #[error("edge references unknown vertex label '{label}'")]
    UnknownLabel { label: String },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectednessDoc {
    Directed,
    Undirected,
    #[default]
    Mixed,
}

impl From<DirectednessDoc> for Directedness {
    fn from(doc: DirectednessDoc) -> Self {
        match doc {
            DirectednessDoc::Directed => Directedness::Directed,
            DirectednessDoc::Undirected => Directedness::Undirected,
            DirectednessDoc::Mixed => Directedness::Mixed,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDoc {
    #[serde(default)]
    pub directedness: DirectednessDoc,
    #[serde(default = "default_true")]
    pub allow_duplicate_edges: bool,
    #[serde(default = "default_true")]
    pub allow_self_loops: bool,
    pub vertices: Vec<VertexDoc>,
    #[serde(default)]
    pub edges: Vec<EdgeDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexDoc {
    pub label: String,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDoc {
    pub from: String,
    pub to: String,
    /// Defaults to the graph's directedness mode: directed graphs get
    /// directed edges, everything else undirected.
    #[serde(default)]
    pub directed: Option<bool>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl GraphDoc {
    pub fn restrictions(&self) -> GraphRestrictions {
        GraphRestrictions {
            directedness: self.directedness.into(),
            allow_duplicate_edges: self.allow_duplicate_edges,
            allow_self_loops: self.allow_self_loops,
        }
    }

    /// Build the graph, resolving edge labels to vertex IDs.
    pub fn build(&self) -> SchemaResult<Graph> {
        let mut graph = Graph::new(self.restrictions());
        let mut by_label: HashMap<&str, VertexId> = HashMap::new();

        for vertex_doc in &self.vertices {
            if by_label.contains_key(vertex_doc.label.as_str()) {
                return Err(SchemaError::DuplicateLabel {
                    label: vertex_doc.label.clone(),
                });
            }
            let id = graph.add_vertex();
            if let Some(vertex) = graph.vertex_mut(id) {
                vertex.metadata = vertex_doc.metadata.clone();
                vertex.metadata.set("label", vertex_doc.label.clone());
            }
            by_label.insert(&vertex_doc.label, id);
        }

        let default_directed = self.directedness == DirectednessDoc::Directed;
        for edge_doc in &self.edges {
            let front = *by_label
                .get(edge_doc.from.as_str())
                .ok_or_else(|| SchemaError::UnknownLabel {
                    label: edge_doc.from.clone(),
                })?;
            let back = *by_label
                .get(edge_doc.to.as_str())
                .ok_or_else(|| SchemaError::UnknownLabel {
                    label: edge_doc.to.clone(),
                })?;
            let directed = edge_doc.directed.unwrap_or(default_directed);
            let id = graph.add_edge(front, back, directed)?;
            if let Some(edge) = graph.edge_mut(id) {
                edge.metadata = edge_doc.metadata.clone();
            }
        }

        Ok(graph)
    }
}

/// Load and build a graph description from a JSON file.
pub fn load_graph(path: &std::path::Path) -> SchemaResult<Graph> {
    let content = std::fs::read_to_string(path)?;
    let doc: GraphDoc = serde_json::from_str(&content)?;
    doc.build()
}
