//! Polymorphic creation of graphs, vertices, and edges.
//!
//! Builders and transformers stay agnostic to which concrete entity
//! configuration is in use by going through these traits. Factories carry
//! configuration only; the graph allocates identities and hands them to the
//! factory so created entities attach atomically.

use ng_core::{EdgeId, Metadata, VertexId};

use crate::entity::{Edge, Vertex};
use crate::graph::Graph;
use crate::restrictions::GraphRestrictions;

/// Creates new, empty graphs with a chosen set of restrictions.
pub trait GraphFactory {
    fn create_graph(&self) -> Graph;
}

/// Creates unattached vertices for a graph-allocated identity.
///
/// Implementations must return a vertex whose ID is exactly the one passed
/// in; the graph rejects anything else as a broken creation contract.
pub trait VertexFactory {
    fn create_vertex(&self, id: VertexId) -> Vertex;
}

/// Creates unattached edges for a graph-allocated identity and endpoints.
///
/// Implementations must preserve the given ID, endpoints, and directed flag.
pub trait EdgeFactory {
    fn create_edge(&self, id: EdgeId, front: VertexId, back: VertexId, directed: bool) -> Edge;
}

/// Default graph factory: produces empty graphs with fixed restrictions.
#[derive(Debug, Clone, Default)]
pub struct DefaultGraphFactory {
    restrictions: GraphRestrictions,
}

impl DefaultGraphFactory {
    pub fn new(restrictions: GraphRestrictions) -> Self {
        Self { restrictions }
    }
}

impl GraphFactory for DefaultGraphFactory {
    fn create_graph(&self) -> Graph {
        Graph::new(self.restrictions)
    }
}

/// Default vertex factory: produces plain vertices with empty metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVertexFactory;

impl VertexFactory for DefaultVertexFactory {
    fn create_vertex(&self, id: VertexId) -> Vertex {
        Vertex::new(id)
    }
}

/// Default edge factory: produces plain edges with empty metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEdgeFactory;

impl EdgeFactory for DefaultEdgeFactory {
    fn create_edge(&self, id: EdgeId, front: VertexId, back: VertexId, directed: bool) -> Edge {
        Edge::new(id, front, back, directed)
    }
}

/// Vertex factory that seeds every created vertex with a metadata template.
#[derive(Debug, Clone, Default)]
pub struct TemplateVertexFactory {
    template: Metadata,
}

impl TemplateVertexFactory {
    pub fn new(template: Metadata) -> Self {
        Self { template }
    }
}

impl VertexFactory for TemplateVertexFactory {
    fn create_vertex(&self, id: VertexId) -> Vertex {
        Vertex::with_metadata(id, self.template.clone())
    }
}
