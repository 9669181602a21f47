//! Graph entities: vertices and edges.
//!
//! Entities reference each other by ID only. Incident-edge back-references
//! live in the owning [`Graph`](crate::Graph)'s adjacency map, so there are
//! no reference cycles and the graph exclusively owns membership.

use ng_core::{EdgeId, Metadata, VertexId};

/// A graph vertex: stable identity plus arbitrary metadata.
///
/// A vertex belongs to at most one graph at a time; its ID is unique within
/// that graph and never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: VertexId,
    pub metadata: Metadata,
}

impl Vertex {
    /// Create an unattached vertex with the given identity.
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            metadata: Metadata::new(),
        }
    }

    /// Create an unattached vertex carrying the given metadata.
    pub fn with_metadata(id: VertexId, metadata: Metadata) -> Self {
        Self { id, metadata }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }
}

/// A connection between two vertices.
///
/// Endpoints are stored as IDs into the owning graph's vertex collection.
/// `front == back` denotes a self-loop where the graph permits them.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    front: VertexId,
    back: VertexId,
    directed: bool,
    pub metadata: Metadata,
}

impl Edge {
    /// Create an unattached edge with the given identity and endpoints.
    pub fn new(id: EdgeId, front: VertexId, back: VertexId, directed: bool) -> Self {
        Self {
            id,
            front,
            back,
            directed,
            metadata: Metadata::new(),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// First endpoint (the source, for directed edges).
    pub fn front(&self) -> VertexId {
        self.front
    }

    /// Second endpoint (the target, for directed edges).
    pub fn back(&self) -> VertexId {
        self.back
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.front == self.back
    }

    /// Whether this edge touches the given vertex.
    pub fn is_incident_to(&self, vertex: VertexId) -> bool {
        self.front == vertex || self.back == vertex
    }

    /// The endpoint opposite to `vertex`, or `None` if `vertex` is not an
    /// endpoint. For a self-loop the opposite endpoint is the vertex itself.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.front {
            Some(self.back)
        } else if vertex == self.back {
            Some(self.front)
        } else {
            None
        }
    }

    /// Whether another edge connects the same endpoints equivalently:
    /// same ordered pair for two directed edges, same unordered pair for two
    /// undirected ones. A directed edge is never equivalent to an undirected
    /// one.
    pub fn connects_same(&self, other: &Edge) -> bool {
        if self.directed != other.directed {
            return false;
        }
        if self.directed {
            self.front == other.front && self.back == other.back
        } else {
            (self.front == other.front && self.back == other.back)
                || (self.front == other.back && self.back == other.front)
        }
    }
}
