//! The graph: owned vertex/edge collections plus fixed restrictions.

use std::collections::HashMap;

use ng_core::{EdgeId, VertexId};

use crate::collection::{EdgeCollection, VertexCollection};
use crate::entity::{Edge, Vertex};
use crate::error::{GraphError, GraphResult};
use crate::factory::{DefaultEdgeFactory, EdgeFactory, VertexFactory};
use crate::restrictions::GraphRestrictions;

/// A mutable graph owning one vertex collection and one edge collection.
///
/// Restrictions are fixed at construction; every edge in the collection
/// satisfies them at all times. A violating add request fails without
/// mutating the graph.
///
/// Incident edges are tracked per vertex in an ID-indexed adjacency map, so
/// vertices and edges reference each other by identity only.
#[derive(Debug, Clone)]
pub struct Graph {
    restrictions: GraphRestrictions,
    vertices: VertexCollection,
    edges: EdgeCollection,

    /// For each member vertex, the IDs of its incident edges in insertion
    /// order. Self-loops appear once.
    incidence: HashMap<VertexId, Vec<EdgeId>>,

    // Monotone ID allocators; IDs are never reused after removal.
    next_vertex: u32,
    next_edge: u32,
}

impl Default for Graph {
    /// A graph with no restrictions: mixed directedness, duplicates and
    /// self-loops allowed.
    fn default() -> Self {
        Self::new(GraphRestrictions::default())
    }
}

impl Graph {
    /// Create an empty graph with the given restrictions.
    pub fn new(restrictions: GraphRestrictions) -> Self {
        Self {
            restrictions,
            vertices: VertexCollection::new(),
            edges: EdgeCollection::new(),
            incidence: HashMap::new(),
            next_vertex: 0,
            next_edge: 0,
        }
    }

    pub fn restrictions(&self) -> &GraphRestrictions {
        &self.restrictions
    }

    pub fn vertices(&self) -> &VertexCollection {
        &self.vertices
    }

    pub fn edges(&self) -> &EdgeCollection {
        &self.edges
    }

    /// Get a vertex by ID.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Get a vertex by ID for metadata mutation.
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id)
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Get an edge by ID for metadata mutation.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    /// IDs of all edges incident to a vertex, in insertion order.
    /// Empty for a vertex that is not a member.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence.get(&vertex).map_or(&[], Vec::as_slice)
    }

    /// Number of edges incident to a vertex; self-loops count once.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.incident_edges(vertex).len()
    }

    /// Add a new vertex with a fresh identity. Always succeeds.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = self.alloc_vertex_id();
        self.attach_vertex(Vertex::new(id));
        id
    }

    /// Add a new vertex created by the given factory.
    ///
    /// Fails only if the factory breaks its creation contract by returning a
    /// vertex with a different identity.
    pub fn add_vertex_with(&mut self, factory: &dyn VertexFactory) -> GraphResult<VertexId> {
        let id = self.alloc_vertex_id();
        let vertex = factory.create_vertex(id);
        if vertex.id() != id {
            return Err(GraphError::FactoryContract {
                what: "vertex factory changed the allocated ID",
            });
        }
        self.attach_vertex(vertex);
        Ok(id)
    }

    /// Add an edge between two member vertices.
    ///
    /// Fails without mutating the graph if either endpoint is not a member,
    /// or if the edge would violate this graph's directedness, self-loop, or
    /// duplicate restrictions.
    pub fn add_edge(&mut self, front: VertexId, back: VertexId, directed: bool) -> GraphResult<EdgeId> {
        self.add_edge_with(front, back, directed, &DefaultEdgeFactory)
    }

    /// Add an edge created by the given factory.
    pub fn add_edge_with(
        &mut self,
        front: VertexId,
        back: VertexId,
        directed: bool,
        factory: &dyn EdgeFactory,
    ) -> GraphResult<EdgeId> {
        self.check_edge_admissible(front, back, directed)?;

        let id = self.alloc_edge_id();
        let edge = factory.create_edge(id, front, back, directed);
        if edge.id() != id
            || edge.front() != front
            || edge.back() != back
            || edge.is_directed() != directed
        {
            return Err(GraphError::FactoryContract {
                what: "edge factory changed the allocated ID, endpoints, or directed flag",
            });
        }
        self.attach_edge(edge);
        Ok(id)
    }

    /// Remove a vertex and, first, every edge incident to it.
    ///
    /// Returns the removed vertex. Fails if the vertex is not a member,
    /// leaving the graph untouched.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> GraphResult<Vertex> {
        if !self.vertices.contains(vertex) {
            return Err(GraphError::VertexNotFound { vertex });
        }

        // Cascade: no dangling edge may reference a removed vertex.
        let incident: Vec<EdgeId> = self.incident_edges(vertex).to_vec();
        for edge_id in incident {
            self.remove_edge(edge_id)?;
        }

        self.incidence.remove(&vertex);
        self.vertices
            .remove(vertex)
            .ok_or(GraphError::VertexNotFound { vertex })
    }

    /// Remove a single edge, returning it. Fails if not a member.
    pub fn remove_edge(&mut self, edge: EdgeId) -> GraphResult<Edge> {
        let removed = self
            .edges
            .remove(edge)
            .ok_or(GraphError::EdgeNotFound { edge })?;

        self.detach_incidence(removed.front(), edge);
        if !removed.is_self_loop() {
            self.detach_incidence(removed.back(), edge);
        }
        Ok(removed)
    }

    fn alloc_vertex_id(&mut self) -> VertexId {
        let id = VertexId::from_index(self.next_vertex);
        self.next_vertex += 1;
        id
    }

    fn alloc_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::from_index(self.next_edge);
        self.next_edge += 1;
        id
    }

    fn attach_vertex(&mut self, vertex: Vertex) {
        let id = vertex.id();
        self.vertices.insert(id, vertex);
        self.incidence.insert(id, Vec::new());
    }

    fn attach_edge(&mut self, edge: Edge) {
        let id = edge.id();
        let front = edge.front();
        let back = edge.back();
        let self_loop = edge.is_self_loop();

        self.edges.insert(id, edge);
        self.incidence.entry(front).or_default().push(id);
        if !self_loop {
            self.incidence.entry(back).or_default().push(id);
        }
    }

    fn detach_incidence(&mut self, vertex: VertexId, edge: EdgeId) {
        if let Some(edges) = self.incidence.get_mut(&vertex) {
            edges.retain(|&other| other != edge);
        }
    }

    /// Validate an edge-add request against membership and restrictions.
    fn check_edge_admissible(
        &self,
        front: VertexId,
        back: VertexId,
        directed: bool,
    ) -> GraphResult<()> {
        if !self.vertices.contains(front) {
            return Err(GraphError::EndpointNotFound { vertex: front });
        }
        if !self.vertices.contains(back) {
            return Err(GraphError::EndpointNotFound { vertex: back });
        }
        if !self.restrictions.directedness.admits(directed) {
            return Err(GraphError::DirectednessViolation {
                mode: self.restrictions.directedness,
                directed,
            });
        }
        if !self.restrictions.allow_self_loops && front == back {
            return Err(GraphError::SelfLoopDisallowed { vertex: front });
        }
        if !self.restrictions.allow_duplicate_edges
            && self.has_equivalent_edge(front, back, directed)
        {
            return Err(GraphError::DuplicateEdgeDisallowed { front, back });
        }
        Ok(())
    }

    /// Whether an edge equivalent to (front, back, directed) already exists.
    /// Only edges incident to `front` can be equivalent, so the scan is
    /// O(degree), not O(edges).
    fn has_equivalent_edge(&self, front: VertexId, back: VertexId, directed: bool) -> bool {
        // Probe ID is irrelevant to endpoint equivalence.
        let probe = Edge::new(EdgeId::from_index(0), front, back, directed);
        self.incident_edges(front)
            .iter()
            .filter_map(|&id| self.edges.get(id))
            .any(|edge| edge.connects_same(&probe))
    }
}
