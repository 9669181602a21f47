//! Pluggable-order traversal and search over vertex collections.
//!
//! The iteration order (strategy) is separated from what is done per vertex
//! (caller-supplied closure), so the same visit/search logic runs over any
//! ordering without duplicating traversal code.

use std::cmp::Ordering;

use crate::collection::VertexCollection;
use crate::entity::Vertex;

/// A traversal strategy over a vertex collection.
///
/// `iterate` and `find_vertex` are provided in terms of
/// [`ordered`](Self::ordered); strategies only define the order. `find_vertex` is a
/// short-circuiting linear search: the predicate stops being called at the
/// first match.
pub trait VertexIterator {
    /// The collection's vertices in this strategy's order.
    fn ordered<'a>(&self, vertices: &'a VertexCollection) -> Vec<&'a Vertex>;

    /// Visit every vertex in strategy order. The collection is not mutated;
    /// the callback's side effects are its own business.
    fn iterate(&self, vertices: &VertexCollection, visit: &mut dyn FnMut(&Vertex)) {
        for vertex in self.ordered(vertices) {
            visit(vertex);
        }
    }

    /// Return the first vertex (in strategy order) satisfying the predicate,
    /// or `None` if the collection is empty or no vertex satisfies it.
    fn find_vertex<'a>(
        &self,
        vertices: &'a VertexCollection,
        predicate: &mut dyn FnMut(&Vertex) -> bool,
    ) -> Option<&'a Vertex> {
        self.ordered(vertices)
            .into_iter()
            .find(|vertex| predicate(vertex))
    }
}

/// Insertion order: the collection's own enumeration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionOrder;

impl VertexIterator for InsertionOrder {
    fn ordered<'a>(&self, vertices: &'a VertexCollection) -> Vec<&'a Vertex> {
        vertices.iter().collect()
    }
}

/// Reverse insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseInsertionOrder;

impl VertexIterator for ReverseInsertionOrder {
    fn ordered<'a>(&self, vertices: &'a VertexCollection) -> Vec<&'a Vertex> {
        let mut order: Vec<&Vertex> = vertices.iter().collect();
        order.reverse();
        order
    }
}

/// Ascending order of a numeric metadata key.
///
/// Vertices whose key is missing or non-numeric sort after all numeric ones.
/// The sort is stable, so ties keep insertion order.
#[derive(Debug, Clone)]
pub struct MetadataOrder {
    key: String,
}

impl MetadataOrder {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn sort_key(&self, vertex: &Vertex) -> Option<f64> {
        vertex.metadata.get(&self.key).and_then(|v| v.as_f64())
    }
}

impl VertexIterator for MetadataOrder {
    fn ordered<'a>(&self, vertices: &'a VertexCollection) -> Vec<&'a Vertex> {
        let mut order: Vec<&Vertex> = vertices.iter().collect();
        order.sort_by(|a, b| match (self.sort_key(a), self.sort_key(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        order
    }
}
