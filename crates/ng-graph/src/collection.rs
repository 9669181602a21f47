//! Insertion-ordered, uniquely-keyed entity collections.
//!
//! A collection maps entity IDs to entities, preserving insertion order for
//! enumeration. Membership changes go through the owning graph; the borrow
//! checker makes structural mutation during an in-progress enumeration
//! impossible.

use std::collections::HashMap;

use ng_core::Id;

use crate::entity::{Edge, Vertex};

/// Ordered, uniquely-keyed container for graph entities.
///
/// Enumeration via [`iter`](Self::iter) is lazy, restartable, and yields
/// entities in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EntityCollection<T> {
    order: Vec<Id>,
    entries: HashMap<Id, T>,
}

/// Collection of vertices owned by a graph.
pub type VertexCollection = EntityCollection<Vertex>;

/// Collection of edges owned by a graph.
pub type EdgeCollection = EntityCollection<Edge>;

impl<T> EntityCollection<T> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert an entity under its ID. Returns false (and leaves the
    /// collection unchanged) if the ID is already present.
    pub fn insert(&mut self, id: Id, entity: T) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.order.push(id);
        self.entries.insert(id, entity);
        true
    }

    /// Remove an entity by ID, returning it if it was present.
    pub fn remove(&mut self, id: Id) -> Option<T> {
        let removed = self.entries.remove(&id)?;
        self.order.retain(|&other| other != id);
        Some(removed)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.entries.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Enumerate entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Enumerate entity IDs in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.order.iter().copied()
    }
}
