//! Graph-level structural restrictions, fixed at construction.

/// Which edge directedness a graph accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Directedness {
    /// Only directed edges.
    Directed,
    /// Only undirected edges.
    Undirected,
    /// Both directed and undirected edges.
    #[default]
    Mixed,
}

impl Directedness {
    /// Whether an edge with the given directed flag is admissible.
    pub fn admits(self, directed: bool) -> bool {
        match self {
            Directedness::Directed => directed,
            Directedness::Undirected => !directed,
            Directedness::Mixed => true,
        }
    }
}

/// Structural restrictions a graph enforces on every edge add.
///
/// Immutable after graph construction. A violating add request fails the
/// operation rather than silently normalizing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphRestrictions {
    pub directedness: Directedness,
    /// When false, no two edges may share the same endpoint pair
    /// (ordered for directed edges, unordered for undirected ones).
    pub allow_duplicate_edges: bool,
    /// When false, both endpoints of an edge must be distinct vertices.
    pub allow_self_loops: bool,
}

impl Default for GraphRestrictions {
    fn default() -> Self {
        Self {
            directedness: Directedness::Mixed,
            allow_duplicate_edges: true,
            allow_self_loops: true,
        }
    }
}

impl GraphRestrictions {
    /// Restrictions for a simple graph: undirected, no duplicates, no self-loops.
    pub fn simple() -> Self {
        Self {
            directedness: Directedness::Undirected,
            allow_duplicate_edges: false,
            allow_self_loops: false,
        }
    }
}
