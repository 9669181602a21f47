//! ng-graph: graph model layer for netgraph.
//!
//! Provides:
//! - Core graph data structures (Vertex, Edge, Graph)
//! - Insertion-ordered, uniquely-keyed entity collections
//! - Polymorphic creation through factory traits
//! - Pluggable-order vertex iteration and search
//! - Graph transformation into a new, independent graph
//!
//! # Example
//!
//! ```
//! use ng_graph::Graph;
//!
//! let mut graph = Graph::default();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let e = graph.add_edge(a, b, false).unwrap();
//!
//! assert_eq!(graph.vertices().len(), 2);
//! assert_eq!(graph.edges().len(), 1);
//! assert_eq!(graph.edge(e).unwrap().front(), a);
//! ```

pub mod collection;
pub mod entity;
pub mod error;
pub mod factory;
pub mod graph;
pub mod iter;
pub mod restrictions;
pub mod transform;

// Re-exports for ergonomics
pub use collection::{EdgeCollection, EntityCollection, VertexCollection};
pub use entity::{Edge, Vertex};
pub use error::{GraphError, GraphResult};
pub use factory::{
    DefaultEdgeFactory, DefaultGraphFactory, DefaultVertexFactory, EdgeFactory, GraphFactory,
    VertexFactory,
};
pub use graph::Graph;
pub use iter::{InsertionOrder, MetadataOrder, ReverseInsertionOrder, VertexIterator};
pub use restrictions::{Directedness, GraphRestrictions};
pub use transform::{CopyTransformer, GraphTransformer};
