//! Graph-specific error types.

use ng_core::{CoreError, EdgeId, VertexId};
use thiserror::Error;

use crate::restrictions::Directedness;

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised by graph mutation and lookup operations.
///
/// Every variant is scoped to the single failed operation; the graph is left
/// exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Remove/lookup targeted a vertex that is not a member of this graph.
    #[error("vertex {vertex} is not a member of this graph")]
    VertexNotFound { vertex: VertexId },

    /// Remove/lookup targeted an edge that is not a member of this graph.
    #[error("edge {edge} is not a member of this graph")]
    EdgeNotFound { edge: EdgeId },

    /// An edge-add request referenced a vertex this graph does not own.
    #[error("edge endpoint {vertex} is not a member of this graph")]
    EndpointNotFound { vertex: VertexId },

    /// An edge-add request would create a self-loop in a graph that
    /// disallows them.
    #[error("self-loops are disallowed by this graph (vertex {vertex})")]
    SelfLoopDisallowed { vertex: VertexId },

    /// An edge-add request would duplicate an existing edge in a graph that
    /// disallows duplicates.
    #[error("an equivalent edge between {front} and {back} already exists")]
    DuplicateEdgeDisallowed { front: VertexId, back: VertexId },

    /// An edge-add request's directed flag conflicts with the graph's
    /// directedness mode.
    #[error("{mode:?} graph cannot hold a directed={directed} edge")]
    DirectednessViolation { mode: Directedness, directed: bool },

    /// A factory returned an entity that does not match the identity or
    /// endpoints it was asked to create.
    #[error("factory broke its creation contract: {what}")]
    FactoryContract { what: &'static str },
}

impl GraphError {
    /// Whether this error belongs to the invalid-edge family (a rejected
    /// edge-add rather than a missing entity).
    pub fn is_invalid_edge(&self) -> bool {
        matches!(
            self,
            GraphError::EndpointNotFound { .. }
                | GraphError::SelfLoopDisallowed { .. }
                | GraphError::DuplicateEdgeDisallowed { .. }
                | GraphError::DirectednessViolation { .. }
        )
    }
}

impl From<GraphError> for CoreError {
    fn from(err: GraphError) -> Self {
        match &err {
            GraphError::VertexNotFound { .. } | GraphError::EdgeNotFound { .. } => {
                CoreError::NotFound {
                    what: err.to_string(),
                }
            }
            GraphError::FactoryContract { .. } => CoreError::Invariant {
                what: err.to_string(),
            },
            _ => CoreError::InvalidEdge {
                what: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ng_core::Id;

    #[test]
    fn invalid_edge_family() {
        let err = GraphError::SelfLoopDisallowed {
            vertex: Id::from_index(0),
        };
        assert!(err.is_invalid_edge());
        let err = GraphError::VertexNotFound {
            vertex: Id::from_index(0),
        };
        assert!(!err.is_invalid_edge());
    }

    #[test]
    fn conversion_to_core_taxonomy() {
        let not_found: CoreError = GraphError::EdgeNotFound {
            edge: Id::from_index(3),
        }
        .into();
        assert!(matches!(not_found, CoreError::NotFound { .. }));

        let invalid: CoreError = GraphError::DuplicateEdgeDisallowed {
            front: Id::from_index(0),
            back: Id::from_index(1),
        }
        .into();
        assert!(matches!(invalid, CoreError::InvalidEdge { .. }));
    }
}
