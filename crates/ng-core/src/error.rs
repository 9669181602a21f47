use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Shared error taxonomy for graph operations.
///
/// Every failure is scoped to the single operation that raised it; the graph
/// is left in the state it held immediately before the failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A required argument was absent or unusable.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    /// An edge-add request violated the owning graph's restrictions or
    /// referenced a vertex the graph does not own.
    #[error("Invalid edge: {what}")]
    InvalidEdge { what: String },

    /// A remove/lookup targeted an entity not present in the collection.
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// Internal consistency violated; checked at API boundaries.
    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
