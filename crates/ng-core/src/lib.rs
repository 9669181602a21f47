//! ng-core: stable foundation for netgraph.
//!
//! Contains:
//! - ids (stable compact IDs for graph entities)
//! - error (shared error types)
//! - metadata (arbitrary key/value annotations carried by entities)

pub mod error;
pub mod ids;
pub mod metadata;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use metadata::Metadata;
