//! ng-metrics: ordered metric value computation and emission.
//!
//! A metric pass enumerates a graph's vertices (or edges) once, in the
//! collection's order, and emits exactly one value per entity. The emitted
//! sequence is positional: the Nth value belongs to the Nth enumerated
//! entity, so the consuming sink can map sequence position to its next free
//! output row without any explicit addressing.

pub mod compute;
pub mod metric;
pub mod rows;
pub mod types;

pub use compute::{
    compute_edge_column, compute_edge_column_par, compute_vertex_column,
    compute_vertex_column_par,
};
pub use metric::{DegreeMetric, DirectedFlagMetric, EdgeMetric, SelfLoopMetric, VertexMetric};
pub use rows::{MetricRow, column_rows, write_rows};
pub use types::{GraphMetricValue, GraphMetricValueOrdered, MetricColumn, MetricValue};

pub type MetricsResult<T> = Result<T, MetricsError>;

#[derive(thiserror::Error, Debug)]
pub enum MetricsError {
    #[error("metric '{metric}' failed: {message}")]
    Compute { metric: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
