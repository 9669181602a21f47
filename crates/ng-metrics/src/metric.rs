//! Pluggable metric strategies.
//!
//! Concrete metric formulas are strategies supplied by callers; this module
//! defines the traits plus a few structural metrics used as exercisers.

use ng_graph::{Edge, Graph, Vertex};

use crate::MetricsResult;
use crate::types::MetricValue;

/// A per-vertex computed metric.
///
/// Implementations must be deterministic for a fixed graph; a pass calls
/// `compute` exactly once per enumerated vertex. To skip a vertex, return
/// [`MetricValue::Empty`] rather than failing — an omission would shift
/// every later value to the wrong output slot.
pub trait VertexMetric: Sync {
    /// Column name for the consuming sink.
    fn name(&self) -> &str;

    fn compute(&self, graph: &Graph, vertex: &Vertex) -> MetricsResult<MetricValue>;
}

/// A per-edge computed metric.
pub trait EdgeMetric: Sync {
    fn name(&self) -> &str;

    fn compute(&self, graph: &Graph, edge: &Edge) -> MetricsResult<MetricValue>;
}

/// Number of edges incident to the vertex; self-loops count once.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeMetric;

impl VertexMetric for DegreeMetric {
    fn name(&self) -> &str {
        "degree"
    }

    fn compute(&self, graph: &Graph, vertex: &Vertex) -> MetricsResult<MetricValue> {
        Ok(graph.degree(vertex.id()).into())
    }
}

/// Number of self-loops at the vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfLoopMetric;

impl VertexMetric for SelfLoopMetric {
    fn name(&self) -> &str {
        "self-loops"
    }

    fn compute(&self, graph: &Graph, vertex: &Vertex) -> MetricsResult<MetricValue> {
        let count = graph
            .incident_edges(vertex.id())
            .iter()
            .filter_map(|&id| graph.edge(id))
            .filter(|edge| edge.is_self_loop())
            .count();
        Ok(count.into())
    }
}

/// 1 for a directed edge, 0 for an undirected one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectedFlagMetric;

impl EdgeMetric for DirectedFlagMetric {
    fn name(&self) -> &str {
        "directed"
    }

    fn compute(&self, _graph: &Graph, edge: &Edge) -> MetricsResult<MetricValue> {
        Ok(MetricValue::Int(i64::from(edge.is_directed())))
    }
}
