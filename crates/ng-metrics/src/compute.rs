//! Metric computation passes.
//!
//! Each pass enumerates the graph's entities exactly once, in the owning
//! collection's insertion order, and emits one ordered value per entity.
//! The parallel variants compute into a position-indexed buffer so their
//! emission order is identical to the sequential passes.

use rayon::prelude::*;
use tracing::debug;

use ng_graph::{Edge, Graph, Vertex};

use crate::MetricsResult;
use crate::metric::{EdgeMetric, VertexMetric};
use crate::types::{GraphMetricValueOrdered, MetricColumn};

/// Compute a vertex metric over every vertex, in enumeration order.
///
/// An empty graph yields an empty column.
pub fn compute_vertex_column(
    graph: &Graph,
    metric: &dyn VertexMetric,
) -> MetricsResult<MetricColumn> {
    let mut values = Vec::with_capacity(graph.vertices().len());
    for vertex in graph.vertices().iter() {
        let value = metric.compute(graph, vertex)?;
        values.push(GraphMetricValueOrdered::new(value));
    }
    debug!(metric = metric.name(), rows = values.len(), "vertex pass");
    Ok(MetricColumn::new(metric.name(), values))
}

/// Parallel vertex pass with the same emission order as the sequential one.
///
/// The enumeration order is snapshotted up front; workers fill a buffer
/// indexed by enumeration position, never by completion order.
pub fn compute_vertex_column_par(
    graph: &Graph,
    metric: &dyn VertexMetric,
) -> MetricsResult<MetricColumn> {
    let snapshot: Vec<&Vertex> = graph.vertices().iter().collect();
    let values: Vec<GraphMetricValueOrdered> = snapshot
        .par_iter()
        .map(|vertex| {
            metric
                .compute(graph, vertex)
                .map(GraphMetricValueOrdered::new)
        })
        .collect::<MetricsResult<_>>()?;
    Ok(MetricColumn::new(metric.name(), values))
}

/// Compute an edge metric over every edge, in enumeration order.
pub fn compute_edge_column(graph: &Graph, metric: &dyn EdgeMetric) -> MetricsResult<MetricColumn> {
    let mut values = Vec::with_capacity(graph.edges().len());
    for edge in graph.edges().iter() {
        let value = metric.compute(graph, edge)?;
        values.push(GraphMetricValueOrdered::new(value));
    }
    debug!(metric = metric.name(), rows = values.len(), "edge pass");
    Ok(MetricColumn::new(metric.name(), values))
}

/// Parallel edge pass with the same emission order as the sequential one.
pub fn compute_edge_column_par(
    graph: &Graph,
    metric: &dyn EdgeMetric,
) -> MetricsResult<MetricColumn> {
    let snapshot: Vec<&Edge> = graph.edges().iter().collect();
    let values: Vec<GraphMetricValueOrdered> = snapshot
        .par_iter()
        .map(|edge| {
            metric
                .compute(graph, edge)
                .map(GraphMetricValueOrdered::new)
        })
        .collect::<MetricsResult<_>>()?;
    Ok(MetricColumn::new(metric.name(), values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{DegreeMetric, DirectedFlagMetric};
    use crate::types::MetricValue;

    fn star_graph(leaves: usize) -> Graph {
        let mut graph = Graph::default();
        let hub = graph.add_vertex();
        for _ in 0..leaves {
            let leaf = graph.add_vertex();
            graph.add_edge(hub, leaf, false).unwrap();
        }
        graph
    }

    #[test]
    fn emission_order_matches_enumeration_order() {
        let graph = star_graph(3);
        let column = compute_vertex_column(&graph, &DegreeMetric).unwrap();

        // Hub first (inserted first), then the leaves.
        let expected = vec![
            MetricValue::Int(3),
            MetricValue::Int(1),
            MetricValue::Int(1),
            MetricValue::Int(1),
        ];
        let emitted: Vec<MetricValue> =
            column.values.into_iter().map(|v| v.value).collect();
        assert_eq!(emitted, expected);
    }

    #[test]
    fn one_value_per_entity_no_gaps() {
        let graph = star_graph(7);
        let column = compute_vertex_column(&graph, &DegreeMetric).unwrap();
        assert_eq!(column.len(), graph.vertices().len());
    }

    #[test]
    fn empty_graph_yields_empty_column() {
        let graph = Graph::default();
        let column = compute_vertex_column(&graph, &DegreeMetric).unwrap();
        assert!(column.is_empty());
        let column = compute_edge_column(&graph, &DirectedFlagMetric).unwrap();
        assert!(column.is_empty());
    }

    #[test]
    fn parallel_pass_emits_identical_sequence() {
        let graph = star_graph(50);
        let sequential = compute_vertex_column(&graph, &DegreeMetric).unwrap();
        let parallel = compute_vertex_column_par(&graph, &DegreeMetric).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn edge_pass_in_enumeration_order() {
        let mut graph = Graph::default();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        graph.add_edge(a, b, true).unwrap();
        graph.add_edge(b, a, false).unwrap();

        let column = compute_edge_column(&graph, &DirectedFlagMetric).unwrap();
        let emitted: Vec<MetricValue> =
            column.values.into_iter().map(|v| v.value).collect();
        assert_eq!(emitted, vec![MetricValue::Int(1), MetricValue::Int(0)]);
    }

    #[test]
    fn failing_metric_aborts_pass() {
        struct Failing;
        impl crate::metric::VertexMetric for Failing {
            fn name(&self) -> &str {
                "failing"
            }
            fn compute(
                &self,
                _graph: &Graph,
                _vertex: &ng_graph::Vertex,
            ) -> MetricsResult<MetricValue> {
                Err(crate::MetricsError::Compute {
                    metric: "failing".into(),
                    message: "boom".into(),
                })
            }
        }

        let graph = star_graph(2);
        assert!(compute_vertex_column(&graph, &Failing).is_err());
        assert!(compute_vertex_column_par(&graph, &Failing).is_err());
    }
}
