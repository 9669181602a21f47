//! Building a new graph from an existing one without mutating the source.

use std::collections::HashMap;

use ng_core::{CoreError, CoreResult, VertexId};
use tracing::debug;

use crate::factory::{
    DefaultEdgeFactory, DefaultGraphFactory, DefaultVertexFactory, EdgeFactory, GraphFactory,
    VertexFactory,
};
use crate::graph::Graph;

/// Transforms an existing graph into a new, independent graph.
pub trait GraphTransformer {
    /// Build a new graph from `source` using the supplied factories.
    ///
    /// The source is never mutated. On any failure (for example the
    /// destination graph's restrictions rejecting an edge) the whole
    /// transform aborts and the partially built destination is discarded.
    fn transform_with(
        &self,
        source: &Graph,
        graph_factory: &dyn GraphFactory,
        vertex_factory: &dyn VertexFactory,
        edge_factory: &dyn EdgeFactory,
    ) -> CoreResult<Graph>;

    /// Convenience overload using the default factory triple. The
    /// destination graph carries the source's restrictions.
    fn transform(&self, source: &Graph) -> CoreResult<Graph> {
        self.transform_with(
            source,
            &DefaultGraphFactory::new(*source.restrictions()),
            &DefaultVertexFactory,
            &DefaultEdgeFactory,
        )
    }
}

/// Structure-preserving transformer.
///
/// Copies every vertex in source enumeration order, then every edge with its
/// endpoints resolved through the source-to-destination identity mapping.
/// Metadata mappings are shallow-copied onto the counterparts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyTransformer;

impl GraphTransformer for CopyTransformer {
    fn transform_with(
        &self,
        source: &Graph,
        graph_factory: &dyn GraphFactory,
        vertex_factory: &dyn VertexFactory,
        edge_factory: &dyn EdgeFactory,
    ) -> CoreResult<Graph> {
        let mut destination = graph_factory.create_graph();

        let mut mapping: HashMap<VertexId, VertexId> = HashMap::new();
        for vertex in source.vertices().iter() {
            let new_id = destination.add_vertex_with(vertex_factory)?;
            if let Some(new_vertex) = destination.vertex_mut(new_id) {
                new_vertex.metadata = vertex.metadata.clone();
            }
            mapping.insert(vertex.id(), new_id);
        }

        for edge in source.edges().iter() {
            let front = resolve(&mapping, edge.front())?;
            let back = resolve(&mapping, edge.back())?;
            let new_id =
                destination.add_edge_with(front, back, edge.is_directed(), edge_factory)?;
            if let Some(new_edge) = destination.edge_mut(new_id) {
                new_edge.metadata = edge.metadata.clone();
            }
        }

        debug!(
            vertices = destination.vertices().len(),
            edges = destination.edges().len(),
            "transformed graph"
        );
        Ok(destination)
    }
}

/// Every source edge endpoint must have been mapped in the vertex pass.
fn resolve(mapping: &HashMap<VertexId, VertexId>, source_id: VertexId) -> CoreResult<VertexId> {
    mapping
        .get(&source_id)
        .copied()
        .ok_or_else(|| CoreError::Invariant {
            what: format!("source edge references unmapped vertex {source_id}"),
        })
}
