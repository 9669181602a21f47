//! Integration tests for ng-graph.

use ng_graph::{
    CopyTransformer, Directedness, Graph, GraphError, GraphRestrictions, GraphTransformer,
    InsertionOrder, VertexIterator,
};

#[test]
fn build_and_inspect_small_graph() {
    // Build: a -> b, b - c
    let mut graph = Graph::default();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    let c = graph.add_vertex();
    let e1 = graph.add_edge(a, b, true).unwrap();
    let e2 = graph.add_edge(b, c, false).unwrap();

    assert_eq!(graph.vertices().len(), 3);
    assert_eq!(graph.edges().len(), 2);

    let edge = graph.edge(e1).unwrap();
    assert_eq!(edge.front(), a);
    assert_eq!(edge.back(), b);
    assert!(edge.is_directed());

    assert_eq!(graph.incident_edges(b), [e1, e2]);
    assert_eq!(graph.degree(a), 1);
    assert_eq!(graph.degree(b), 2);
}

#[test]
fn enumeration_in_insertion_order() {
    let mut graph = Graph::default();
    let ids: Vec<_> = (0..10).map(|_| graph.add_vertex()).collect();

    let enumerated: Vec<_> = graph.vertices().iter().map(|v| v.id()).collect();
    assert_eq!(enumerated, ids);

    // Removal keeps the relative order of survivors.
    graph.remove_vertex(ids[4]).unwrap();
    let enumerated: Vec<_> = graph.vertices().iter().map(|v| v.id()).collect();
    let expected: Vec<_> = ids
        .iter()
        .copied()
        .filter(|&id| id != ids[4])
        .collect();
    assert_eq!(enumerated, expected);
}

#[test]
fn simple_graph_restrictions_end_to_end() {
    let mut graph = Graph::new(GraphRestrictions::simple());
    let a = graph.add_vertex();
    let b = graph.add_vertex();

    graph.add_edge(a, b, false).unwrap();

    assert!(matches!(
        graph.add_edge(a, a, false),
        Err(GraphError::SelfLoopDisallowed { .. })
    ));
    assert!(matches!(
        graph.add_edge(b, a, false),
        Err(GraphError::DuplicateEdgeDisallowed { .. })
    ));
    assert!(matches!(
        graph.add_edge(a, b, true),
        Err(GraphError::DirectednessViolation { .. })
    ));
    assert_eq!(graph.edges().len(), 1);
}

#[test]
fn failed_add_leaves_no_partial_mutation() {
    let mut graph = Graph::new(GraphRestrictions {
        allow_duplicate_edges: false,
        ..GraphRestrictions::default()
    });
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    graph.add_edge(a, b, false).unwrap();

    let before_degree_a = graph.degree(a);
    let before_incident: Vec<_> = graph.incident_edges(a).to_vec();

    assert!(graph.add_edge(a, b, false).is_err());

    assert_eq!(graph.degree(a), before_degree_a);
    assert_eq!(graph.incident_edges(a), before_incident.as_slice());
}

#[test]
fn search_then_transform_round_trip() {
    let mut graph = Graph::new(GraphRestrictions {
        directedness: Directedness::Directed,
        ..GraphRestrictions::default()
    });
    let hub = graph.add_vertex();
    for _ in 0..5 {
        let leaf = graph.add_vertex();
        graph.add_edge(hub, leaf, true).unwrap();
    }
    graph.vertex_mut(hub).unwrap().metadata.set("role", "hub");

    // Search for the hub by metadata.
    let found = InsertionOrder
        .find_vertex(graph.vertices(), &mut |v| v.metadata.contains_key("role"))
        .expect("hub should be found");
    assert_eq!(found.id(), hub);

    // Transform and verify the copy is isomorphic by counts and degrees.
    let copy = CopyTransformer.transform(&graph).unwrap();
    assert_eq!(copy.vertices().len(), graph.vertices().len());
    assert_eq!(copy.edges().len(), graph.edges().len());

    let copy_hub = InsertionOrder
        .find_vertex(copy.vertices(), &mut |v| v.metadata.contains_key("role"))
        .expect("copied hub should carry metadata");
    assert_eq!(copy.degree(copy_hub.id()), graph.degree(hub));
    assert_eq!(copy.restrictions(), graph.restrictions());
}

#[test]
fn self_loop_cascade_removal() {
    let mut graph = Graph::default();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    graph.add_edge(a, a, false).unwrap();
    graph.add_edge(a, b, false).unwrap();

    graph.remove_vertex(a).unwrap();

    assert_eq!(graph.vertices().len(), 1);
    assert!(graph.edges().is_empty());
    assert_eq!(graph.degree(b), 0);
}

#[test]
fn large_graph_chain() {
    let mut graph = Graph::default();
    let ids: Vec<_> = (0..500).map(|_| graph.add_vertex()).collect();
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1], false).unwrap();
    }

    assert_eq!(graph.vertices().len(), 500);
    assert_eq!(graph.edges().len(), 499);
    assert_eq!(graph.degree(ids[0]), 1);
    assert_eq!(graph.degree(ids[250]), 2);

    // Removing an interior vertex removes exactly its two incident edges.
    graph.remove_vertex(ids[250]).unwrap();
    assert_eq!(graph.edges().len(), 497);
}
