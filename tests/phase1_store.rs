//! Phase 1 tests: graph store mutation and queries.

use storygraph::graph::{AdjListsGraph, GraphBuilder};
use storygraph::types::GraphError;

// ==================== Helper ====================

fn graph_of(names: &[&'static str]) -> AdjListsGraph<&'static str> {
    let mut graph = AdjListsGraph::new();
    for &name in names {
        graph.add_vertex(name);
    }
    graph
}

// ==================== Vertex Tests ====================

#[test]
fn test_empty_graph() {
    let graph: AdjListsGraph<String> = AdjListsGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.arc_count(), 0);
    assert!(graph.is_undirected());
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph = AdjListsGraph::new();
    assert!(graph.add_vertex("a"));
    assert!(!graph.add_vertex("a"));
    assert_eq!(graph.vertex_count(), 1);
    assert!(graph.successors(&"a").unwrap().is_empty());
}

#[test]
fn test_vertices_keep_insertion_order() {
    let graph = graph_of(&["c", "a", "b"]);
    assert_eq!(graph.vertices(), &["c", "a", "b"]);
}

#[test]
fn test_remove_vertex_purges_incident_arcs() {
    let mut graph = graph_of(&["a", "b", "c"]);
    graph.add_arc(&"a", &"b");
    graph.add_arc(&"a", &"b");
    graph.add_arc(&"c", &"b");
    graph.add_edge(&"b", &"c");

    assert!(graph.remove_vertex(&"b"));
    assert!(!graph.contains(&"b"));
    assert_eq!(graph.vertex_count(), 2);
    for v in graph.vertices().to_vec() {
        assert!(!graph.successors(&v).unwrap().contains(&"b"));
    }
    assert_eq!(graph.arc_count(), 0);
}

#[test]
fn test_remove_missing_vertex_is_noop() {
    let mut graph = graph_of(&["a"]);
    assert!(!graph.remove_vertex(&"z"));
    assert_eq!(graph.vertex_count(), 1);
}

// ==================== Arc Tests ====================

#[test]
fn test_arcs_are_a_multiset() {
    let mut graph = graph_of(&["u", "v"]);
    graph.add_arc(&"u", &"v");
    graph.add_arc(&"u", &"v");
    assert_eq!(graph.arc_count(), 2);
    assert_eq!(graph.successors(&"u").unwrap(), vec!["v", "v"]);

    assert!(graph.remove_arc(&"u", &"v"));
    assert_eq!(graph.successors(&"u").unwrap(), vec!["v"]);
}

#[test]
fn test_arc_with_missing_endpoint_is_noop() {
    let mut graph = graph_of(&["u"]);
    assert!(!graph.add_arc(&"u", &"ghost"));
    assert!(!graph.add_arc(&"ghost", &"u"));
    assert!(!graph.remove_arc(&"u", &"ghost"));
    assert_eq!(graph.arc_count(), 0);
}

#[test]
fn test_successors_are_a_copy() {
    let mut graph = graph_of(&["a", "b"]);
    graph.add_arc(&"a", &"b");
    let mut copy = graph.successors(&"a").unwrap();
    copy.clear();
    assert_eq!(graph.successors(&"a").unwrap(), vec!["b"]);
}

#[test]
fn test_predecessors() {
    let mut graph = graph_of(&["a", "b", "c", "d"]);
    graph.add_arc(&"c", &"b");
    graph.add_arc(&"a", &"b");
    graph.add_arc(&"a", &"b");
    assert_eq!(graph.predecessors(&"b").unwrap(), vec!["a", "c"]);
    assert!(graph.predecessors(&"d").unwrap().is_empty());
}

#[test]
fn test_out_degree_counts_duplicates() {
    let mut graph = graph_of(&["a", "b"]);
    graph.add_edge(&"a", &"b");
    graph.add_arc(&"a", &"b");
    assert_eq!(graph.out_degree(&"a").unwrap(), 2);
    assert_eq!(graph.out_degree(&"b").unwrap(), 1);
}

#[test]
fn test_arcs_iterator_in_storage_order() {
    let mut graph = graph_of(&["a", "b", "c"]);
    graph.add_arc(&"b", &"c");
    graph.add_edge(&"a", &"b");
    let arcs: Vec<(&str, &str)> = graph.arcs().map(|(f, t)| (*f, *t)).collect();
    assert_eq!(arcs, vec![("a", "b"), ("b", "a"), ("b", "c")]);
}

// ==================== Edge Tests ====================

#[test]
fn test_scenario_arc_and_edge() {
    let mut graph = graph_of(&["a", "b", "c", "d", "e"]);
    graph.add_arc(&"a", &"b");
    graph.add_edge(&"a", &"c");
    graph.remove_vertex(&"e");

    assert!(graph.is_arc(&"a", &"b").unwrap());
    assert!(!graph.is_edge(&"a", &"b").unwrap());
    assert!(graph.is_edge(&"a", &"c").unwrap());
    assert!(graph.is_edge(&"c", &"a").unwrap());
    assert!(!graph.is_undirected());
    assert_eq!(graph.vertex_count(), 4);
}

#[test]
fn test_edge_insertion_is_asymmetric() {
    let mut graph = graph_of(&["a", "b", "c"]);
    graph.add_arc(&"c", &"b");
    graph.add_edge(&"a", &"c");
    graph.add_edge(&"a", &"b");
    assert_eq!(graph.successors(&"a").unwrap(), vec!["c", "b"]);
    assert_eq!(graph.successors(&"c").unwrap(), vec!["a", "b"]);
    assert_eq!(graph.successors(&"b").unwrap(), vec!["a"]);
}

#[test]
fn test_remove_edge() {
    let mut graph = graph_of(&["a", "b"]);
    graph.add_edge(&"a", &"b");
    assert!(graph.is_undirected());
    assert!(graph.remove_edge(&"a", &"b"));
    assert!(!graph.is_arc(&"a", &"b").unwrap());
    assert!(!graph.is_arc(&"b", &"a").unwrap());
    assert!(!graph.remove_edge(&"a", &"b"));
}

#[test]
fn test_is_undirected_for_edges_only() {
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["1", "2", "3"])
        .edges([("1", "2"), ("2", "3")]);
    let graph = builder.build();
    assert!(graph.is_undirected());
}

// ==================== Error Tests ====================

#[test]
fn test_queries_on_missing_vertex() {
    let graph = graph_of(&["a"]);
    match graph.successors(&"zz") {
        Err(GraphError::VertexNotFound(name)) => assert!(name.contains("zz")),
        other => panic!("Expected VertexNotFound, got {:?}", other),
    }
    assert!(graph.predecessors(&"zz").is_err());
    assert!(graph.out_degree(&"zz").is_err());
    assert!(graph.is_arc(&"a", &"zz").is_err());
    assert!(graph.is_edge(&"zz", &"a").is_err());
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_replays_in_order() {
    let mut builder = GraphBuilder::new();
    builder.vertex("a").arc("a", "b").vertex("b").arc("a", "b");
    let graph = builder.build();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.arc_count(), 1);
}
