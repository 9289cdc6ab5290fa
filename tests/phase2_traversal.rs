//! Phase 2 tests: DFS, target-seeking DFS and BFS.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use storygraph::graph::{bfs, dfs, dfs_to, traverse, AdjListsGraph, GraphBuilder, TraversalOrder};
use storygraph::types::GraphError;

// ==================== Helpers ====================

fn tree() -> AdjListsGraph<&'static str> {
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"])
        .edges([
            ("a", "b"),
            ("a", "c"),
            ("b", "d"),
            ("b", "e"),
            ("c", "f"),
            ("c", "g"),
            ("d", "h"),
            ("d", "i"),
            ("e", "j"),
        ]);
    builder.build()
}

fn cycle() -> AdjListsGraph<&'static str> {
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["1", "2", "3", "4", "5"])
        .edges([("1", "2"), ("2", "3"), ("3", "4"), ("4", "5"), ("5", "1")]);
    builder.build()
}

fn disconnected() -> AdjListsGraph<&'static str> {
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["1", "2", "3", "4", "5", "2"])
        .edge("1", "2")
        .arc("2", "3")
        .edge("3", "4");
    builder.build()
}

fn random_graph(seed: u64, vertices: usize, arcs: usize) -> AdjListsGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = AdjListsGraph::new();
    for v in 0..vertices {
        graph.add_vertex(v);
    }
    for _ in 0..arcs {
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);
        if rng.gen_bool(0.5) {
            graph.add_arc(&from, &to);
        } else {
            graph.add_edge(&from, &to);
        }
    }
    graph
}

fn distinct<T: std::hash::Hash + Eq>(items: &[T]) -> bool {
    let set: HashSet<&T> = items.iter().collect();
    set.len() == items.len()
}

// ==================== Scenario Tests ====================

#[test]
fn test_tree_bfs_is_level_order() {
    let graph = tree();
    assert_eq!(
        bfs(&graph, &"a").unwrap(),
        vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]
    );
}

#[test]
fn test_tree_dfs_is_preorder() {
    let graph = tree();
    let order = dfs(&graph, &"a").unwrap();
    assert_eq!(order.len(), 10);
    assert!(distinct(&order));
    assert_eq!(order, vec!["a", "b", "d", "h", "i", "e", "j", "c", "f", "g"]);
}

#[test]
fn test_cycle_orders_follow_front_insertion() {
    let graph = cycle();
    // Closing edge 5-1 puts 5 at the front of 1's successors.
    assert_eq!(graph.successors(&"1").unwrap(), vec!["5", "2"]);
    assert_eq!(bfs(&graph, &"1").unwrap(), vec!["1", "5", "2", "4", "3"]);
    assert_eq!(dfs(&graph, &"1").unwrap(), vec!["1", "5", "4", "3", "2"]);
}

#[test]
fn test_disconnected_reachability() {
    let graph = disconnected();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(dfs(&graph, &"1").unwrap(), vec!["1", "2", "3", "4"]);
    assert_eq!(bfs(&graph, &"1").unwrap(), vec!["1", "2", "3", "4"]);
    // 3 -> 2 does not exist, only 2 -> 3.
    assert_eq!(dfs(&graph, &"3").unwrap(), vec!["3", "4"]);
    assert_eq!(dfs(&graph, &"5").unwrap(), vec!["5"]);
}

// ==================== Target-Seeking DFS ====================

#[test]
fn test_dfs_to_unreachable_is_empty() {
    let graph = disconnected();
    assert!(dfs_to(&graph, &"1", &"5").unwrap().is_empty());
    assert!(dfs_to(&graph, &"4", &"1").unwrap().is_empty());
}

#[test]
fn test_dfs_to_stops_at_target() {
    let graph = tree();
    assert_eq!(
        dfs_to(&graph, &"a", &"e").unwrap(),
        vec!["a", "b", "d", "h", "i", "e"]
    );
    assert_eq!(dfs_to(&graph, &"a", &"b").unwrap(), vec!["a", "b"]);
}

#[test]
fn test_dfs_to_self_is_trivial_path() {
    let graph = disconnected();
    assert_eq!(dfs_to(&graph, &"5", &"5").unwrap(), vec!["5"]);
}

#[test]
fn test_dfs_to_is_a_prefix_of_dfs() {
    let graph = tree();
    let full = dfs(&graph, &"c").unwrap();
    for target in graph.vertices() {
        let partial = dfs_to(&graph, &"c", target).unwrap();
        assert_eq!(partial.last(), Some(target));
        assert_eq!(&full[..partial.len()], &partial[..]);
    }
}

// ==================== Errors ====================

#[test]
fn test_missing_start_is_an_error() {
    let graph = tree();
    assert!(matches!(dfs(&graph, &"zz"), Err(GraphError::VertexNotFound(_))));
    assert!(matches!(bfs(&graph, &"zz"), Err(GraphError::VertexNotFound(_))));
    assert!(matches!(
        dfs_to(&graph, &"a", &"zz"),
        Err(GraphError::VertexNotFound(_))
    ));
    assert!(matches!(
        dfs_to(&graph, &"zz", &"a"),
        Err(GraphError::VertexNotFound(_))
    ));
}

#[test]
fn test_traverse_dispatches_on_order() {
    let graph = cycle();
    assert_eq!(
        traverse(&graph, &"1", TraversalOrder::DepthFirst).unwrap(),
        dfs(&graph, &"1").unwrap()
    );
    assert_eq!(
        traverse(&graph, &"1", TraversalOrder::BreadthFirst).unwrap(),
        bfs(&graph, &"1").unwrap()
    );
}

// ==================== Randomized Properties ====================

#[test]
fn test_dfs_and_bfs_cover_the_same_set() {
    for seed in 0..20 {
        let graph = random_graph(seed, 30, 45);
        for v in graph.vertices() {
            let d = dfs(&graph, v).unwrap();
            let b = bfs(&graph, v).unwrap();
            assert_eq!(d[0], *v);
            assert_eq!(b[0], *v);
            assert_eq!(d.len(), b.len(), "seed {} vertex {}", seed, v);
            assert!(distinct(&d));
            assert!(distinct(&b));
            let ds: HashSet<_> = d.iter().collect();
            let bs: HashSet<_> = b.iter().collect();
            assert_eq!(ds, bs);
        }
    }
}

#[test]
fn test_removal_leaves_no_dangling_successors() {
    for seed in 0..10 {
        let mut graph = random_graph(seed, 20, 60);
        let victims: Vec<usize> = graph.vertices().iter().copied().step_by(3).collect();
        for v in &victims {
            graph.remove_vertex(v);
        }
        for v in graph.vertices().to_vec() {
            let succ = graph.successors(&v).unwrap();
            assert!(victims.iter().all(|x| !succ.contains(x)));
            assert!(dfs(&graph, &v).is_ok());
        }
    }
}

#[test]
fn test_is_edge_is_symmetric() {
    let graph = random_graph(7, 15, 40);
    for a in graph.vertices() {
        for b in graph.vertices() {
            assert_eq!(graph.is_edge(a, b).unwrap(), graph.is_edge(b, a).unwrap());
        }
    }
}
