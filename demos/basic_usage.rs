//! Build a small graph, traverse it, and run the whole-graph analytics.

use storygraph::*;

fn main() -> GraphResult<()> {
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
    let mut graph = builder.build();
    graph.add_vertex("island");

    println!(
        "Graph has {} vertices and {} arcs",
        graph.vertex_count(),
        graph.arc_count()
    );
    print!("{}", graph);

    println!("dfs(a):       {:?}", dfs(&graph, &"a")?);
    println!("bfs(a):       {:?}", bfs(&graph, &"a")?);
    println!("dfs_to(a, j): {:?}", dfs_to(&graph, &"a", &"j")?);
    println!("dfs_to(a, island): {:?}", dfs_to(&graph, &"a", &"island")?);

    let engine = AnalyticsEngine::new();
    let summary = engine.components(&graph);
    println!(
        "largest={} shortest={} connected={}",
        summary.largest, summary.shortest, summary.connected
    );
    println!("most central: {:?}", engine.most_central(&graph));

    print!("{}", TgfWriter::new().render(&graph)?);
    Ok(())
}
