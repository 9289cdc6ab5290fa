//! CLI command implementations.

use std::path::Path;

use crate::collection::AccountCollection;
use crate::engine::AnalyticsEngine;
use crate::format::{AccountReader, TgfWriter};
use crate::graph::traversal::{dfs_to, traverse, TraversalOrder};
use crate::types::{GraphResult, IngestConfig};

fn load(path: &Path, config: IngestConfig) -> GraphResult<AccountCollection> {
    AccountReader::new(config).read_from_file(path)
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(none)")
}

/// Display basic counts for an account file.
pub fn cmd_info(path: &Path, config: IngestConfig, json: bool) -> GraphResult<()> {
    let collection = load(path, config)?;
    let graph = collection.graph();

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "arcs": graph.arc_count(),
            "undirected": graph.is_undirected(),
            "tweets": collection.total_tweets(),
            "stories": collection.total_stories(),
            "users": collection.total_users(),
        }));
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Arcs: {}", graph.arc_count());
        println!("Undirected: {}", graph.is_undirected());
        println!("Tweets: {}", collection.total_tweets());
        println!("Stories: {}", collection.total_stories());
        println!("Users: {}", collection.total_users());
    }
    Ok(())
}

/// Story popularity and account activity.
pub fn cmd_stats(path: &Path, config: IngestConfig, json: bool) -> GraphResult<()> {
    let stats = load(path, config)?.stats();

    if json {
        print_json(&serde_json::json!(stats));
    } else {
        println!("Total tweets: {}", stats.total_tweets);
        println!("Total stories: {}", stats.total_stories);
        println!("Total users: {}", stats.total_users);
        println!("Most popular story: {}", or_none(&stats.most_popular_story));
        println!("Least popular story: {}", or_none(&stats.least_popular_story));
        println!("Most active story user: {}", or_none(&stats.most_active_writer));
        println!("Most active tweeter: {}", or_none(&stats.most_active_tweeter));
    }
    Ok(())
}

/// Largest/shortest component sizes.
pub fn cmd_components(path: &Path, config: IngestConfig, json: bool) -> GraphResult<()> {
    let collection = load(path, config)?;
    let summary = AnalyticsEngine::new().components(collection.graph());

    if json {
        print_json(&serde_json::json!(summary));
    } else {
        println!("Largest component size: {}", summary.largest);
        println!("Shortest component size: {}", summary.shortest);
        println!("Connected: {}", summary.connected);
    }
    Ok(())
}

/// The most central vertex.
pub fn cmd_central(path: &Path, config: IngestConfig, json: bool) -> GraphResult<()> {
    let collection = load(path, config)?;
    let central = AnalyticsEngine::new().most_central(collection.graph());

    if json {
        print_json(&serde_json::json!({ "most_central": central }));
    } else {
        println!("Most central vertex: {}", or_none(&central));
    }
    Ok(())
}

/// Traverse from `start`. With a target, runs a target-seeking DFS.
pub fn cmd_traverse(
    path: &Path,
    config: IngestConfig,
    start: &str,
    order: TraversalOrder,
    target: Option<&str>,
    json: bool,
) -> GraphResult<()> {
    let collection = load(path, config)?;
    let graph = collection.graph();
    let start = start.to_string();

    let (label, visited) = match target {
        Some(t) => ("dfs_to", dfs_to(graph, &start, &t.to_string())?),
        None => (order.name(), traverse(graph, &start, order)?),
    };

    if json {
        print_json(&serde_json::json!({
            "start": start,
            "target": target,
            "order": label,
            "visited": visited,
            "count": visited.len(),
        }));
    } else {
        println!("{} from {} ({} vertices):", label, start, visited.len());
        for v in &visited {
            println!("  {}", v);
        }
        if target.is_some() && visited.is_empty() {
            println!("  (target not reachable)");
        }
    }
    Ok(())
}

/// Export the account/story graph as TGF.
pub fn cmd_export(path: &Path, config: IngestConfig, out: &Path) -> GraphResult<()> {
    let collection = load(path, config)?;
    TgfWriter::new().write_to_file(collection.graph(), out)?;
    println!("Exported {} to {}", path.display(), out.display());
    Ok(())
}

/// Full investigation report: counts, activity, components and centrality.
pub fn cmd_report(
    path: &Path,
    config: IngestConfig,
    tgf: Option<&Path>,
    json: bool,
) -> GraphResult<()> {
    let collection = load(path, config)?;
    let graph = collection.graph();

    if let Some(out) = tgf {
        TgfWriter::new().write_to_file(graph, out)?;
    }

    let engine = AnalyticsEngine::new();
    let stats = collection.stats();
    let components = engine.components(graph);
    let central = engine.most_central(graph);

    if json {
        print_json(&serde_json::json!({
            "vertices": graph.vertex_count(),
            "arcs": graph.arc_count(),
            "stats": stats,
            "components": components,
            "most_central": central,
        }));
    } else {
        println!("Basic Graph Data:");
        println!("Total vertices: {}", graph.vertex_count());
        println!("Total tweets: {}", stats.total_tweets);
        println!("Total stories: {}", stats.total_stories);
        println!("Total users: {}", stats.total_users);
        println!("Most active story user: {}", or_none(&stats.most_active_writer));
        println!("Most active tweeter: {}", or_none(&stats.most_active_tweeter));
        println!();
        println!("Graph Data from DFS and BFS:");
        println!("Largest component size: {}", components.largest);
        println!("Shortest connected component size: {}", components.shortest);
        println!("Most central vertex: {}", or_none(&central));
        println!();
        println!("Story Trends:");
        println!("Most popular story: {}", or_none(&stats.most_popular_story));
        println!("Least popular story: {}", or_none(&stats.least_popular_story));
    }
    Ok(())
}
