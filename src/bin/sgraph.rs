//! CLI entry point for the `sgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use storygraph::cli::commands;
use storygraph::graph::TraversalOrder;
use storygraph::types::{IngestConfig, DEFAULT_FIELD_DELIMITER, DEFAULT_STORY_SEPARATOR};
use storygraph::GraphError;

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "storygraph CLI: traversal analytics over account/story graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(flatten)]
    ingest: IngestArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IngestArgs {
    /// Field delimiter in account files
    #[arg(long, global = true, default_value_t = DEFAULT_FIELD_DELIMITER)]
    delimiter: char,

    /// Separator between story IDs
    #[arg(long, global = true, default_value_t = DEFAULT_STORY_SEPARATOR)]
    story_separator: char,

    /// Skip the first line of the account file
    #[arg(long, global = true)]
    has_header: bool,
}

impl From<&IngestArgs> for IngestConfig {
    fn from(args: &IngestArgs) -> Self {
        Self {
            field_delimiter: args.delimiter,
            story_separator: args.story_separator,
            has_header: args.has_header,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex, arc and account counts
    Info {
        /// Path to the account file
        file: PathBuf,
    },
    /// Story popularity and account activity
    Stats {
        /// Path to the account file
        file: PathBuf,
    },
    /// Largest and shortest component sizes
    Components {
        /// Path to the account file
        file: PathBuf,
    },
    /// Find the most central vertex
    Central {
        /// Path to the account file
        file: PathBuf,
    },
    /// Traverse the graph from a starting vertex
    Traverse {
        /// Path to the account file
        file: PathBuf,
        /// Starting vertex (screen name or story ID)
        start: String,
        /// Order: dfs or bfs
        #[arg(long, default_value = "dfs")]
        order: String,
        /// Stop at this vertex (depth-first only)
        #[arg(long)]
        target: Option<String>,
    },
    /// Export the graph in TGF
    Export {
        /// Path to the account file
        file: PathBuf,
        /// Output .tgf path
        out: PathBuf,
    },
    /// Full investigation report
    Report {
        /// Path to the account file
        file: PathBuf,
        /// Also write the graph to this .tgf path
        #[arg(long)]
        tgf: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    let config = IngestConfig::from(&cli.ingest);

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env().init();
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, config, json),
        Commands::Stats { file } => commands::cmd_stats(&file, config, json),
        Commands::Components { file } => commands::cmd_components(&file, config, json),
        Commands::Central { file } => commands::cmd_central(&file, config, json),
        Commands::Traverse {
            file,
            start,
            order,
            target,
        } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(o) => o,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, config, &start, order, target.as_deref(), json)
        }
        Commands::Export { file, out } => commands::cmd_export(&file, config, &out),
        Commands::Report { file, tgf } => commands::cmd_report(&file, config, tgf.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MalformedRecord { .. } | GraphError::InvalidCount { .. } => 2,
            GraphError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
