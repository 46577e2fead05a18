use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gp_app::{
    AppResult, add_graph, list_graphs, load_batch, read_batch, run_batch, validate_document,
    write_answers,
};
use gp_query::ExecutorOptions;
use gp_store::JsonStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphpath")]
#[command(
    about = "Store directed weighted graphs and query paths between their nodes",
    long_about = None
)]
struct Cli {
    /// Directory holding stored graphs
    #[arg(long, global = true, env = "GRAPHPATH_STORE", default_value = ".graphpath")]
    store_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse, validate and store a graph document (JSON or YAML)
    Add {
        /// Path to the graph document
        path: PathBuf,
    },
    /// Validate a graph document without storing it
    Validate {
        /// Path to the graph document
        path: PathBuf,
    },
    /// Answer a JSON query batch and print the answers as JSON
    Query {
        /// Read the batch from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Answer independent requests in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// List stored graphs
    Graphs,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries answers only
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add { path } => cmd_add(&cli.store_dir, &path),
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Query { input, parallel } => {
            cmd_query(&cli.store_dir, input.as_deref(), parallel)
        }
        Commands::Graphs => cmd_graphs(&cli.store_dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn cmd_add(store_dir: &Path, path: &Path) -> AppResult<()> {
    let mut store = JsonStore::new(store_dir.to_path_buf())?;
    let graph = add_graph(&mut store, path)?;
    println!(
        "Added graph '{}' ({}): {} nodes, {} edges",
        graph.id(),
        graph.name(),
        graph.nodes().len(),
        graph.edges().len()
    );
    Ok(())
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    println!("Validating graph document: {}", path.display());
    let graph = validate_document(path)?;
    println!(
        "✓ Graph '{}' is valid ({} nodes, {} edges)",
        graph.id(),
        graph.nodes().len(),
        graph.edges().len()
    );
    Ok(())
}

fn cmd_query(store_dir: &Path, input: Option<&Path>, parallel: bool) -> AppResult<()> {
    let batch = match input {
        Some(path) => load_batch(path)?,
        None => read_batch(io::stdin().lock())?,
    };

    // Read-only: a missing store directory is not created.
    let store = JsonStore::open(store_dir.to_path_buf());
    let answers = run_batch(&store, &batch, ExecutorOptions { parallel })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_answers(&mut out, &answers)?;
    out.flush()?;
    Ok(())
}

fn cmd_graphs(store_dir: &Path) -> AppResult<()> {
    let store = JsonStore::open(store_dir.to_path_buf());
    let graphs = list_graphs(&store)?;

    if graphs.is_empty() {
        println!("No graphs stored in {}", store_dir.display());
        return Ok(());
    }

    println!("{:<20} {:>6} {:>6}  {:<25}  NAME", "ID", "NODES", "EDGES", "STORED");
    for manifest in graphs {
        println!(
            "{:<20} {:>6} {:>6}  {:<25}  {}",
            manifest.graph_id,
            manifest.node_count,
            manifest.edge_count,
            manifest.stored_at,
            manifest.name
        );
    }
    Ok(())
}
