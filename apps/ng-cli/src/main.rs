//! ng-cli: command-line driver for the netgraph core.
//!
//! Loads a JSON graph description, builds the graph, and runs the core
//! operations over it: validation, transform copy, and ordered metric
//! emission (one value per row).

mod schema;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use ng_core::CoreError;
use ng_graph::{CopyTransformer, GraphTransformer};
use ng_metrics::{
    DegreeMetric, DirectedFlagMetric, MetricColumn, MetricsError, SelfLoopMetric,
    compute_edge_column, compute_vertex_column, compute_vertex_column_par, write_rows,
};

use schema::SchemaError;

type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser)]
#[command(name = "ng-cli")]
#[command(about = "netgraph CLI - graph modeling and metric emission", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a graph description file
    Validate {
        /// Path to the graph JSON file
        graph_path: PathBuf,
    },
    /// Copy-transform a graph and report the result
    Copy {
        /// Path to the graph JSON file
        graph_path: PathBuf,
    },
    /// Compute a metric and emit one value per row
    Metrics {
        /// Path to the graph JSON file
        graph_path: PathBuf,
        /// Which metric to compute
        #[arg(long, value_enum, default_value = "degree")]
        metric: MetricKind,
        /// Compute with the parallel pass (emission order is unchanged)
        #[arg(long)]
        parallel: bool,
        /// Output JSONL file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MetricKind {
    /// Per-vertex incident edge count
    Degree,
    /// Per-vertex self-loop count
    SelfLoops,
    /// Per-edge directed flag
    Directed,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { graph_path } => cmd_validate(&graph_path),
        Commands::Copy { graph_path } => cmd_copy(&graph_path),
        Commands::Metrics {
            graph_path,
            metric,
            parallel,
            output,
        } => cmd_metrics(&graph_path, metric, parallel, output.as_deref()),
    }
}

fn cmd_validate(graph_path: &Path) -> CliResult<()> {
    println!("Validating graph: {}", graph_path.display());
    let graph = schema::load_graph(graph_path)?;
    println!(
        "✓ Graph is valid ({} vertices, {} edges)",
        graph.vertices().len(),
        graph.edges().len()
    );
    Ok(())
}

fn cmd_copy(graph_path: &Path) -> CliResult<()> {
    let graph = schema::load_graph(graph_path)?;
    let copy = CopyTransformer.transform(&graph)?;
    println!(
        "✓ Transformed: {} vertices, {} edges (source unchanged)",
        copy.vertices().len(),
        copy.edges().len()
    );
    Ok(())
}

fn cmd_metrics(
    graph_path: &Path,
    metric: MetricKind,
    parallel: bool,
    output: Option<&Path>,
) -> CliResult<()> {
    let graph = schema::load_graph(graph_path)?;

    let column: MetricColumn = match metric {
        MetricKind::Degree if parallel => compute_vertex_column_par(&graph, &DegreeMetric)?,
        MetricKind::Degree => compute_vertex_column(&graph, &DegreeMetric)?,
        MetricKind::SelfLoops if parallel => compute_vertex_column_par(&graph, &SelfLoopMetric)?,
        MetricKind::SelfLoops => compute_vertex_column(&graph, &SelfLoopMetric)?,
        MetricKind::Directed => compute_edge_column(&graph, &DirectedFlagMetric)?,
    };

    match output {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            write_rows(&mut file, &column)?;
            file.flush()?;
            println!("✓ Wrote {} rows to {}", column.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_rows(&mut stdout.lock(), &column)?;
        }
    }
    Ok(())
}
