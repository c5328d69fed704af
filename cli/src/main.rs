use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dagpath::{kahn_sort, DagPathEngine, GraphDocument, Metrics, Outcome, PathObjective, WeightedDigraph};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dagpath")]
#[command(about = "Single-source paths on weighted DAGs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print the JSON report
    #[arg(long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute distances and parent links from a source vertex
    Paths {
        /// Graph document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Source vertex; falls back to the document's `source`, then 0
        #[arg(short, long)]
        source: Option<usize>,

        /// Reconstruct the path to this vertex
        #[arg(short, long)]
        target: Option<usize>,

        /// Maximize total weight instead (critical path)
        #[arg(long, default_value_t = false)]
        longest: bool,
    },
    /// Print a topological order, or the vertices blocked by a cycle
    Topo {
        /// Graph document (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Serialize)]
struct PathsReport {
    objective: PathObjective,
    source: usize,
    acyclic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    distances: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parents: Option<Vec<Option<usize>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<TargetReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    critical_path: Option<TargetReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unordered: Vec<usize>,
    metrics: Metrics,
}

#[derive(Serialize)]
struct TargetReport {
    vertex: usize,
    distance: Option<f64>,
    path: Option<Vec<usize>>,
}

#[derive(Serialize)]
struct TopoReport {
    acyclic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unordered: Vec<usize>,
}

fn main() -> Result<()> {
    // stdout carries the JSON report; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Paths {
            input,
            source,
            target,
            longest,
        } => {
            let objective = if longest {
                PathObjective::Longest
            } else {
                PathObjective::Shortest
            };
            let report = run_paths(&input, source, target, objective)?;
            emit(&report, cli.pretty)?;
        }
        Commands::Topo { input } => {
            let report = run_topo(&input)?;
            emit(&report, cli.pretty)?;
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<GraphDocument> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let doc = GraphDocument::from_json(&text)
        .with_context(|| format!("Failed to parse graph document {}", path.display()))?;
    tracing::info!(path = %path.display(), n = doc.n, edges = doc.edges.len(), "loaded graph document");
    Ok(doc)
}

fn finite(d: f64) -> Option<f64> {
    d.is_finite().then_some(d)
}

fn run_paths(
    input: &Path,
    source: Option<usize>,
    target: Option<usize>,
    objective: PathObjective,
) -> Result<PathsReport> {
    let doc = load(input)?;
    let graph = doc.to_graph().context("Invalid graph document")?;
    let source = source.or(doc.source).unwrap_or(0);

    let run = DagPathEngine::new(objective)
        .compute(&graph, source)
        .context("Invalid source vertex")?;

    let mut report = PathsReport {
        objective,
        source,
        acyclic: run.outcome.is_dag(),
        distances: None,
        parents: None,
        target: None,
        critical_path: None,
        unordered: Vec::new(),
        metrics: run.metrics,
    };

    match run.outcome {
        Outcome::Paths(result) => {
            if let Some(vertex) = target {
                let distance = result.distance(vertex).context("Invalid target vertex")?;
                report.target = Some(TargetReport {
                    vertex,
                    distance: finite(distance),
                    path: result.path(vertex)?,
                });
            }
            if objective == PathObjective::Longest {
                report.critical_path = result.critical_path().map(|(len, path)| TargetReport {
                    vertex: path.last().copied().unwrap_or(source),
                    distance: Some(len),
                    path: Some(path),
                });
            }
            report.distances = Some(result.distances().iter().copied().map(finite).collect());
            report.parents = Some(result.parents().to_vec());
        }
        Outcome::NotADag(cycle) => {
            tracing::warn!(blocked = cycle.unordered.len(), "input is not a DAG");
            report.unordered = cycle.unordered;
        }
    }

    Ok(report)
}

fn run_topo(input: &Path) -> Result<TopoReport> {
    let doc = load(input)?;
    let graph = doc.to_graph().context("Invalid graph document")?;
    tracing::debug!(nodes = graph.node_count(), "sorting");

    let topo = kahn_sort(&graph);
    let unordered = topo.unordered();
    Ok(TopoReport {
        acyclic: topo.is_acyclic(),
        order: topo.into_order(),
        unordered,
    })
}

fn emit<T: Serialize>(report: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{out}");
    Ok(())
}
