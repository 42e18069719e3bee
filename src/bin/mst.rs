//! Loads a graph description, runs Kruskal's and/or Prim's algorithm and
//! prints the spanning tree. Step-by-step traces go to stderr through the
//! logger; results go to stdout.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use log::info;
use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use mst::graph::report::{GraphListing, KeyTable};
use mst::graph::{kruskal, prim, read_graph, LogObserver};
use mst::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Kruskal,
    Prim,
    Both,
}

#[derive(Debug, Parser)]
#[command(
    name = "mst",
    version,
    about = "Compute a minimum spanning tree with Kruskal's and Prim's algorithms."
)]
struct Cli {
    /// Graph file: `<type> <vertex count>` followed by `<u> <v> <weight>` triples.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Algorithm to run.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Both)]
    algorithm: Algorithm,

    /// Start vertex for Prim's algorithm.
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// Print Prim's final key and predecessor table.
    #[arg(long)]
    table: bool,

    /// Print the loaded graph before running.
    #[arg(long)]
    show_graph: bool,

    /// More trace output: `-v` for decisions, `-vv` for every candidate.
    /// `RUST_LOG` overrides this when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to load `{path}`: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: GraphError,
    },

    #[error("prim: {0}")]
    Prim(#[source] GraphError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to install logging: {0}")]
    Logging(String),
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Formatting subscriber for the trace. Records bridged from `log` keep their
/// original target (`mst::cs::graph::observer`, ...).
fn subscriber<M>(
    filter: EnvFilter,
    writer: M,
    ansi: bool,
) -> impl tracing::Subscriber + Send + Sync
where
    M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}

fn init_logging(verbose: u8) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    LogTracer::init().map_err(|err| CliError::Logging(err.to_string()))?;
    tracing::subscriber::set_global_default(subscriber(filter, io::stderr, true))
        .map_err(|err| CliError::Logging(err.to_string()))
}

/// Writes the fatal error to `stderr` directly, so it shows even when the
/// log filter is off.
fn report_failure<E: Write>(err: &CliError, stderr: &mut E) {
    let _ = writeln!(stderr, "mst: {err}");
}

fn run<O: Write>(cli: &Cli, out: &mut O) -> Result<(), CliError> {
    let graph = read_graph::<f64, _>(&cli.input).map_err(|source| CliError::Load {
        path: cli.input.clone(),
        source,
    })?;
    info!(
        "read {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        cli.input.display()
    );

    if cli.show_graph {
        writeln!(out, "{}", GraphListing(&graph))?;
    }

    if matches!(cli.algorithm, Algorithm::Kruskal | Algorithm::Both) {
        let forest = kruskal::minimum_spanning_forest_with(&graph, &mut LogObserver);
        writeln!(out, "{forest}")?;
    }

    if matches!(cli.algorithm, Algorithm::Prim | Algorithm::Both) {
        let tree = prim::minimum_spanning_tree_with(&graph.adjacency(), cli.start, &mut LogObserver)
            .map_err(CliError::Prim)?;
        writeln!(out, "{tree}")?;
        if cli.table {
            writeln!(out, "{}", KeyTable(&tree.table))?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(err) = run(&cli, &mut out) {
        report_failure(&err, &mut io::stderr());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mst").chain(args.iter().copied())).unwrap()
    }

    fn graph_file(name: &str, contents: &str) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("mst-cli-{}-{name}.txt", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let cli = cli(&[]);
        assert_eq!(cli.input, PathBuf::from("input.txt"));
        assert_eq!(cli.algorithm, Algorithm::Both);
        assert_eq!(cli.start, 0);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.table);
    }

    #[test]
    fn test_flags() {
        let cli = cli(&["graph.txt", "-a", "prim", "--start", "3", "--table", "-vv"]);
        assert_eq!(cli.input, PathBuf::from("graph.txt"));
        assert_eq!(cli.algorithm, Algorithm::Prim);
        assert_eq!(cli.start, 3);
        assert!(cli.table);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["mst", "--algorithm", "boruvka"]).is_err());
    }

    #[test]
    fn test_run_both_algorithms() {
        let path = graph_file("both", "0 4\n0 1 10\n0 2 6\n0 3 5\n1 3 15\n2 3 4\n");
        let path_arg = path.to_string_lossy().into_owned();
        let mut out = Vec::new();
        let result = run(&cli(&[path_arg.as_str(), "--table"]), &mut out);
        fs::remove_file(&path).unwrap();

        result.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Kruskal MST:\n  2 -- 3 == 4\n  0 -- 3 == 5\n  0 -- 1 == 10\n"));
        assert!(text.contains("Prim MST from vertex 0:\n"));
        assert!(text.contains("  vertex 2: key = 4, predecessor = 3\n"));
        assert_eq!(text.matches("Total weight: 19\n").count(), 2);
    }

    #[test]
    fn test_run_reports_bad_start_vertex() {
        let path = graph_file("start", "0 2\n0 1 1\n");
        let path_arg = path.to_string_lossy().into_owned();
        let mut out = Vec::new();
        let result = run(&cli(&[path_arg.as_str(), "-a", "prim", "-s", "5"]), &mut out);
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(CliError::Prim(GraphError::VertexNotFound(5)))
        ));
    }

    #[test]
    fn test_run_reports_load_failure() {
        let path = graph_file("invalid", "0 2\n0 2 1\n");
        let path_arg = path.to_string_lossy().into_owned();
        let mut out = Vec::new();
        let result = run(&cli(&[path_arg.as_str()]), &mut out);
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(CliError::Load {
                source: GraphError::VertexOutOfRange { vertex: 2, .. },
                ..
            })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_failure_writes_to_stderr() {
        let path = graph_file("report", "0 2\n0 2 1\n");
        let path_arg = path.to_string_lossy().into_owned();
        let result = run(&cli(&[path_arg.as_str()]), &mut Vec::new());
        fs::remove_file(&path).unwrap();

        let mut stderr = Vec::new();
        report_failure(&result.unwrap_err(), &mut stderr);
        let text = String::from_utf8(stderr).unwrap();
        assert!(text.starts_with("mst: failed to load `"));
        assert!(text.ends_with("edge endpoint 2 is outside the vertex range 0..2\n"));
    }

    #[test]
    fn test_verbose_trace_keeps_library_targets() {
        let _ = LogTracer::init();
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = subscriber(
            EnvFilter::new(default_level(1)),
            move || writer.clone(),
            false,
        );

        let path = graph_file("trace", "0 4\n0 1 10\n0 2 6\n0 3 5\n1 3 15\n2 3 4\n");
        let path_arg = path.to_string_lossy().into_owned();
        let result = tracing::subscriber::with_default(subscriber, || {
            run(&cli(&[path_arg.as_str(), "-a", "kruskal", "-v"]), &mut Vec::new())
        });
        fs::remove_file(&path).unwrap();
        result.unwrap();

        let trace = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(trace.contains(
            "DEBUG mst::cs::graph::observer: added edge 2 -- 3 (4), forest weight now 4"
        ));
        assert!(trace.contains("mst::cs::graph::observer: skipped edge 0 -- 2 (6)"));
        assert!(!trace.contains("log.target"), "unnormalised record: {trace}");
    }
}
