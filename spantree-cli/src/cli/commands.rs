//! Command implementations and argument parsing for the spantree CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use spantree_core::{Graph, MinimumSpanningForest, minimum_spanning_forest};
use spantree_providers_edgelist::{EdgeListError, EdgeListSource};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::render::render_dot;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spantree",
    about = "Compute minimum spanning trees of weighted undirected graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute a minimum spanning tree with Kruskal's algorithm.
    Mst(MstCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Path to an edge-list file (`vertex1 vertex2 weight` per line).
    /// Reads standard input when omitted; a line reading `done` ends
    /// interactive entry.
    pub input: Option<PathBuf>,

    /// Override name for the graph (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,

    /// Write a Graphviz DOT rendering of the spanning forest to this path.
    #[arg(long)]
    pub dot: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading input or writing output.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list parsing failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Display name of the input graph.
    pub graph_name: String,
    /// The parsed input graph.
    pub graph: Graph,
    /// The computed minimum spanning forest.
    pub forest: MinimumSpanningForest,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing or execution fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spantree_cli::cli::{Cli, Command, MstCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A B 1\nB C 2\nA C 3\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         input: Some(file.path().to_path_buf()),
///         name: Some("demo".into()),
///         dot: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Mst(command) => {
            Span::current().record("command", field::display("mst"));
            run_mst(command)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(input = field::Empty, graph = field::Empty),
)]
pub(super) fn run_mst(command: MstCommand) -> Result<ExecutionSummary, CliError> {
    let MstCommand { input, name, dot } = command;
    let span = Span::current();

    let source = match input {
        Some(path) => {
            span.record("input", field::display(path.display()));
            let reader = open_edge_list(&path)?;
            let graph_name = derive_graph_name(&path, name.as_deref());
            EdgeListSource::try_from_reader(graph_name, reader)?
        }
        None => {
            span.record("input", field::display("<stdin>"));
            info!("reading edges from standard input; finish with `done`");
            let stdin = io::stdin();
            let graph_name = name.unwrap_or_else(|| "stdin".to_owned());
            EdgeListSource::try_from_reader(graph_name, stdin.lock())?
        }
    };
    span.record("graph", field::display(source.name()));

    let graph_name = source.name().to_owned();
    let graph = source.into_graph();
    let forest = minimum_spanning_forest(&graph);

    if let Some(path) = dot {
        write_dot_file(&path, &graph, &forest)?;
    }

    info!(
        graph = graph_name.as_str(),
        vertices = graph.vertex_count(),
        edges = forest.edges().len(),
        total_weight = forest.total_weight(),
        components = forest.component_count(),
        "mst command completed"
    );

    Ok(ExecutionSummary {
        graph_name,
        graph,
        forest,
    })
}

#[instrument(name = "cli.open_edge_list", err, fields(path = field::Empty))]
pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[instrument(name = "cli.write_dot", err, skip(graph, forest), fields(path = field::Empty))]
fn write_dot_file(
    path: &Path,
    graph: &Graph,
    forest: &MinimumSpanningForest,
) -> Result<(), CliError> {
    Span::current().record("path", field::display(path.display()));
    let to_io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_io_error)?;
    let mut writer = io::BufWriter::new(file);
    render_dot(graph, forest, &mut writer).map_err(to_io_error)?;
    writer.flush().map_err(to_io_error)
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Lists every accepted edge as `u -- v (weight: w)` followed by the
/// total weight and the component count.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use spantree_cli::cli::{ExecutionSummary, render_summary};
/// # use spantree_core::{Graph, minimum_spanning_forest};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1)?;
/// let summary = ExecutionSummary {
///     graph_name: "demo".into(),
///     forest: minimum_spanning_forest(&graph),
///     graph,
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("A -- B (weight: 1)"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.graph_name)?;
    writeln!(writer, "vertices: {}", summary.graph.vertex_count())?;
    writeln!(writer, "minimum spanning forest:")?;
    for edge in summary.forest.edges() {
        writeln!(
            writer,
            "{} -- {} (weight: {})",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    writeln!(writer, "total weight: {}", summary.forest.total_weight())?;
    writeln!(writer, "components: {}", summary.forest.component_count())?;
    Ok(())
}
