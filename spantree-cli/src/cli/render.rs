//! Graphviz DOT rendering of a spanning forest.
//!
//! Emits an undirected `graph` document listing every vertex of the input
//! graph and the accepted MST edges labelled with their weights, so the
//! result can be drawn with `dot -Tsvg` or any Graphviz viewer. Isolated
//! vertices and unspanned components stay visible because vertices are
//! declared independently of edges.

use std::io::{self, Write};

use spantree_core::{Graph, MinimumSpanningForest};

/// Renders `forest` over `graph`'s vertex set as a Graphviz document.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spantree_cli::cli::render_dot;
/// # use spantree_core::{Graph, minimum_spanning_forest};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1)?;
/// let forest = minimum_spanning_forest(&graph);
///
/// let mut buffer = Vec::new();
/// render_dot(&graph, &forest, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("graph spanning_forest {"));
/// assert!(text.contains("\"A\" -- \"B\" [label=\"1\"];"));
/// # Ok(())
/// # }
/// ```
pub fn render_dot(
    graph: &Graph,
    forest: &MinimumSpanningForest,
    mut writer: impl Write,
) -> io::Result<()> {
    writeln!(writer, "graph spanning_forest {{")?;
    for label in graph.labels() {
        writeln!(writer, "    {};", quote(label))?;
    }
    for edge in forest.edges() {
        writeln!(
            writer,
            "    {} -- {} [label=\"{}\"];",
            quote(edge.source()),
            quote(edge.target()),
            edge.weight()
        )?;
    }
    writeln!(writer, "}}")
}

/// Quotes a vertex label as a DOT string literal.
fn quote(label: &str) -> String {
    let escaped = label.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
