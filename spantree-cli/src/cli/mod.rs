//! Command-line interface orchestration for the spantree tool.
//!
//! The CLI offers an `mst` command that reads a weighted undirected edge
//! list from a file or standard input, runs the Kruskal builder, and
//! renders the resulting minimum spanning forest.

mod commands;
mod render;

pub use commands::{Cli, CliError, Command, ExecutionSummary, MstCommand, render_summary, run_cli};
pub use render::render_dot;

#[cfg(test)]
mod test_helpers;
