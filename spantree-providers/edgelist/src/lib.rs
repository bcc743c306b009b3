//! Edge-list provider parsing `vertex1 vertex2 weight` lines into a graph.
//!
//! The format is line-oriented plain text: three whitespace-separated
//! tokens per edge, with an optional terminating line reading `done`
//! (case-insensitive). Blank lines are skipped. This covers both files
//! and interactive entry on standard input, where `done` ends the session
//! without closing the stream.

use std::io::{self, BufRead};

use spantree_core::{Graph, GraphError};
use thiserror::Error;

/// Line that terminates edge entry, compared case-insensitively.
const TERMINATOR: &str = "done";

/// Errors raised while parsing an edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// A line did not contain exactly three tokens.
    #[error("line {line}: expected `vertex1 vertex2 weight`, got `{content}`")]
    MalformedEdge {
        /// One-based line number of the offending input.
        line: usize,
        /// The raw line content.
        content: String,
    },
    /// A weight token did not parse as a signed integer.
    #[error("line {line}: invalid weight `{token}`")]
    InvalidWeight {
        /// One-based line number of the offending input.
        line: usize,
        /// The unparseable weight token.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
    /// An edge joined a vertex to itself.
    #[error("line {line}: edge joins vertex `{label}` to itself")]
    SelfLoop {
        /// One-based line number of the offending input.
        line: usize,
        /// Label used for both endpoints.
        label: String,
    },
    /// The input terminated without any edges or vertices.
    #[error("no graph input received")]
    EmptyInput,
    /// Reading from the underlying stream failed.
    #[error("failed to read edge list: {source}")]
    Io {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

impl EdgeListError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::MalformedEdge { .. } => EdgeListErrorCode::MalformedEdge,
            Self::InvalidWeight { .. } => EdgeListErrorCode::InvalidWeight,
            Self::SelfLoop { .. } => EdgeListErrorCode::SelfLoop,
            Self::EmptyInput => EdgeListErrorCode::EmptyInput,
            Self::Io { .. } => EdgeListErrorCode::Io,
        }
    }
}

/// Machine-readable error codes for [`EdgeListError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeListErrorCode {
    /// A line did not contain exactly three tokens.
    MalformedEdge,
    /// A weight token did not parse as a signed integer.
    InvalidWeight,
    /// An edge joined a vertex to itself.
    SelfLoop,
    /// The input terminated without any edges or vertices.
    EmptyInput,
    /// Reading from the underlying stream failed.
    Io,
}

impl EdgeListErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedEdge => "EDGE_LIST_MALFORMED_EDGE",
            Self::InvalidWeight => "EDGE_LIST_INVALID_WEIGHT",
            Self::SelfLoop => "EDGE_LIST_SELF_LOOP",
            Self::EmptyInput => "EDGE_LIST_EMPTY_INPUT",
            Self::Io => "EDGE_LIST_IO",
        }
    }
}

/// A named graph parsed from an edge list.
///
/// # Examples
/// ```
/// use spantree_providers_edgelist::EdgeListSource;
///
/// let input = "A B 1\nB C 2\ndone\nA C 3\n";
/// let source = EdgeListSource::try_from_reader("demo", input.as_bytes())?;
/// assert_eq!(source.name(), "demo");
/// // Parsing stopped at `done`, so the A-C edge never entered the graph.
/// assert_eq!(source.graph().vertex_count(), 3);
/// # Ok::<(), spantree_providers_edgelist::EdgeListError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EdgeListSource {
    graph: Graph,
    name: String,
}

impl EdgeListSource {
    /// Wraps an already-built graph under a display name.
    #[must_use]
    pub fn new(name: impl Into<String>, graph: Graph) -> Self {
        Self {
            graph,
            name: name.into(),
        }
    }

    /// Parses an edge list from `reader` until EOF or a `done` line.
    ///
    /// # Errors
    /// Returns [`EdgeListError::MalformedEdge`] for lines without exactly
    /// three tokens, [`EdgeListError::InvalidWeight`] for unparseable
    /// weights, [`EdgeListError::SelfLoop`] when both endpoints match,
    /// [`EdgeListError::EmptyInput`] when no edges were supplied, and
    /// [`EdgeListError::Io`] when the stream fails.
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
    ) -> Result<Self, EdgeListError> {
        let mut graph = Graph::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| EdgeListError::Io { source })?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.eq_ignore_ascii_case(TERMINATOR) {
                break;
            }
            parse_edge(&mut graph, number + 1, trimmed)?;
        }

        if graph.is_empty() {
            return Err(EdgeListError::EmptyInput);
        }

        Ok(Self::new(name, graph))
    }

    /// Returns the display name of this source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parsed graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the source, yielding the parsed graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

fn parse_edge(graph: &mut Graph, line: usize, content: &str) -> Result<(), EdgeListError> {
    let mut tokens = content.split_whitespace();
    let (Some(left), Some(right), Some(weight_token), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(EdgeListError::MalformedEdge {
            line,
            content: content.to_owned(),
        });
    };

    let weight: i64 = weight_token
        .parse()
        .map_err(|source| EdgeListError::InvalidWeight {
            line,
            token: weight_token.to_owned(),
            source,
        })?;

    graph
        .add_edge(left, right, weight)
        .map_err(|err| match err {
            GraphError::SelfLoop { label } => EdgeListError::SelfLoop { line, label },
        })
}
