//! Error types for the spantree core library.

use thiserror::Error;

/// Errors raised while assembling a [`crate::Graph`].
///
/// The MST builder itself is infallible; every structural precondition it
/// relies on (distinct endpoints, symmetric adjacency) is enforced here,
/// at construction time.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge joined a vertex to itself.
    #[error("edge joins vertex `{label}` to itself")]
    SelfLoop {
        /// Label used for both endpoints.
        label: String,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::SelfLoop { .. } => GraphErrorCode::SelfLoop,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// An edge joined a vertex to itself.
    SelfLoop,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelfLoop => "GRAPH_SELF_LOOP",
        }
    }
}
