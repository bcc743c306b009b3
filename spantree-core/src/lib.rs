//! Spantree core library.
//!
//! Builds minimum spanning trees of weighted undirected graphs with
//! Kruskal's algorithm. The crate models graphs with string vertex labels
//! and integer edge weights, collects and deduplicates canonical edges,
//! and accepts edges in non-decreasing weight order while a disjoint-set
//! forest rejects cycles.
//!
//! Disconnected inputs are not an error: the builder returns a minimum
//! spanning *forest* with one tree per connected component. Empty and
//! single-vertex graphs yield an empty forest with total weight zero.

mod error;
mod graph;
mod mst;

pub use crate::{
    error::{GraphError, GraphErrorCode},
    graph::Graph,
    mst::{MinimumSpanningForest, MstEdge, minimum_spanning_forest},
};
