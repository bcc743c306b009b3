//! Minimum spanning forest construction via Kruskal's algorithm.
//!
//! The builder collects canonical undirected edges from the graph's
//! adjacency, deduplicates them, sorts by weight, and accepts edges whose
//! endpoints lie in different components of a disjoint-set forest. The
//! scan stops as soon as `|V| - 1` edges are accepted; when the graph is
//! disconnected the edge list runs out first and the result is a spanning
//! forest with one tree per component.

mod union_find;

use std::{collections::HashSet, sync::Arc};

use tracing::{debug, instrument};

use crate::graph::Graph;

use self::union_find::DisjointSet;

/// A single accepted edge in canonical undirected form.
///
/// The endpoint labels are ordered so that `source() <= target()`
/// lexicographically, matching the canonical triple used during edge
/// collection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MstEdge {
    source: Arc<str>,
    target: Arc<str>,
    weight: i64,
}

impl MstEdge {
    /// Returns the lexicographically smaller endpoint label.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the lexicographically larger endpoint label.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> i64 { self.weight }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning
/// tree. Edges appear in acceptance order, which is non-decreasing by
/// weight.
///
/// # Examples
/// ```
/// use spantree_core::{Graph, minimum_spanning_forest};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1)?;
/// graph.add_edge("B", "C", 2)?;
/// graph.add_edge("A", "C", 3)?;
///
/// let forest = minimum_spanning_forest(&graph);
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 3);
/// assert_eq!(forest.edges().len(), 2);
/// # Ok::<(), spantree_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<MstEdge>,
    total_weight: i64,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[MstEdge] {
        &self.edges
    }

    /// Returns the sum of accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Canonicalized edge over dense vertex indices.
///
/// `source` carries the lexicographically smaller label of the pair.
#[derive(Clone, Copy, Debug)]
struct CanonicalEdge {
    weight: i64,
    source: usize,
    target: usize,
}

/// Derives the deduplicated canonical edge list from the adjacency.
///
/// Every adjacency entry `(u, (v, w))` collapses to the triple
/// `(w, min(u, v), max(u, v))` under lexicographic label order. A hashed
/// membership check drops exact duplicate triples, so a symmetric
/// adjacency yields each undirected edge exactly once and resupplying the
/// same edge never double-counts it.
fn collect_canonical_edges(graph: &Graph) -> Vec<CanonicalEdge> {
    let mut seen: HashSet<(i64, usize, usize)> = HashSet::new();
    let mut edges = Vec::new();

    for (u, neighbours) in graph.adjacency().iter().enumerate() {
        for &(v, weight) in neighbours {
            let (source, target) = if graph.label(u) <= graph.label(v) {
                (u, v)
            } else {
                (v, u)
            };
            if seen.insert((weight, source, target)) {
                edges.push(CanonicalEdge {
                    weight,
                    source,
                    target,
                });
            }
        }
    }

    edges
}

/// Orders edges by weight ascending, ties broken by the canonical label
/// pair. Any minimum tree is acceptable on exact ties; this tie-break just
/// keeps the scan deterministic.
fn sort_edges(edges: &mut [CanonicalEdge], graph: &Graph) {
    edges.sort_unstable_by(|a, b| {
        a.weight
            .cmp(&b.weight)
            .then_with(|| graph.label(a.source).cmp(graph.label(b.source)))
            .then_with(|| graph.label(a.target).cmp(graph.label(b.target)))
    });
}

/// Computes a minimum spanning forest of `graph` with Kruskal's algorithm.
///
/// The result lists accepted edges in non-decreasing weight order together
/// with their total weight and the number of connected components. A
/// connected graph on `n` vertices yields exactly `n - 1` edges; a graph
/// with `k` components yields `n - k`. Empty and single-vertex graphs
/// yield an empty forest with total weight zero.
///
/// The builder is pure per call: it constructs and discards its own
/// disjoint-set forest and never mutates the graph.
///
/// # Examples
/// ```
/// use spantree_core::{Graph, minimum_spanning_forest};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 5)?;
/// graph.add_edge("C", "D", 5)?;
///
/// let forest = minimum_spanning_forest(&graph);
/// assert_eq!(forest.component_count(), 2);
/// assert_eq!(forest.total_weight(), 10);
/// # Ok::<(), spantree_core::GraphError>(())
/// ```
#[must_use]
#[instrument(name = "mst.kruskal", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn minimum_spanning_forest(graph: &Graph) -> MinimumSpanningForest {
    let vertex_count = graph.vertex_count();
    if vertex_count <= 1 {
        return MinimumSpanningForest {
            edges: Vec::new(),
            total_weight: 0,
            component_count: vertex_count,
        };
    }

    let mut edges = collect_canonical_edges(graph);
    sort_edges(&mut edges, graph);
    debug!(candidate_edges = edges.len(), "collected canonical edges");

    let mut forest = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(vertex_count - 1);
    let mut total_weight = 0i64;

    for edge in &edges {
        if accepted.len() == vertex_count - 1 {
            break;
        }
        if forest.union(edge.source, edge.target) {
            total_weight += edge.weight;
            accepted.push(MstEdge {
                source: graph.label_arc(edge.source),
                target: graph.label_arc(edge.target),
                weight: edge.weight,
            });
        }
    }

    let component_count = vertex_count - accepted.len();
    debug!(
        accepted = accepted.len(),
        total_weight, component_count, "kruskal scan finished"
    );

    MinimumSpanningForest {
        edges: accepted,
        total_weight,
        component_count,
    }
}

#[cfg(test)]
mod property;
