//! Prim's-algorithm oracle for MST property verification.
//!
//! Provides a simple, trusted reference implementation built on a
//! different algorithm than the unit under test. Prim grows each tree
//! vertex by vertex via repeated linear scans, so the two implementations
//! share no code paths; a total-weight match is strong evidence both are
//! correct. The total weight of a minimum spanning forest is unique even
//! when the edge selection is not, so only aggregates are compared.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::Graph;
use crate::mst::minimum_spanning_forest;

use super::types::GraphFixture;

/// Result of the Prim reference computation.
#[derive(Clone, Copy, Debug)]
pub(super) struct ReferenceForest {
    /// Total weight of the minimum spanning forest.
    pub total_weight: i64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with Prim's algorithm.
///
/// For each unvisited start vertex, repeatedly scans every edge crossing
/// the cut between visited and unvisited vertices and takes the lightest.
/// Quadratic, but the property fixtures stay small.
pub(super) fn prim_reference(graph: &Graph) -> ReferenceForest {
    let node_count = graph.vertex_count();
    let adjacency = graph.adjacency();
    let mut visited = vec![false; node_count];
    let mut total_weight = 0i64;
    let mut edge_count = 0usize;
    let mut component_count = 0usize;

    for start in 0..node_count {
        if visited[start] {
            continue;
        }
        component_count += 1;
        visited[start] = true;

        loop {
            let mut best: Option<(i64, usize)> = None;
            for (u, neighbours) in adjacency.iter().enumerate() {
                if !visited[u] {
                    continue;
                }
                for &(v, weight) in neighbours {
                    if visited[v] {
                        continue;
                    }
                    if best.map_or(true, |(best_weight, _)| weight < best_weight) {
                        best = Some((weight, v));
                    }
                }
            }

            let Some((weight, next)) = best else {
                break;
            };
            visited[next] = true;
            total_weight += weight;
            edge_count += 1;
        }
    }

    ReferenceForest {
        total_weight,
        edge_count,
        component_count,
    }
}

/// Runs the oracle equivalence property for the given fixture.
///
/// Compares the Kruskal builder's total weight, edge count, and component
/// count against the Prim reference.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = minimum_spanning_forest(&fixture.graph);
    let oracle = prim_reference(&fixture.graph);

    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, prim={} (distribution={:?}, vertices={})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.distribution,
            fixture.graph.vertex_count(),
        )));
    }

    if forest.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, prim={} (distribution={:?}, vertices={})",
            forest.edges().len(),
            oracle.edge_count,
            fixture.distribution,
            fixture.graph.vertex_count(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, prim={} (distribution={:?}, vertices={})",
            forest.component_count(),
            oracle.component_count,
            fixture.distribution,
            fixture.graph.vertex_count(),
        )));
    }

    Ok(())
}
