//! Type definitions for MST property-based tests.

use crate::graph::Graph;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation,
/// producing inputs that stress different aspects of the Kruskal builder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so most edges are distinct.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaks.
    ManyIdentical,
    /// Sparse graph built around a guaranteed random spanning tree.
    Sparse,
    /// Dense graph approaching a complete graph.
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

impl WeightDistribution {
    pub(super) const ALL: [Self; 5] = [
        Self::Unique,
        Self::ManyIdentical,
        Self::Sparse,
        Self::Dense,
        Self::Disconnected,
    ];
}

/// Fixture for MST property tests.
///
/// Captures the generated graph and the weight distribution used during
/// generation, providing context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Generated graph under test.
    pub graph: Graph,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
