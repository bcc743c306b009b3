//! Union-find (disjoint set union) used for cycle detection.
//!
//! The Kruskal builder processes edges in non-decreasing weight order and
//! accepts an edge only when its endpoints sit in different components.
//! This structure tracks component membership with path compression and
//! union by rank, giving amortised near-constant time per operation.

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(super) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the root of `node`'s set, compressing the visited path.
    pub(super) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a root, i.e. when joining
    /// them would close a cycle. The lower-rank root is attached under the
    /// higher-rank root; on equal rank the left root wins and its rank
    /// grows by one.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        true
    }
}
