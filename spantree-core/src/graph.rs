//! Weighted undirected graph model consumed by the MST builder.
//!
//! Vertex labels are interned to dense indices in insertion order, so the
//! label-to-index mapping the Kruskal builder needs is built once, in
//! linear time, as the graph is assembled. `add_edge` records the edge in
//! both endpoints' adjacency lists, which makes adjacency symmetry hold by
//! construction rather than by caller discipline.

use std::{collections::HashMap, sync::Arc};

use crate::error::GraphError;

/// A weighted undirected graph over string-labelled vertices.
///
/// # Examples
/// ```
/// use spantree_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1)?;
/// graph.add_edge("B", "C", 2)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.contains("A"));
/// # Ok::<(), spantree_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    labels: Vec<Arc<str>>,
    index: HashMap<Arc<str>, usize>,
    adjacency: Vec<Vec<(usize, i64)>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns whether `label` names a vertex of this graph.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Iterates over vertex labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(AsRef::as_ref)
    }

    /// Adds a vertex without any incident edges, returning its dense index.
    ///
    /// Adding a label that is already present is a no-op. Isolated vertices
    /// matter for spanning forests: they each form their own component.
    ///
    /// # Examples
    /// ```
    /// use spantree_core::Graph;
    ///
    /// let mut graph = Graph::new();
    /// let first = graph.add_vertex("lonely");
    /// assert_eq!(first, graph.add_vertex("lonely"));
    /// assert_eq!(graph.vertex_count(), 1);
    /// ```
    pub fn add_vertex(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let interned: Arc<str> = Arc::from(label);
        let idx = self.labels.len();
        self.labels.push(Arc::clone(&interned));
        self.index.insert(interned, idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Adds an undirected edge between `left` and `right` with `weight`.
    ///
    /// Both endpoints are interned if unseen, and the edge is recorded in
    /// both adjacency lists. Supplying the same edge twice keeps both
    /// adjacency entries; edge collection deduplicates canonical triples
    /// later, so the duplicate never reaches the MST twice.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when both endpoints carry the same
    /// label.
    pub fn add_edge(&mut self, left: &str, right: &str, weight: i64) -> Result<(), GraphError> {
        if left == right {
            return Err(GraphError::SelfLoop {
                label: left.to_owned(),
            });
        }
        let left_idx = self.add_vertex(left);
        let right_idx = self.add_vertex(right);
        self.adjacency[left_idx].push((right_idx, weight));
        self.adjacency[right_idx].push((left_idx, weight));
        Ok(())
    }

    /// Returns the interned label for a vertex index.
    pub(crate) fn label_arc(&self, index: usize) -> Arc<str> {
        Arc::clone(&self.labels[index])
    }

    /// Returns the label text for a vertex index.
    pub(crate) fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// Returns the adjacency lists indexed by vertex.
    pub(crate) fn adjacency(&self) -> &[Vec<(usize, i64)>] {
        &self.adjacency
    }
}
