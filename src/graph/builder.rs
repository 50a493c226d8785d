//! Graph builder with labeled-edge accumulation.
//!
//! This module provides a mutable builder that uses FxHashMap for O(1)
//! label lookups during construction. Node ids follow first-mention order,
//! so the same edge list always produces the same matrix.

use rustc_hash::FxHashMap;

use crate::error::HitsError;
use crate::graph::adjacency::AdjacencyMatrix;

/// A mutable builder that accumulates weighted directed edges between
/// labeled nodes and produces a dense [`AdjacencyMatrix`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Maps label -> node ID
    label_to_id: FxHashMap<String, usize>,
    /// Labels in insertion order
    labels: Vec<String>,
    /// Accumulated edges: (source, target) -> weight
    edges: FxHashMap<(usize, usize), f64>,
}

impl GraphBuilder {
    /// Create a new empty graph builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a node for the given label, returning its ID.
    pub fn get_or_create_node(&mut self, label: &str) -> usize {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.labels.len();
        self.label_to_id.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }

    /// Add `weight` to the directed edge from `source` to `target`,
    /// creating the nodes as needed.
    pub fn increment_edge(&mut self, source: &str, target: &str, weight: f64) {
        let s = self.get_or_create_node(source);
        let t = self.get_or_create_node(target);
        *self.edges.entry((s, t)).or_insert(0.0) += weight;
    }

    /// Number of nodes seen so far.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Labels in node-id order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Produce the adjacency matrix and the label list, consuming the
    /// builder. Weight validation happens in [`AdjacencyMatrix::from_rows`].
    pub fn build(self) -> Result<(AdjacencyMatrix, Vec<String>), HitsError> {
        let n = self.labels.len();
        let mut rows = vec![vec![0.0; n]; n];
        for ((s, t), w) in self.edges {
            rows[s][t] = w;
        }
        let matrix = AdjacencyMatrix::from_rows(rows)?;
        Ok((matrix, self.labels))
    }
}
