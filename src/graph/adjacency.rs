//! Dense adjacency matrix representation.
//!
//! HITS repeatedly multiplies the full matrix (and its transpose) against a
//! score vector, so a dense row-major layout is the natural fit: every
//! iteration touches every entry anyway.

use crate::error::HitsError;

/// A validated n×n adjacency matrix with non-negative weights.
///
/// `weights[i * n + j] > 0.0` means an edge from node `i` to node `j`.
/// Immutable for the duration of a computation.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    n: usize,
    weights: Vec<f64>,
}

impl AdjacencyMatrix {
    /// Build a matrix from row vectors, validating shape and weights.
    ///
    /// Fails if there are no rows, any row's length differs from the row
    /// count, or any weight is negative or non-finite. Validation happens
    /// here so the solver never has to re-check.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, HitsError> {
        let n = rows.len();
        if n == 0 {
            return Err(HitsError::Empty);
        }

        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(HitsError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, &w) in row.iter().enumerate() {
                if !w.is_finite() {
                    return Err(HitsError::NonFinite { row: i, col: j });
                }
                if w < 0.0 {
                    return Err(HitsError::NegativeWeight {
                        row: i,
                        col: j,
                        weight: w,
                    });
                }
                weights.push(w);
            }
        }

        Ok(Self { n, weights })
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Weight of the edge from `i` to `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not a valid node index (`>= num_nodes()`).
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.row(i)[j]
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a valid node index.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    /// Compute `M · v` into a fresh vector.
    ///
    /// `out[i]` sums, over every node `j` that `i` points to, `w(i,j) * v[j]`.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>, HitsError> {
        self.check_len(v)?;
        let out = (0..self.n)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(v)
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
            })
            .collect();
        Ok(out)
    }

    /// Compute `Mᵗ · v` into a fresh vector.
    ///
    /// `out[j]` sums, over every node `i` pointing to `j`, `w(i,j) * v[i]`.
    pub fn transpose_mul_vec(&self, v: &[f64]) -> Result<Vec<f64>, HitsError> {
        self.check_len(v)?;
        let mut out = vec![0.0; self.n];
        for (i, &x) in v.iter().enumerate() {
            for (j, &w) in self.row(i).iter().enumerate() {
                out[j] += w * x;
            }
        }
        Ok(out)
    }

    /// Nodes with no outgoing edges (all-zero row). Their hub score
    /// converges to zero.
    pub fn sinks(&self) -> Vec<usize> {
        (0..self.n)
            .filter(|&i| self.row(i).iter().all(|&w| w == 0.0))
            .collect()
    }

    /// Nodes with no incoming edges (all-zero column). Their authority
    /// score converges to zero.
    pub fn sources(&self) -> Vec<usize> {
        (0..self.n)
            .filter(|&j| (0..self.n).all(|i| self.weight(i, j) == 0.0))
            .collect()
    }

    fn check_len(&self, v: &[f64]) -> Result<(), HitsError> {
        if v.len() != self.n {
            return Err(HitsError::LengthMismatch {
                left_name: "matrix",
                left: self.n,
                right_name: "vector",
                right: v.len(),
            });
        }
        Ok(())
    }
}
