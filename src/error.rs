//! Error types for the HITS pipeline.
//!
//! Every fallible operation in the crate returns [`HitsError`]. Validation
//! errors (shape, negative weights) are raised before any iteration begins,
//! so a failed call never produces partial results.

use thiserror::Error;

/// Errors produced by matrix construction, the solver, or the ranker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HitsError {
    /// The adjacency matrix has no rows. The pipeline requires n >= 1.
    #[error("adjacency matrix must have at least one node")]
    Empty,

    /// A row's length does not match the number of rows.
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// An edge weight is negative. HITS is defined over non-negative weights.
    #[error("negative weight {weight} at ({row}, {col})")]
    NegativeWeight { row: usize, col: usize, weight: f64 },

    /// An edge weight is NaN or infinite.
    #[error("non-finite weight at ({row}, {col})")]
    NonFinite { row: usize, col: usize },

    /// A vector handed to the L1 normalizer summed to zero, so rescaling is
    /// undefined. Surfaces from the solver when the score mass dies out
    /// (e.g. an all-zero matrix).
    #[error("cannot L1-normalize a zero vector")]
    ZeroNorm,

    /// Two sequences that must be index-aligned have different lengths.
    #[error("length mismatch: {left_name} has {left} entries, {right_name} has {right}")]
    LengthMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },
}
