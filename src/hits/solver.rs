//! HITS power-iteration solver.
//!
//! Alternates authority and hub updates with L1 renormalization until both
//! vectors are elementwise stable within the tolerance, or the iteration
//! budget runs out. Budget exhaustion is a normal outcome, not an error:
//! the last candidate vectors are returned either way, with nothing to
//! tell the two cases apart.

use serde::{Deserialize, Serialize};

use crate::error::HitsError;
use crate::graph::AdjacencyMatrix;
use crate::hits::HitsScores;
use crate::normalize::l1_normalize;

/// HITS solver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitsSolver {
    /// Maximum number of iterations (hard cap, default 100).
    pub max_iterations: usize,
    /// Elementwise absolute convergence tolerance (default 1e-7).
    pub tolerance: f64,
}

impl Default for HitsSolver {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-7,
        }
    }
}

impl HitsSolver {
    /// Create a solver with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Run HITS on an adjacency matrix.
    ///
    /// Both vectors start at all-ones. Each iteration computes
    /// `authority = normalize(Mᵗ · hub)` then `hub = normalize(M · authority)`
    /// using the freshly computed authority. Returns once every entry of
    /// both candidate vectors is within `tolerance` of the previous
    /// iteration, or after `max_iterations`.
    ///
    /// Fails with [`HitsError::ZeroNorm`] if the score mass dies out
    /// entirely (e.g. an all-zero matrix); validation of the matrix itself
    /// happens at construction, so no partial results are possible here.
    pub fn run(&self, matrix: &AdjacencyMatrix) -> Result<HitsScores, HitsError> {
        let n = matrix.num_nodes();
        let mut authority = vec![1.0; n];
        let mut hub = vec![1.0; n];

        for _iteration in 0..self.max_iterations {
            let new_authority = l1_normalize(&matrix.transpose_mul_vec(&hub)?)?;
            let new_hub = l1_normalize(&matrix.mul_vec(&new_authority)?)?;

            let stable = within_tolerance(&authority, &new_authority, self.tolerance)
                && within_tolerance(&hub, &new_hub, self.tolerance);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                iteration = _iteration,
                stable,
                "hits iteration complete"
            );

            if stable {
                return Ok(HitsScores {
                    authority: new_authority,
                    hub: new_hub,
                });
            }

            authority = new_authority;
            hub = new_hub;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            max_iterations = self.max_iterations,
            "iteration budget exhausted, returning last candidates"
        );

        Ok(HitsScores { authority, hub })
    }
}

/// Elementwise `|a - b| <= tolerance` over two equal-length slices.
fn within_tolerance(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() <= tolerance)
}
