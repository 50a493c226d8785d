//! HITS authority/hub computation
//!
//! This module provides the power-iteration solver and its result type.

pub mod solver;

pub use solver::HitsSolver;

use serde::Serialize;

/// Result of a HITS computation: one authority and one hub score per node.
///
/// Carries no record of whether the solver converged or exhausted its
/// iteration budget — the two outcomes are deliberately indistinguishable
/// to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitsScores {
    /// Authority scores, indexed by node ID.
    pub authority: Vec<f64>,
    /// Hub scores, indexed by node ID.
    pub hub: Vec<f64>,
}

impl HitsScores {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.authority.len()
    }

    /// Returns `true` if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.authority.is_empty()
    }

    /// Authority score for a node, or 0.0 if out of range.
    pub fn authority_of(&self, node: usize) -> f64 {
        self.authority.get(node).copied().unwrap_or(0.0)
    }

    /// Hub score for a node, or 0.0 if out of range.
    pub fn hub_of(&self, node: usize) -> f64 {
        self.hub.get(node).copied().unwrap_or(0.0)
    }
}
