//! HITS (Hyperlink-Induced Topic Search) authority/hub computation and
//! ranking.
//!
//! Given a directed graph as a non-negative adjacency matrix, the solver
//! alternates authority and hub updates (power iteration with L1
//! renormalization) until the vectors stabilize, then the ranker combines
//! both scores into a deterministic total order over the nodes.
//!
//! # Quick start
//!
//! ```
//! use rapid_hits::{AdjacencyMatrix, HitsSolver};
//!
//! // A -> B, A -> C, C -> D, D -> C
//! let matrix = AdjacencyMatrix::from_rows(vec![
//!     vec![0.0, 1.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 0.0, 0.0],
//!     vec![0.0, 0.0, 0.0, 1.0],
//!     vec![0.0, 0.0, 1.0, 0.0],
//! ])?;
//!
//! let scores = HitsSolver::new().run(&matrix)?;
//! let ranking = rapid_hits::rank::rank(&scores.authority, &scores.hub)?;
//!
//! assert_eq!(ranking[0].label, "C");
//! # Ok::<(), rapid_hits::HitsError>(())
//! ```
//!
//! # Pipeline
//!
//! Data flows one direction: adjacency matrix → solver (renormalizing each
//! step) → (authority, hub) vectors → ranker → ordered (label, score)
//! entries. Each invocation is independent and synchronous; no state
//! persists between calls.

pub mod error;
pub mod graph;
pub mod hits;
pub mod normalize;
pub mod rank;
pub mod report;

pub use error::HitsError;
pub use graph::{AdjacencyMatrix, GraphBuilder};
pub use hits::{HitsScores, HitsSolver};
pub use normalize::l1_normalize;
pub use rank::{rank, rank_with_labels, RankedEntry};
