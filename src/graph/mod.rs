//! Graph construction and representation
//!
//! This module provides the validated dense adjacency matrix the solver
//! iterates over, plus an incremental builder for labeled edge lists.

pub mod adjacency;
pub mod builder;

pub use adjacency::AdjacencyMatrix;
pub use builder::GraphBuilder;
