//! Presentation-layer formatting.
//!
//! String materialization is deferred to this boundary: the solver and
//! ranker work on vectors, and only here do scores become display lines.

use crate::error::HitsError;
use crate::hits::HitsScores;
use crate::rank::{node_label, RankedEntry};

/// One line per ranked entry: `"{label}: Score = {score:.6}"`.
pub fn ranking_lines(entries: &[RankedEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| format!("{}: Score = {:.6}", e.label, e.score))
        .collect()
}

/// One line per node in index order:
/// `"Node {label}: Authority = {a:.6}, Hub = {h:.6}"`.
pub fn node_lines(scores: &HitsScores) -> Result<Vec<String>, HitsError> {
    if scores.authority.len() != scores.hub.len() {
        return Err(HitsError::LengthMismatch {
            left_name: "authority",
            left: scores.authority.len(),
            right_name: "hub",
            right: scores.hub.len(),
        });
    }

    Ok(scores
        .authority
        .iter()
        .zip(&scores.hub)
        .enumerate()
        .map(|(i, (a, h))| {
            format!(
                "Node {}: Authority = {:.6}, Hub = {:.6}",
                node_label(i),
                a,
                h
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_line_format() {
        let entries = vec![RankedEntry {
            label: "C".to_string(),
            score: 1.4832815681682507,
        }];
        assert_eq!(ranking_lines(&entries), vec!["C: Score = 1.483282"]);
    }

    #[test]
    fn test_node_line_format() {
        let scores = HitsScores {
            authority: vec![0.0, 1.5],
            hub: vec![2.4721359549995796, 0.0],
        };
        let lines = node_lines(&scores).unwrap();
        assert_eq!(lines[0], "Node A: Authority = 0.000000, Hub = 2.472136");
        assert_eq!(lines[1], "Node B: Authority = 1.500000, Hub = 0.000000");
    }

    #[test]
    fn test_mismatched_scores_rejected() {
        let scores = HitsScores {
            authority: vec![1.0],
            hub: vec![1.0, 2.0],
        };
        assert!(matches!(
            node_lines(&scores),
            Err(HitsError::LengthMismatch { .. })
        ));
    }
}
