//! Node ranking from converged authority/hub scores.
//!
//! Combines the two score vectors into a single per-node score with fixed
//! weights, then produces a strict total order: descending by score, ties
//! broken by ascending label. With equal-length inputs and distinct labels
//! there is exactly one valid output ordering.

use serde::Serialize;

use crate::error::HitsError;

/// Weight of the authority score in the combined ranking score.
pub const AUTHORITY_WEIGHT: f64 = 0.6;
/// Weight of the hub score in the combined ranking score.
pub const HUB_WEIGHT: f64 = 0.4;

/// A node's position in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// Node label (default scheme: index 0 -> "A", 1 -> "B", ...).
    pub label: String,
    /// Combined score: 0.6 * authority + 0.4 * hub.
    pub score: f64,
}

/// Default label for a node index: "A".."Z", then spreadsheet-style
/// ("AA", "AB", ...) so the scheme stays total for any index.
pub fn node_label(index: usize) -> String {
    let mut label = String::new();
    let mut i = index;
    loop {
        label.insert(0, (b'A' + (i % 26) as u8) as char);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    label
}

/// Rank nodes using the default alphabetic label scheme.
pub fn rank(authority: &[f64], hub: &[f64]) -> Result<Vec<RankedEntry>, HitsError> {
    let labels: Vec<String> = (0..authority.len()).map(node_label).collect();
    rank_with_labels(authority, hub, &labels)
}

/// Rank nodes with caller-supplied labels.
///
/// `labels[i]` names node `i`. All three sequences must have the same
/// length. Sorting is descending by combined score with ascending-label
/// tie-break, so equal scores still yield a deterministic order.
pub fn rank_with_labels(
    authority: &[f64],
    hub: &[f64],
    labels: &[String],
) -> Result<Vec<RankedEntry>, HitsError> {
    if authority.len() != hub.len() {
        return Err(HitsError::LengthMismatch {
            left_name: "authority",
            left: authority.len(),
            right_name: "hub",
            right: hub.len(),
        });
    }
    if labels.len() != authority.len() {
        return Err(HitsError::LengthMismatch {
            left_name: "labels",
            left: labels.len(),
            right_name: "authority",
            right: authority.len(),
        });
    }

    let mut entries: Vec<RankedEntry> = authority
        .iter()
        .zip(hub)
        .zip(labels)
        .map(|((&a, &h), label)| RankedEntry {
            label: label.clone(),
            score: AUTHORITY_WEIGHT * a + HUB_WEIGHT * h,
        })
        .collect();

    entries.sort_by(|x, y| {
        y.score
            .total_cmp(&x.score)
            .then_with(|| x.label.cmp(&y.label))
    });

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_label_alphabet() {
        assert_eq!(node_label(0), "A");
        assert_eq!(node_label(1), "B");
        assert_eq!(node_label(25), "Z");
    }

    #[test]
    fn test_node_label_past_z() {
        assert_eq!(node_label(26), "AA");
        assert_eq!(node_label(27), "AB");
        assert_eq!(node_label(51), "AZ");
        assert_eq!(node_label(52), "BA");
    }

    #[test]
    fn test_combined_score_weights() {
        let entries = rank(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        let a = entries.iter().find(|e| e.label == "A").unwrap();
        let b = entries.iter().find(|e| e.label == "B").unwrap();
        assert!((a.score - 0.6).abs() < 1e-12);
        assert!((b.score - 0.4).abs() < 1e-12);
        // Authority weighs more, so A ranks first.
        assert_eq!(entries[0].label, "A");
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let entries = rank(&[1.0, 1.0], &[1.0, 1.0]).unwrap();
        assert_eq!(entries[0].label, "A");
        assert!((entries[0].score - 1.0).abs() < 1e-12);
        assert_eq!(entries[1].label, "B");
        assert!((entries[1].score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_descending_by_score() {
        let entries = rank(&[0.0, 2.0, 1.0], &[0.0, 0.0, 0.0]).unwrap();
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_custom_labels() {
        let labels = vec!["beta".to_string(), "alpha".to_string()];
        let entries = rank_with_labels(&[1.0, 1.0], &[1.0, 1.0], &labels).unwrap();
        // Same scores: tie-break is on the supplied labels.
        assert_eq!(entries[0].label, "alpha");
        assert_eq!(entries[1].label, "beta");
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(matches!(
            rank(&[1.0, 2.0], &[1.0]),
            Err(HitsError::LengthMismatch { .. })
        ));
        let labels = vec!["x".to_string()];
        assert!(matches!(
            rank_with_labels(&[1.0, 2.0], &[1.0, 2.0], &labels),
            Err(HitsError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_output_cardinality() {
        let entries = rank(&[1.0; 5], &[2.0; 5]).unwrap();
        assert_eq!(entries.len(), 5);
    }
}
