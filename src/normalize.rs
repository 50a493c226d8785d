//! L1 normalization of score vectors.
//!
//! HITS rescales the authority and hub vectors every iteration so their
//! scale stays fixed while the relative magnitudes converge. The target
//! scale here is the vector length: after normalization the absolute
//! values sum to `n`.

use crate::error::HitsError;

/// Rescale `v` so its L1 norm equals `v.len()`.
///
/// Relative magnitudes are preserved; only the overall scale changes.
/// Returns [`HitsError::ZeroNorm`] for the all-zero vector, where the
/// rescale is undefined.
pub fn l1_normalize(v: &[f64]) -> Result<Vec<f64>, HitsError> {
    let norm: f64 = v.iter().map(|x| x.abs()).sum();
    if norm == 0.0 {
        return Err(HitsError::ZeroNorm);
    }

    let scale = v.len() as f64 / norm;
    Ok(v.iter().map(|x| x * scale).collect())
}
