//! Cosine similarity between embeddings, rescaled from [-1, 1] to [0, 1].

use crate::errors::MatchError;

/// Computes cosine similarity between two embedding vectors, rescaled to
/// `[0.0, 1.0]` via `(cos + 1) / 2`:
/// - `1.0` = identical direction
/// - `0.5` = orthogonal (unrelated)
/// - `0.0` = opposite direction
///
/// Fails with `InvalidInput` for empty, mismatched or non-finite vectors and
/// with `DegenerateVector` when either side has zero magnitude. Callers treat
/// the latter as "similarity unavailable", not as a zero score.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, MatchError> {
    if a.is_empty() || b.is_empty() {
        return Err(MatchError::InvalidInput(
            "cosine similarity needs non-empty vectors".to_string(),
        ));
    }
    if a.len() != b.len() {
        return Err(MatchError::InvalidInput(format!(
            "vector length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        if !x.is_finite() || !y.is_finite() {
            return Err(MatchError::InvalidInput(
                "vectors must contain only finite values".to_string(),
            ));
        }
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(MatchError::DegenerateVector);
    }

    // One square root of the product keeps cos(v, v) exactly 1.0.
    let cosine = dot / (norm_a * norm_b).sqrt();
    Ok(((cosine + 1.0) / 2.0).clamp(0.0, 1.0))
}
