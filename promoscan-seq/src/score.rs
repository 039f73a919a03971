//! Normalized similarity scores for near-matches.

use promoscan_core::{PromoscanError, Result};

/// Fraction of agreeing positions, `(motif_length - mismatch_count) / motif_length`,
/// rounded to two decimal places.
///
/// Rounding is half away from zero ([`f64::round`]), which on this
/// non-negative domain is round-half-up. `score(6, 1)` is `0.83`.
///
/// Exact matches are never scored by the scan pipeline; this function
/// still accepts `mismatch_count == 0` and returns `1.0`.
///
/// # Errors
///
/// Returns [`PromoscanError::InvalidArgument`] if `motif_length` is 0 or
/// `mismatch_count > motif_length`.
pub fn score(motif_length: usize, mismatch_count: usize) -> Result<f64> {
    if motif_length == 0 {
        return Err(PromoscanError::InvalidArgument(
            "motif_length must be positive".into(),
        ));
    }
    if mismatch_count > motif_length {
        return Err(PromoscanError::InvalidArgument(format!(
            "mismatch_count {} exceeds motif_length {}",
            mismatch_count, motif_length
        )));
    }
    let ratio = (motif_length - mismatch_count) as f64 / motif_length as f64;
    Ok(round2(ratio))
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
