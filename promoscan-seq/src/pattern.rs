//! Motif search over nucleotide byte slices.
//!
//! - [`find_exact`]: every exact occurrence, overlapping ones included
//! - [`find_mismatches`]: windows within a substitution bound, anchored on
//!   the motif's leading dinucleotide
//!
//! All positions are 1-based: the first base of the sequence is position 1.

use promoscan_core::{PromoscanError, Result};

use crate::distance::count_mismatches;

/// Mismatch bound used when the caller does not choose one.
pub const DEFAULT_MAX_MISMATCHES: usize = 2;

/// Number of leading motif symbols a window must reproduce exactly before it
/// is compared in full.
pub const ANCHOR_LEN: usize = 2;

/// Find every 1-based start position where `motif` occurs exactly.
///
/// After each hit the search resumes one base later, so overlapping
/// occurrences are all reported (`AAA` in `AAAA` gives `[1, 2]`). Returns an
/// empty vec if the motif is empty, longer than the sequence, or absent.
pub fn find_exact(sequence: &[u8], motif: &[u8]) -> Vec<usize> {
    let m = motif.len();
    if m == 0 || m > sequence.len() {
        return vec![];
    }

    let mut positions = Vec::new();
    let mut start = 0;
    while let Some(offset) = sequence[start..].windows(m).position(|w| w == motif) {
        let hit = start + offset;
        positions.push(hit + 1);
        start = hit + 1;
    }
    positions
}

/// Find windows that match `motif` with between 1 and `max_mismatches`
/// substitutions.
///
/// Every window of `motif.len()` bases is visited in order, but only windows
/// whose first [`ANCHOR_LEN`] bases equal the motif's are compared. A
/// near-match that differs inside the anchor is therefore never reported.
/// Exact matches are left to [`find_exact`] and excluded here.
///
/// Returns `(position, mismatch_count)` pairs with 1-based positions in
/// increasing order.
///
/// # Errors
///
/// Returns [`PromoscanError::InvalidArgument`] if `max_mismatches` is 0.
pub fn find_mismatches(
    sequence: &[u8],
    motif: &[u8],
    max_mismatches: usize,
) -> Result<Vec<(usize, usize)>> {
    if max_mismatches == 0 {
        return Err(PromoscanError::InvalidArgument(
            "max_mismatches must be at least 1".into(),
        ));
    }
    let m = motif.len();
    if m == 0 || m > sequence.len() {
        return Ok(vec![]);
    }

    let anchor = &motif[..m.min(ANCHOR_LEN)];
    let mut hits = Vec::new();
    for (i, window) in sequence.windows(m).enumerate() {
        if !window.starts_with(anchor) {
            continue;
        }
        let mismatches = count_mismatches(window, motif)?;
        if mismatches > 0 && mismatches <= max_mismatches {
            hits.push((i + 1, mismatches));
        }
    }
    Ok(hits)
}
