//! Substitution-only distance between equal-length byte strings.

use promoscan_core::{PromoscanError, Result};

/// Count index-aligned positions where `a[i] != b[i]`.
///
/// This is a plain positional comparison with no nucleotide semantics.
///
/// # Errors
///
/// Returns [`PromoscanError::InvalidArgument`] if the lengths differ.
pub fn count_mismatches(a: &[u8], b: &[u8]) -> Result<usize> {
    if a.len() != b.len() {
        return Err(PromoscanError::InvalidArgument(format!(
            "cannot compare strings of unequal length ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}
