//! Scan configuration.

use promoscan_core::{PromoscanError, Result};

use crate::motif::Motif;
use crate::pattern::DEFAULT_MAX_MISMATCHES;

/// Which motifs to look for and how many substitutions a near-match may have.
///
/// Defaults to the -35 and -10 promoter boxes with a bound of
/// [`DEFAULT_MAX_MISMATCHES`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanConfig {
    motifs: Vec<Motif>,
    max_mismatches: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            motifs: Motif::promoter_defaults(),
            max_mismatches: DEFAULT_MAX_MISMATCHES,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the motif list.
    ///
    /// # Errors
    ///
    /// Returns an error if `motifs` is empty.
    pub fn with_motifs(mut self, motifs: Vec<Motif>) -> Result<Self> {
        if motifs.is_empty() {
            return Err(PromoscanError::InvalidArgument(
                "at least one motif is required".into(),
            ));
        }
        self.motifs = motifs;
        Ok(self)
    }

    /// Set the near-match substitution bound.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_mismatches` is 0.
    pub fn with_max_mismatches(mut self, max_mismatches: usize) -> Result<Self> {
        if max_mismatches == 0 {
            return Err(PromoscanError::InvalidArgument(
                "max_mismatches must be at least 1".into(),
            ));
        }
        self.max_mismatches = max_mismatches;
        Ok(self)
    }

    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    pub fn max_mismatches(&self) -> usize {
        self.max_mismatches
    }

    /// Re-check the builder invariants; deserialized configs skip the builder.
    pub fn validate(&self) -> Result<()> {
        if self.motifs.is_empty() {
            return Err(PromoscanError::InvalidArgument(
                "at least one motif is required".into(),
            ));
        }
        if self.max_mismatches == 0 {
            return Err(PromoscanError::InvalidArgument(
                "max_mismatches must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
