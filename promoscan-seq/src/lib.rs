//! Promoter motif scanning for DNA sequences.
//!
//! Finds exact and near occurrences (substitutions only, no indels) of fixed
//! motifs such as the prokaryotic -35 (`TTGACA`) and -10 (`TATAAT`) boxes:
//!
//! - **Validation**: [`is_valid`] and the validated [`DnaSequence`]
//! - **Distance**: [`count_mismatches`] between equal-length strings
//! - **Matching**: [`find_exact`] (overlapping) and [`find_mismatches`] (anchored)
//! - **Scoring**: [`score()`] converts a mismatch count to a two-decimal ratio
//! - **Pipeline**: [`scan`] runs all of the above for each [`Motif`] in a [`ScanConfig`]
//! - **Reading**: [`read_sequence`] / [`read_dna_sequence`] (feature `std`)
//!
//! Positions are 1-based throughout.
//!
//! # Example
//!
//! ```
//! use promoscan_seq::{scan, DnaSequence, ScanConfig};
//!
//! let seq = DnaSequence::new(b"ACGTTTGACAGGTATAATCCG").unwrap();
//! let reports = scan(&seq, &ScanConfig::default()).unwrap();
//!
//! assert_eq!(reports[0].exact, vec![5]); // TTGACA
//! assert_eq!(reports[1].exact, vec![13]); // TATAAT
//! ```

pub mod alphabet;
pub mod config;
pub mod distance;
pub mod motif;
pub mod pattern;
pub mod score;
pub mod seq;

#[cfg(feature = "std")]
pub mod reader;

pub use alphabet::{is_valid, Alphabet, NucleotideAlphabet};
pub use config::ScanConfig;
pub use distance::count_mismatches;
pub use motif::{
    scan, scan_motif, Match, MatchKind, Motif, MotifReport, NearMatch, MINUS_10_BOX, MINUS_35_BOX,
};
pub use pattern::{find_exact, find_mismatches, ANCHOR_LEN, DEFAULT_MAX_MISMATCHES};
pub use score::score;
pub use seq::{DnaSequence, ValidatedSeq};

#[cfg(feature = "std")]
pub use reader::{normalize, read_dna_sequence, read_sequence};
