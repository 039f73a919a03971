//! Nucleotide alphabet and sequence validation.
//!
//! The alphabet is a zero-sized marker type implementing [`Alphabet`]. Only
//! the four canonical uppercase bases are accepted; no IUPAC ambiguity codes
//! and no case folding. Normalizing input (stripping whitespace, uppercasing)
//! is the job of [`crate::reader`] or the caller.

/// Trait for sequence alphabets.
///
/// Implementors define a fixed set of valid bytes.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte is a member of the alphabet.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}

/// Canonical DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NucleotideAlphabet;

impl Alphabet for NucleotideAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
}

/// Whether every byte of `sequence` is one of `A`, `C`, `G`, `T`.
///
/// The empty sequence is valid. Invalid content is an expected outcome, so
/// it is reported as `false` rather than as an error.
pub fn is_valid(sequence: &[u8]) -> bool {
    sequence.iter().all(|&b| NucleotideAlphabet::is_valid(b))
}

/// Index and byte of the first symbol outside the alphabet, if any.
pub(crate) fn first_invalid<A: Alphabet>(sequence: &[u8]) -> Option<(usize, u8)> {
    sequence
        .iter()
        .enumerate()
        .find(|&(_, &b)| !A::is_valid(b))
        .map(|(i, &b)| (i, b))
}
