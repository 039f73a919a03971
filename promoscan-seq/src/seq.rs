//! Validated nucleotide sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction checks every byte but does not
//! normalize, so callers pass input that is already stripped and uppercased
//! (see [`crate::reader::normalize`]). `Deref<Target=[u8]>` lets a validated
//! sequence go straight into the `&[u8]` matching functions.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use promoscan_core::{PromoscanError, Sequence, Summarizable};

use crate::alphabet::{first_invalid, Alphabet, NucleotideAlphabet};

/// A validated sequence parameterized by its alphabet.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

/// A sequence over `ACGT`.
pub type DnaSequence = ValidatedSeq<NucleotideAlphabet>;

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Returns [`PromoscanError::InvalidArgument`] naming the first byte that
    /// is not in the alphabet, with its 1-based position.
    pub fn new(bytes: impl AsRef<[u8]>) -> promoscan_core::Result<Self> {
        let data = bytes.as_ref().to_vec();
        if let Some((i, b)) = first_invalid::<A>(&data) {
            return Err(PromoscanError::InvalidArgument(format!(
                "invalid {} byte '{}' (0x{:02X}) at position {}",
                A::NAME,
                b.escape_ascii(),
                b,
                i + 1
            )));
        }
        Ok(Self {
            data,
            _alphabet: PhantomData,
        })
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The sequence as a string slice.
    pub fn as_str(&self) -> &str {
        // Every alphabet byte is ASCII.
        std::str::from_utf8(&self.data).unwrap_or_default()
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = &self.as_str()[..preview_len];
        if self.data.len() > 20 {
            format!("{} sequence ({} bp): {}...", A::NAME, self.data.len(), preview)
        } else {
            format!("{} sequence ({} bp): {}", A::NAME, self.data.len(), preview)
        }
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, self.as_str())
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_dna() {
        let seq = DnaSequence::new(b"TTGACAGGGCTCGAT").unwrap();
        assert_eq!(seq.len(), 15);
        assert_eq!(seq.as_str(), "TTGACAGGGCTCGAT");
    }

    #[test]
    fn does_not_uppercase() {
        assert!(DnaSequence::new(b"ttgaca").is_err());
    }

    #[test]
    fn error_names_position() {
        let err = DnaSequence::new(b"ACGTNX").unwrap_err();
        match err {
            PromoscanError::InvalidArgument(msg) => {
                assert!(msg.contains("'N'"), "{msg}");
                assert!(msg.contains("position 5"), "{msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_is_valid() {
        let seq = DnaSequence::new(b"").unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn summary_truncates_long_sequences() {
        let seq = DnaSequence::new("ACGT".repeat(10)).unwrap();
        assert_eq!(seq.summary(), "DNA sequence (40 bp): ACGTACGTACGTACGTACGT...");
        let short = DnaSequence::new(b"TATAAT").unwrap();
        assert_eq!(short.summary(), "DNA sequence (6 bp): TATAAT");
    }

    #[test]
    fn debug_and_display() {
        let seq = DnaSequence::new(b"TTGACA").unwrap();
        assert_eq!(format!("{seq:?}"), "DNA(\"TTGACA\")");
        assert_eq!(seq.to_string(), "TTGACA");
    }

    #[test]
    fn derefs_to_bytes() {
        let seq = DnaSequence::new(b"ACGT").unwrap();
        assert_eq!(&seq[..2], b"AC");
        assert_eq!(seq.into_bytes(), b"ACGT".to_vec());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_invalid() {
        let ok: std::result::Result<DnaSequence, _> =
            serde::Deserialize::deserialize(serde::de::value::StrDeserializer::<serde::de::value::Error>::new("ACGT"));
        assert!(ok.is_ok());
        let bad: std::result::Result<DnaSequence, _> =
            serde::Deserialize::deserialize(serde::de::value::StrDeserializer::<serde::de::value::Error>::new("ACGU"));
        assert!(bad.is_err());
    }
}
