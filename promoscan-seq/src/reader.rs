//! Reading sequences from plain-text files.
//!
//! Files hold raw bases, possibly wrapped across lines and in either case.
//! Reading strips all whitespace and uppercases; validation is separate
//! (see [`crate::alphabet::is_valid`]) so callers can report invalid content
//! as an ordinary outcome.

use std::path::Path;

use promoscan_core::{PromoscanError, Result};

use crate::seq::DnaSequence;

/// Remove every whitespace character and uppercase the rest.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Read a sequence file and return its normalized content.
///
/// The content is not validated.
pub fn read_sequence(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        PromoscanError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        PromoscanError::Parse(format!("{}: not valid UTF-8: {}", path.display(), e))
    })?;
    Ok(normalize(&text))
}

/// Read, normalize, and validate a sequence file.
///
/// # Errors
///
/// `Io` if the file cannot be read, `Parse` if it holds no bases, and
/// `InvalidArgument` if a symbol is outside `ACGT`.
pub fn read_dna_sequence(path: impl AsRef<Path>) -> Result<DnaSequence> {
    let path = path.as_ref();
    let text = read_sequence(path)?;
    if text.is_empty() {
        return Err(PromoscanError::Parse(format!(
            "{}: empty sequence",
            path.display()
        )));
    }
    DnaSequence::new(text)
}
