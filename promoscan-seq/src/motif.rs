//! Promoter motifs, match records, and the per-motif scan pipeline.
//!
//! A scan runs the exact matcher, then the mismatch matcher, then scores each
//! near-match. Exact hits are reported by position only: they carry no score.

use std::fmt;
use std::str::FromStr;

use promoscan_core::{PromoscanError, Result, Scored, Sequence, Summarizable};

use crate::alphabet::{first_invalid, NucleotideAlphabet};
use crate::config::ScanConfig;
use crate::pattern::{find_exact, find_mismatches};
use crate::score::score;
use crate::seq::DnaSequence;

/// Consensus of the prokaryotic -35 promoter element.
pub const MINUS_35_BOX: &[u8] = b"TTGACA";

/// Consensus of the prokaryotic -10 (Pribnow) promoter element.
pub const MINUS_10_BOX: &[u8] = b"TATAAT";

/// A fixed-length nucleotide motif with an optional label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMotif", into = "RawMotif"))]
pub struct Motif {
    bases: Vec<u8>,
    label: Option<String>,
}

impl Motif {
    /// Create an unlabeled motif.
    ///
    /// # Errors
    ///
    /// Returns [`PromoscanError::InvalidArgument`] if `bases` is empty or
    /// contains anything other than uppercase `ACGT`.
    pub fn new(bases: impl AsRef<[u8]>) -> Result<Self> {
        let bases = bases.as_ref();
        if bases.is_empty() {
            return Err(PromoscanError::InvalidArgument("motif must not be empty".into()));
        }
        if let Some((i, b)) = first_invalid::<NucleotideAlphabet>(bases) {
            return Err(PromoscanError::InvalidArgument(format!(
                "invalid motif byte '{}' at position {}",
                b.escape_ascii(),
                i + 1
            )));
        }
        Ok(Self {
            bases: bases.to_vec(),
            label: None,
        })
    }

    /// Create a motif with a display label such as `"-35"`.
    pub fn with_label(bases: impl AsRef<[u8]>, label: impl Into<String>) -> Result<Self> {
        let mut motif = Self::new(bases)?;
        motif.label = Some(label.into());
        Ok(motif)
    }

    /// The -35 and -10 promoter boxes, in that order.
    pub fn promoter_defaults() -> Vec<Motif> {
        vec![
            Motif {
                bases: MINUS_35_BOX.to_vec(),
                label: Some("-35".into()),
            },
            Motif {
                bases: MINUS_10_BOX.to_vec(),
                label: Some("-10".into()),
            },
        ]
    }

    /// The motif as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bases).unwrap_or_default()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Sequence for Motif {
    fn as_bytes(&self) -> &[u8] {
        &self.bases
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `SEQ` or `LABEL=SEQ`.
impl FromStr for Motif {
    type Err = PromoscanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((label, bases)) if !label.trim().is_empty() => {
                Motif::with_label(bases.trim(), label.trim())
            }
            Some(_) => Err(PromoscanError::InvalidArgument(format!(
                "empty motif label in '{}'",
                s
            ))),
            None => Motif::new(s.trim()),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawMotif {
    sequence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMotif> for Motif {
    type Error = PromoscanError;

    fn try_from(raw: RawMotif) -> Result<Self> {
        let mut motif = Motif::new(raw.sequence.as_bytes())?;
        motif.label = raw.label;
        Ok(motif)
    }
}

#[cfg(feature = "serde")]
impl From<Motif> for RawMotif {
    fn from(motif: Motif) -> Self {
        RawMotif {
            sequence: motif.as_str().to_owned(),
            label: motif.label,
        }
    }
}

// ---------------------------------------------------------------------------
// Match records
// ---------------------------------------------------------------------------

/// How a window relates to the motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum MatchKind {
    /// Identical to the motif.
    Exact,
    /// Differs by `mismatches` substitutions, within the configured bound.
    Near { mismatches: usize },
}

/// A 1-based window start paired with its [`MatchKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    pub position: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: MatchKind,
}

/// A scored near-match.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearMatch {
    /// 1-based window start.
    pub position: usize,
    /// Substitutions relative to the motif, in `1..=max_mismatches`.
    pub mismatches: usize,
    /// Fraction of agreeing positions, rounded to two decimals.
    pub score: f64,
}

impl Scored for NearMatch {
    fn score(&self) -> f64 {
        self.score
    }
}

/// Everything found for one motif in one sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotifReport {
    pub motif: Motif,
    /// 1-based start positions of exact occurrences, increasing.
    pub exact: Vec<usize>,
    /// Near-matches in scan order.
    pub near: Vec<NearMatch>,
}

impl MotifReport {
    /// All hits as [`Match`] records ordered by position.
    pub fn matches(&self) -> Vec<Match> {
        let mut all: Vec<Match> = self
            .exact
            .iter()
            .map(|&position| Match {
                position,
                kind: MatchKind::Exact,
            })
            .chain(self.near.iter().map(|n| Match {
                position: n.position,
                kind: MatchKind::Near {
                    mismatches: n.mismatches,
                },
            }))
            .collect();
        all.sort_by_key(|m| m.position);
        all
    }

    /// `(position, score)` for each near-match.
    pub fn scores(&self) -> Vec<(usize, f64)> {
        self.near.iter().map(|n| (n.position, n.score)).collect()
    }

    /// The window of `sequence` covered by a hit at 1-based `position`.
    pub fn window<'a>(&self, sequence: &'a [u8], position: usize) -> Option<&'a [u8]> {
        let start = position.checked_sub(1)?;
        sequence.get(start..start + self.motif.len())
    }

    /// Whether neither exact nor near-matches were found.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.near.is_empty()
    }
}

impl Summarizable for MotifReport {
    fn summary(&self) -> String {
        format!(
            "{}: {} exact, {} near",
            self.motif,
            self.exact.len(),
            self.near.len()
        )
    }
}

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// Scan one motif: exact hits, then scored near-matches.
///
/// # Errors
///
/// Returns [`PromoscanError::InvalidArgument`] if `max_mismatches` is 0.
pub fn scan_motif(
    sequence: &DnaSequence,
    motif: &Motif,
    max_mismatches: usize,
) -> Result<MotifReport> {
    let exact = find_exact(sequence, motif.as_bytes());
    let mut near = Vec::new();
    for (position, mismatches) in find_mismatches(sequence, motif.as_bytes(), max_mismatches)? {
        near.push(NearMatch {
            position,
            mismatches,
            score: score(motif.len(), mismatches)?,
        });
    }
    Ok(MotifReport {
        motif: motif.clone(),
        exact,
        near,
    })
}

/// Scan every configured motif, returning one report per motif in
/// configuration order.
///
/// Motifs are independent; with the `parallel` feature they are scanned on
/// the rayon pool.
pub fn scan(sequence: &DnaSequence, config: &ScanConfig) -> Result<Vec<MotifReport>> {
    config.validate()?;
    let max_mismatches = config.max_mismatches();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        config
            .motifs()
            .par_iter()
            .map(|motif| scan_motif(sequence, motif, max_mismatches))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    config
        .motifs()
        .iter()
        .map(|motif| scan_motif(sequence, motif, max_mismatches))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s).unwrap()
    }

    #[test]
    fn motif_rejects_empty() {
        assert!(matches!(
            Motif::new(b"").unwrap_err(),
            PromoscanError::InvalidArgument(_)
        ));
    }

    #[test]
    fn motif_rejects_invalid_bases() {
        assert!(Motif::new(b"TTGNCA").is_err());
        assert!(Motif::new(b"ttgaca").is_err());
    }

    #[test]
    fn promoter_defaults_order() {
        let motifs = Motif::promoter_defaults();
        assert_eq!(motifs.len(), 2);
        assert_eq!(motifs[0].as_bytes(), MINUS_35_BOX);
        assert_eq!(motifs[0].label(), Some("-35"));
        assert_eq!(motifs[1].as_bytes(), MINUS_10_BOX);
        assert_eq!(motifs[1].label(), Some("-10"));
    }

    #[test]
    fn motif_from_str() {
        let plain: Motif = "TTGACA".parse().unwrap();
        assert_eq!(plain.as_str(), "TTGACA");
        assert_eq!(plain.label(), None);

        let labeled: Motif = "pribnow=TATAAT".parse().unwrap();
        assert_eq!(labeled.as_str(), "TATAAT");
        assert_eq!(labeled.label(), Some("pribnow"));

        assert!("=TATAAT".parse::<Motif>().is_err());
        assert!("box=".parse::<Motif>().is_err());
    }

    #[test]
    fn scan_motif_exact_only() {
        let seq = dna("TTGACAGGGCTCGAT");
        let motif = Motif::new(b"TTGACA").unwrap();
        let report = scan_motif(&seq, &motif, 2).unwrap();
        assert_eq!(report.exact, vec![1]);
        assert!(report.near.is_empty());
    }

    #[test]
    fn scan_motif_scores_near_matches() {
        let seq = dna("TTGAAAAGGCTCGAT");
        let motif = Motif::new(b"TTGACA").unwrap();
        let report = scan_motif(&seq, &motif, 2).unwrap();
        assert!(report.exact.is_empty());
        assert_eq!(
            report.near,
            vec![NearMatch {
                position: 1,
                mismatches: 1,
                score: 0.83
            }]
        );
        assert_eq!(report.scores(), vec![(1, 0.83)]);
        assert_eq!(report.near[0].score(), 0.83);
    }

    #[test]
    fn matches_are_position_ordered() {
        let seq = dna("TTGGCATTGACA");
        let motif = Motif::new(b"TTGACA").unwrap();
        let report = scan_motif(&seq, &motif, 2).unwrap();
        assert_eq!(
            report.matches(),
            vec![
                Match {
                    position: 1,
                    kind: MatchKind::Near { mismatches: 1 }
                },
                Match {
                    position: 7,
                    kind: MatchKind::Exact
                },
            ]
        );
    }

    #[test]
    fn window_extraction() {
        let seq = dna("TTGAAAAGGCTCGAT");
        let report = scan_motif(&seq, &Motif::new(b"TTGACA").unwrap(), 2).unwrap();
        assert_eq!(report.window(&seq, 1), Some(&b"TTGAAA"[..]));
        assert_eq!(report.window(&seq, 0), None);
        assert_eq!(report.window(&seq, 11), None);
    }

    #[test]
    fn scan_uses_config_order() {
        let seq = dna("ACGTTTGACAGGTATAATCCG");
        let reports = scan(&seq, &ScanConfig::default()).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].motif.as_bytes(), MINUS_35_BOX);
        assert_eq!(reports[0].exact, vec![5]);
        assert_eq!(reports[1].motif.as_bytes(), MINUS_10_BOX);
        assert_eq!(reports[1].exact, vec![13]);
    }

    #[test]
    fn scan_empty_sequence() {
        let reports = scan(&dna(""), &ScanConfig::default()).unwrap();
        assert!(reports.iter().all(MotifReport::is_empty));
    }

    #[test]
    fn summary() {
        let seq = dna("TTGACAGGGCTCGAT");
        let report = scan_motif(&seq, &Motif::new(b"TTGACA").unwrap(), 2).unwrap();
        assert_eq!(report.summary(), "TTGACA: 1 exact, 0 near");
    }
}
