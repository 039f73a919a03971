//! Human-readable and JSON rendering of scan results.
//!
//! The matching engine returns positions and match kinds only; the color
//! scheme lives here.

use promoscan_core::Sequence;
use promoscan_seq::{DnaSequence, MotifReport};
use serde::Serialize;

/// How a highlighted window is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Exact,
    Near,
}

/// Console reporter for terminal output.
///
/// With color enabled, exact hits are bright green and near-matches red.
/// Without color, highlighted windows are wrapped in brackets.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_start(&self, style: Highlight) -> &'static str {
        if !self.use_color {
            return "[";
        }
        match style {
            Highlight::Exact => "\x1b[92m", // bright green
            Highlight::Near => "\x1b[31m",  // red
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            "]"
        }
    }

    /// Mark the `len`-base window starting at 1-based `position`.
    ///
    /// Out-of-range positions return the sequence unchanged.
    pub fn highlight(&self, sequence: &str, position: usize, len: usize, style: Highlight) -> String {
        let Some(start) = position.checked_sub(1) else {
            return sequence.to_owned();
        };
        if start >= sequence.len() {
            return sequence.to_owned();
        }
        let end = (start + len).min(sequence.len());
        format!(
            "{}{}{}{}{}",
            &sequence[..start],
            self.color_start(style),
            &sequence[start..end],
            self.color_end(),
            &sequence[end..]
        )
    }

    /// Render every report as a block of text.
    pub fn render(&self, sequence: &DnaSequence, reports: &[MotifReport]) -> String {
        let mut output = String::new();
        output.push_str(&format!("DNA Sequence: {}\n", sequence));
        output.push_str("The sequence is a valid DNA sequence.\n\n");

        for report in reports {
            self.render_report(&mut output, sequence.as_str(), report);
        }
        output
    }

    fn render_report(&self, output: &mut String, sequence: &str, report: &MotifReport) {
        let motif = &report.motif;
        let name = match motif.label() {
            Some(label) => format!("'{}' ({})", motif, label),
            None => format!("'{}'", motif),
        };

        if report.exact.is_empty() {
            output.push_str(&format!("Motif {} not found in the sequence.\n", name));
        } else {
            output.push_str(&format!(
                "Motif {} found at positions {:?}.\n",
                name, report.exact
            ));
            for &pos in &report.exact {
                output.push_str(&format!(
                    "  exact match at {}: {}\n",
                    pos,
                    self.highlight(sequence, pos, motif.len(), Highlight::Exact)
                ));
            }
        }

        if report.near.is_empty() {
            output.push_str("No near matches found.\n\n");
            return;
        }

        let scores: Vec<String> = report
            .scores()
            .iter()
            .map(|(pos, score)| format!("{}: {:.2}", pos, score))
            .collect();
        output.push_str(&format!(
            "Near matches for {} (position: score): {{{}}}\n",
            name,
            scores.join(", ")
        ));
        for near in &report.near {
            let plural = if near.mismatches == 1 { "" } else { "es" };
            output.push_str(&format!(
                "  near match at {} ({} mismatch{}): {}\n",
                near.position,
                near.mismatches,
                plural,
                self.highlight(sequence, near.position, motif.len(), Highlight::Near)
            ));
        }
        output.push('\n');
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    sequence: &'a DnaSequence,
    length: usize,
    motifs: &'a [MotifReport],
}

/// Render the scan as pretty-printed JSON.
pub fn render_json(sequence: &DnaSequence, reports: &[MotifReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        sequence,
        length: sequence.len(),
        motifs: reports,
    })
}
