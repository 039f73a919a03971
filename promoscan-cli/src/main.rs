use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{debug, error, info, warn};
use promoscan_core::Summarizable;
use promoscan_seq::{
    is_valid, read_sequence, scan, DnaSequence, Motif, ScanConfig, DEFAULT_MAX_MISMATCHES,
};

mod render;
use render::{render_json, ConsoleReporter};

/// Scan a DNA sequence for promoter motifs, exact and with substitutions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence file: raw bases, any case, may be wrapped across lines
    #[arg(default_value = "dna_sequence.txt")]
    input: PathBuf,

    /// Motif as SEQ or LABEL=SEQ; repeat for several (default: -35=TTGACA, -10=TATAAT)
    #[arg(short, long = "motif", value_parser = parse_motif)]
    motifs: Vec<Motif>,

    /// Maximum substitutions for a near-match
    #[arg(short = 'k', long, default_value_t = DEFAULT_MAX_MISMATCHES)]
    max_mismatches: usize,

    /// Mark matches with brackets instead of ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, PartialEq)]
enum Outcome {
    Report(String),
    InvalidSequence,
}

fn parse_motif(s: &str) -> Result<Motif, String> {
    let (label, bases) = match s.split_once('=') {
        Some((label, bases)) => (Some(label), bases),
        None => (None, s),
    };
    let bases = bases.trim().to_ascii_uppercase();
    let arg = match label {
        Some(label) => format!("{}={}", label, bases),
        None => bases,
    };
    arg.parse::<Motif>().map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build_config(args: &Args) -> promoscan_core::Result<ScanConfig> {
    let config = ScanConfig::new().with_max_mismatches(args.max_mismatches)?;
    if args.motifs.is_empty() {
        Ok(config)
    } else {
        config.with_motifs(args.motifs.clone())
    }
}

fn run(args: &Args) -> Result<Outcome, Box<dyn std::error::Error>> {
    let config = build_config(args)?;
    info!("reading sequence from {}", args.input.display());
    let text = read_sequence(&args.input)?;

    if text.is_empty() || !is_valid(text.as_bytes()) {
        warn!("{} does not hold a valid DNA sequence", args.input.display());
        return Ok(Outcome::InvalidSequence);
    }
    let sequence = DnaSequence::new(text)?;
    info!(
        "{}; scanning {} motif(s) with up to {} mismatch(es)",
        sequence.summary(),
        config.motifs().len(),
        config.max_mismatches()
    );

    let reports = scan(&sequence, &config)?;
    for report in &reports {
        debug!("{}", report.summary());
    }

    let output = if args.json {
        render_json(&sequence, &reports)?
    } else {
        ConsoleReporter::new(!args.no_color).render(&sequence, &reports)
    };
    Ok(Outcome::Report(output))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(Outcome::Report(output)) => {
            print!("{}", output);
            if args.json {
                println!();
            }
            ExitCode::SUCCESS
        }
        Ok(Outcome::InvalidSequence) => {
            println!("The sequence is not a valid DNA sequence.");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_for(file: &NamedTempFile, extra: &[&str]) -> Args {
        let path = file.path().to_str().unwrap();
        let mut argv = vec!["promoscan", path, "--no-color"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn write_tmp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn parse_motif_normalizes_case() {
        let motif = parse_motif("pribnow=tataat").unwrap();
        assert_eq!(motif.as_str(), "TATAAT");
        assert_eq!(motif.label(), Some("pribnow"));
        assert_eq!(parse_motif(" ttgaca ").unwrap().as_str(), "TTGACA");
        assert!(parse_motif("TTNACA").is_err());
    }

    #[test]
    fn defaults_to_promoter_boxes() {
        let args = Args::try_parse_from(["promoscan"]).unwrap();
        assert_eq!(args.input, PathBuf::from("dna_sequence.txt"));
        let config = build_config(&args).unwrap();
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn custom_motifs_and_bound() {
        let args =
            Args::try_parse_from(["promoscan", "seq.txt", "-m", "AAA", "-m", "x=CCC", "-k", "1"])
                .unwrap();
        let config = build_config(&args).unwrap();
        assert_eq!(config.motifs().len(), 2);
        assert_eq!(config.motifs()[1].label(), Some("x"));
        assert_eq!(config.max_mismatches(), 1);
    }

    #[test]
    fn zero_bound_rejected() {
        let args = Args::try_parse_from(["promoscan", "seq.txt", "-k", "0"]).unwrap();
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn run_reports_exact_and_near() {
        let file = write_tmp("ACGTTTGACAGG\ntataatccg\n");
        match run(&args_for(&file, &[])).unwrap() {
            Outcome::Report(text) => {
                assert!(text.contains("found at positions [5]"));
                assert!(text.contains("found at positions [13]"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn run_invalid_sequence() {
        let file = write_tmp("ACGTNXACGT");
        assert_eq!(run(&args_for(&file, &[])).unwrap(), Outcome::InvalidSequence);
    }

    #[test]
    fn run_empty_file_is_invalid() {
        let file = write_tmp("\n");
        assert_eq!(run(&args_for(&file, &[])).unwrap(), Outcome::InvalidSequence);
    }

    #[test]
    fn run_json() {
        let file = write_tmp("TTGAAAAGGCTCGAT");
        match run(&args_for(&file, &["--json"])).unwrap() {
            Outcome::Report(json) => {
                let value: serde_json::Value = serde_json::from_str(&json).unwrap();
                assert_eq!(value["motifs"][0]["near"][0]["mismatches"], 1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn run_missing_file() {
        let args = Args::try_parse_from(["promoscan", "/nonexistent/dna_sequence.txt"]).unwrap();
        assert!(run(&args).is_err());
    }
}
