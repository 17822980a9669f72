//! milder - fuzzy filter for line-oriented input
//!
//! Usage:
//!     ls -R | milder amo
//!     milder --input files.txt --positions --limit 20 ctrl

mod input;
mod output;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use milder_core::fuzzy::{EngineConfig, Matcher};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use output::{Format, Printer};

#[derive(Parser, Debug)]
#[command(name = "milder")]
#[command(about = "Rank lines by fuzzy match against a query")]
#[command(version)]
struct Args {
    /// Query to match (case-insensitive, in-order subsequence)
    needle: String,

    /// Read candidates from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print at most this many matches
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Prefix each match with its score
    #[arg(short, long)]
    scores: bool,

    /// Bracket the matched bytes of each candidate
    #[arg(short, long)]
    positions: bool,

    /// Print one JSON object per match
    #[arg(long, conflicts_with_all = ["scores", "positions"])]
    json: bool,

    /// JSON file overriding scoring constants and size limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else {
            Format::Text {
                scores: self.scores,
                positions: self.positions,
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        "trace" => Level::TRACE,
        _ => Level::WARN,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => {
            info!("Loading engine config from {}", path.display());
            input::load_config(path)?
        }
        None => EngineConfig::default(),
    };
    let matcher = Matcher::with_config(config)?;

    let candidates = match &args.input {
        Some(path) => input::read_candidates(std::fs::File::open(path)?)?,
        None => input::read_candidates(io::stdin().lock())?,
    };
    debug!("Read {} candidates", candidates.len());

    let entries = match args.limit {
        Some(limit) => matcher.filter_sort_limit(&args.needle, &candidates, limit)?,
        None => matcher.filter_sort(&args.needle, &candidates)?,
    };
    info!("{} of {} candidates matched", entries.len(), candidates.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let printer = Printer::new(&matcher, args.needle.as_bytes(), args.format());
    for entry in &entries {
        printer.write_entry(&mut out, entry, &candidates[entry.index])?;
    }
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["milder", "amo"]).unwrap();
        assert_eq!(args.needle, "amo");
        assert!(args.input.is_none());
        assert!(args.limit.is_none());
        assert_eq!(args.log_level, "warn");
        assert_eq!(
            args.format(),
            Format::Text {
                scores: false,
                positions: false
            }
        );
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "milder", "-s", "-p", "-n", "5", "--input", "list.txt", "rb",
        ])
        .unwrap();
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.input, Some(PathBuf::from("list.txt")));
        assert_eq!(
            args.format(),
            Format::Text {
                scores: true,
                positions: true
            }
        );
    }

    #[test]
    fn test_json_conflicts_with_text_flags() {
        assert!(Args::try_parse_from(["milder", "--json", "--scores", "rb"]).is_err());
        let args = Args::try_parse_from(["milder", "--json", "rb"]).unwrap();
        assert_eq!(args.format(), Format::Json);
    }

    #[test]
    fn test_needle_required() {
        assert!(Args::try_parse_from(["milder"]).is_err());
    }
}
