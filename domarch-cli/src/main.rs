//! # Domarch CLI - Domain Architecture Summarizer
//!
//! A command-line interface for summarizing protein domain architectures
//! from hmmscan `--domtblout` output.
//!
//! ## Usage
//!
//! ```bash
//! # Proteins carrying both a PAS and a HisKA domain
//! domarch -i scan.domtblout -m PAS/HisKA -o report.tsv
//!
//! # With significance thresholds and a species label
//! domarch -i scan.domtblout -m PAS/HisKA --ie 1e-6 --pe 1e-4 -s YEAST
//!
//! # Extract linkers between the two domains into a FASTA file
//! domarch -i scan.domtblout -m PAS/HisKA -a proteins.fasta -l linkers.fasta
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: hmmscan --domtblout file (required)
//! - `-o, --output <FILE>`: Report output file (default: stdout)
//! - `-m, --models <A/B/..>`: Slash-separated required domain models (required)
//! - `-a, --alignment <FILE>`: FASTA file for linker extraction
//! - `-l, --linkers <FILE>`: Write extracted linkers as FASTA
//! - `--ie <F>`: Independent e-value threshold (default: no threshold)
//! - `--pe <F>`: Full-sequence e-value threshold (default: no threshold)
//! - `-s, --species <LABEL>`: Species label for the report (default: HUMAN)
//! - `--exclude <A/B/..>`: Slash-separated models to drop from the input
//! - `-q, --quiet`: Suppress progress messages

use clap::{Arg, ArgAction, Command};
use domarch_core::config::DomarchConfig;
use domarch_core::linker::AlignmentLookup;
use domarch_core::DomarchAnalyzer;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() {
    if let Err(error) = run() {
        eprintln!("domarch: error: {}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("domarch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Summarize protein domain architectures from hmmscan output")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("hmmscan --domtblout input file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Report output file (default: stdout)"),
        )
        .arg(
            Arg::new("models")
                .short('m')
                .long("models")
                .value_name("A/B/..")
                .required(true)
                .help("Slash-separated domain models that must all be present"),
        )
        .arg(
            Arg::new("alignment")
                .short('a')
                .long("alignment")
                .value_name("FILE")
                .help("FASTA file for linker extraction (two models only)"),
        )
        .arg(
            Arg::new("linkers")
                .short('l')
                .long("linkers")
                .value_name("FILE")
                .help("Write extracted linkers as FASTA to this file"),
        )
        .arg(
            Arg::new("ie-threshold")
                .long("ie")
                .value_name("F")
                .help("Independent e-value threshold (default: no threshold)"),
        )
        .arg(
            Arg::new("pe-threshold")
                .long("pe")
                .value_name("F")
                .help("Full-sequence e-value threshold (default: no threshold)"),
        )
        .arg(
            Arg::new("species")
                .short('s')
                .long("species")
                .value_name("LABEL")
                .default_value("HUMAN")
                .help("Species label copied into the report"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .value_name("A/B/..")
                .help("Slash-separated models to drop from the input"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress progress messages"),
        )
        .get_matches();

    let target_models = split_models(matches.get_one::<String>("models").unwrap());
    if target_models.is_empty() {
        return Err("at least one target model is required".into());
    }

    let config = DomarchConfig {
        target_models,
        i_e_value_threshold: parse_threshold(matches.get_one::<String>("ie-threshold"), "--ie")?,
        fs_e_value_threshold: parse_threshold(matches.get_one::<String>("pe-threshold"), "--pe")?,
        species: matches.get_one::<String>("species").unwrap().clone(),
        excluded_models: matches
            .get_one::<String>("exclude")
            .map(|s| split_models(s))
            .unwrap_or_default(),
        quiet: matches.get_flag("quiet"),
    };

    let alignment = match matches.get_one::<String>("alignment") {
        Some(path) => Some(AlignmentLookup::from_fasta_file(path)?),
        None => None,
    };

    let mut report: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    let mut linker_file = match matches.get_one::<String>("linkers") {
        Some(path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    let analyzer = DomarchAnalyzer::new(config);
    let input = matches.get_one::<String>("input").unwrap();
    let stats = analyzer.summarize_file(
        input,
        alignment.as_ref(),
        &mut report,
        linker_file.as_mut().map(|w| w as &mut dyn Write),
    )?;
    report.flush()?;
    if let Some(mut linkers) = linker_file {
        linkers.flush()?;
    }

    if !analyzer.config.quiet {
        eprintln!(
            "Summarized {} of {} proteins ({} linkers extracted).",
            stats.proteins_reported, stats.proteins_seen, stats.linkers_extracted
        );
    }

    Ok(())
}

/// Splits a slash-separated model list, dropping empty segments.
fn split_models(value: &str) -> Vec<String> {
    value
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses an optional e-value threshold, rejecting negative values.
fn parse_threshold(
    value: Option<&String>,
    flag: &str,
) -> Result<Option<f64>, Box<dyn std::error::Error>> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let threshold: f64 = raw
                .parse()
                .map_err(|_| format!("invalid {} value '{}'", flag, raw))?;
            if threshold < 0.0 {
                return Err(format!("{} threshold must not be negative", flag).into());
            }
            Ok(Some(threshold))
        }
    }
}
