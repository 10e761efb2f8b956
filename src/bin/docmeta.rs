//! CLI binary for docmeta.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `MetadataConfig` and prints the JSON record. On success the record goes
//! to stdout and the process exits 0; an unreadable file produces an error
//! on stderr and a non-zero exit.

use anyhow::{Context, Result};
use clap::Parser;
use docmeta::{generate_metadata_from_file, generate_metadata_to_file, MetadataConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "docmeta",
    version,
    about = "Extract structured metadata from documents (txt, docx, pdf)",
    long_about = "Extract structured metadata from documents.\n\n\
        Produces one JSON record per document: title, keywords, extractive\n\
        summary, section headings, named entities, language, author,\n\
        creation date, word count and reading time. Documents that fail to\n\
        extract still produce a complete, mostly-empty record."
)]
struct Cli {
    /// Document to analyze (.txt, .docx, .pdf)
    file: PathBuf,

    /// Maximum number of keywords in the record
    #[arg(long, default_value_t = 10, value_name = "N")]
    keywords: usize,

    /// Maximum number of sentences in the summary
    #[arg(long = "summary-sentences", default_value_t = 5, value_name = "N")]
    summary_sentences: usize,

    /// Write the JSON record to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "off"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = MetadataConfig::builder()
        .max_keywords(cli.keywords)
        .max_summary_sentences(cli.summary_sentences)
        .build()
        .context("invalid configuration")?;

    match &cli.output {
        Some(output) => {
            generate_metadata_to_file(&cli.file, output, &config)
                .with_context(|| format!("failed to process '{}'", cli.file.display()))?;
            eprintln!("wrote {}", output.display());
        }
        None => {
            let record = generate_metadata_from_file(&cli.file, &config)
                .with_context(|| format!("failed to process '{}'", cli.file.display()))?;
            println!(
                "{}",
                serde_json::to_string_pretty(&record).expect("record serializes")
            );
        }
    }

    Ok(())
}
