//! Pagelens main entry point
//!
//! This is the command-line interface for the Pagelens single-page fact
//! extractor.

use anyhow::Context;
use clap::Parser;
use pagelens::config::{default_tags, normalize_tags, IdentityProfile, ScrapeOptions, TargetTag};
use pagelens::extract::extract_all;
use pagelens::fetch::fetch_document;
use pagelens::output::{print_report, write_json_report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagelens: a single-page fact extractor
///
/// Pagelens fetches one web page and extracts structured facts from it:
/// metadata, links, images, tables, classified text blocks, and email
/// addresses. One invocation performs exactly one request.
#[derive(Parser, Debug)]
#[command(name = "pagelens")]
#[command(version = "1.0.0")]
#[command(about = "Fetch one web page and extract structured facts", long_about = None)]
struct Cli {
    /// Target URL (scheme optional; https:// is assumed)
    #[arg(value_name = "URL")]
    url: String,

    /// Identity profile for the outbound request
    #[arg(short, long, value_enum, default_value_t = IdentityProfile::Desktop)]
    agent: IdentityProfile,

    /// Tags for text extraction; output is grouped in this order
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = default_tags()
    )]
    tags: Vec<TargetTag>,

    /// Write the full report as JSON to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let options = ScrapeOptions {
        url: cli.url,
        profile: cli.agent,
        tags: normalize_tags(&cli.tags),
    };

    tracing::info!("Scraping {} with the {} profile", options.url, options.profile);

    let document = fetch_document(&options)
        .await
        .with_context(|| format!("Failed to scrape {}", options.url))?;

    let report = extract_all(&document, &options.tags);

    if !cli.quiet {
        print_report(&report);
    }

    if let Some(path) = &cli.json {
        write_json_report(&report, path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!("Report written to {}", path.display());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagelens=info,warn"),
            1 => EnvFilter::new("pagelens=debug,info"),
            2 => EnvFilter::new("pagelens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
