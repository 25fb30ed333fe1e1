//! Lexicrawl main entry point
//!
//! Command-line interface for the lexicrawl restricted-domain crawler and
//! its standalone word-frequency utility.

use anyhow::Context;
use clap::{Parser, Subcommand};
use lexicrawl::analysis::{sorted_frequencies, tokenize, word_frequencies};
use lexicrawl::config::load_config_with_hash;
use lexicrawl::crawler::run_crawl;
use lexicrawl::report::{print_report, write_markdown_summary, CrawlReport};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Lexicrawl: a restricted-domain crawler and lexical analytics collector
///
/// Lexicrawl crawls a configured set of allowed domains, accumulating word
/// frequencies, the longest page seen, and subdomain discovery statistics
/// across the session.
#[derive(Parser, Debug)]
#[command(name = "lexicrawl")]
#[command(version = "0.1.0")]
#[command(about = "A restricted-domain crawler and lexical analytics collector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the configured domains and report session statistics
    Crawl {
        /// Path to TOML configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Validate config and show what would be crawled without crawling
        #[arg(long)]
        dry_run: bool,
    },

    /// Tokenize a local text file and print word frequencies
    Wordfreq {
        /// Path to the text file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Crawl { config, dry_run } => handle_crawl(&config, dry_run).await,
        Command::Wordfreq { file } => handle_wordfreq(&file),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("lexicrawl=info,warn"),
            1 => EnvFilter::new("lexicrawl=debug,info"),
            2 => EnvFilter::new("lexicrawl=trace,debug"),
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

/// Handles the crawl subcommand
async fn handle_crawl(config_path: &Path, dry_run: bool) -> anyhow::Result<()> {
    tracing::info!("Loading configuration from: {}", config_path.display());
    let (config, config_hash) = load_config_with_hash(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if dry_run {
        print_dry_run(&config);
        return Ok(());
    }

    tracing::info!(
        "Allowed domains: {}, seeds: {}, max pages: {}",
        config.filter.allowed_domains.len(),
        config.crawler.seeds.len(),
        config.crawler.max_pages
    );

    let top_words = config.output.top_words;
    let summary_path = PathBuf::from(&config.output.summary_path);

    let session = run_crawl(config).await?;

    let report = CrawlReport::from_session(&session, top_words);
    print_report(&report);

    write_markdown_summary(&report, &summary_path)
        .with_context(|| format!("failed to write {}", summary_path.display()))?;
    println!("\nSummary written to: {}", summary_path.display());

    Ok(())
}

/// Handles the wordfreq subcommand: tokenize a file, print sorted counts
fn handle_wordfreq(file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let tokens = tokenize(&content);
    let frequencies = word_frequencies(&tokens);

    for (token, count) in sorted_frequencies(&frequencies) {
        println!("{} = {}", token, count);
    }

    Ok(())
}

/// Prints the dry-run overview: validated config and what would be crawled
fn print_dry_run(config: &lexicrawl::config::Config) {
    println!("=== Lexicrawl Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Max pages: {}", config.crawler.max_pages);
    println!(
        "  Request timeout: {}s",
        config.crawler.request_timeout_secs
    );

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nFilter Rules:");
    println!("  Allowed domains ({}):", config.filter.allowed_domains.len());
    for domain in &config.filter.allowed_domains {
        println!("    - {}", domain);
    }
    println!("  Path markers: {}", config.filter.path_markers.len());
    println!("  Query patterns: {}", config.filter.query_patterns.len());
    println!("  Max path segments: {}", config.filter.max_path_segments);
    println!(
        "  Denied extensions: {}",
        config.filter.denied_extensions.len()
    );

    println!("\nAnalysis:");
    println!("  Minimum word count: {}", config.analysis.min_word_count);
    println!("  Parent domain: {}", config.analysis.parent_domain);

    println!("\nOutput:");
    println!("  Summary: {}", config.output.summary_path);
    println!("  Top words: {}", config.output.top_words);

    println!("\nSeeds ({}):", config.crawler.seeds.len());
    for seed in &config.crawler.seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
}
