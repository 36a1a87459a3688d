//! Tern-Dive main entry point
//!
//! Command-line interface for the Tern-Dive term-search crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tern_dive::config::{load_config, Config};
use tern_dive::crawler::crawl;
use tern_dive::output::print_summary;
use tracing_subscriber::EnvFilter;

/// Tern-Dive: a bounded same-origin term-search crawler
///
/// Tern-Dive crawls root-relative links from a seed URL, breadth-first and
/// strictly sequentially, and reports every page whose text contains the
/// configured term together with a short excerpt.
#[derive(Parser, Debug)]
#[command(name = "tern-dive")]
#[command(version)]
#[command(about = "A bounded same-origin term-search crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_crawl(config).await?;
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
            0 => EnvFilter::new("tern_dive=info,warn"),
            1 => EnvFilter::new("tern_dive=debug,info"),
            2 => EnvFilter::new("tern_dive=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Tern-Dive Dry Run ===\n");

    println!("Crawl:");
    println!("  Seed URL: {}", config.crawl.seed_url);
    println!("  Term: {}", config.crawl.term);
    println!("  Max pages: {}", config.crawl.max_pages);
    println!("  Max link depth: {}", config.crawl.max_link_depth);
    println!("  Context window: {}", config.crawl.context_window);
    println!("  Budget rule: {:?}", config.crawl.budget_rule);

    println!("\nFetch:");
    println!("  User agent: {}", config.fetch.user_agent);
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  Connect timeout: {}s", config.fetch.connect_timeout_secs);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    let summary = crawl(config).await.context("Crawl failed to start")?;
    print_summary(&summary);
    Ok(())
}
