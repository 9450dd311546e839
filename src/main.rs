//! Fathom main entry point
//!
//! This is the command-line interface for the Fathom breadth-first crawler.

use anyhow::Context;
use clap::Parser;
use fathom::config::load_config_with_hash;
use fathom::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fathom: a breadth-first web crawler
///
/// Fathom crawls outward from a seed URL in strict FIFO order, storing each
/// page's title, visible text, and outbound links in a SQLite database,
/// until the configured page limit is reached or no URLs remain.
#[derive(Parser, Debug)]
#[command(name = "fathom")]
#[command(version)]
#[command(about = "A breadth-first web crawler", long_about = None)]
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
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics from the database and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_crawl(&config).await?;
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
            0 => EnvFilter::new("fathom=info,warn"),
            1 => EnvFilter::new("fathom=debug,info"),
            2 => EnvFilter::new("fathom=trace,debug"),
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
fn handle_dry_run(config: &fathom::config::Config) {
    println!("=== Fathom Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed URL: {}", config.crawler.seed_url);
    println!("  Page limit: {}", config.crawler.page_limit);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Database: {}", config.output.database_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl up to {} pages starting from {}",
        config.crawler.page_limit, config.crawler.seed_url
    );
}

/// Handles the --stats mode: shows statistics from the database
fn handle_stats(config: &fathom::config::Config) -> anyhow::Result<()> {
    use fathom::output::{load_statistics, print_statistics};
    use fathom::storage::SqliteStore;
    use std::path::Path;

    println!("Database: {}\n", config.output.database_path);

    let store = SqliteStore::new(Path::new(&config.output.database_path))?;
    let stats = load_statistics(&store)?;
    print_statistics(&stats);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &fathom::config::Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl from {} (page limit {})",
        config.crawler.seed_url,
        config.crawler.page_limit
    );

    let summary = crawl(config).await.context("crawl failed")?;

    tracing::info!(
        "Done: {} pages crawled, {} distinct URLs seen",
        summary.pages_crawled,
        summary.urls_seen
    );

    Ok(())
}
