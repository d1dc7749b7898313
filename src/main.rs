//! Genre-Harvest main entry point
//!
//! This is the command-line interface for the two-stage genre link harvester.

use clap::Parser;
use genre_harvest::config::{load_config_with_hash, validate, Config};
use genre_harvest::output::print_statistics;
use genre_harvest::run_genre_crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Genre-Harvest: a two-stage catalog link harvester
///
/// Scrapes the catalog root page for genre pages, scrapes every genre page
/// for playlist links, and writes a JSON map from genre to links.
#[derive(Parser, Debug)]
#[command(name = "genre-harvest")]
#[command(version)]
#[command(about = "A two-stage catalog link harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write the JSON map here instead of the configured output path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if let Some(output) = &cli.output {
        config.output.path = output.to_string_lossy().into_owned();
        validate(&config)?;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("genre_harvest=info,warn"),
            1 => EnvFilter::new("genre_harvest=debug,info"),
            2 => EnvFilter::new("genre_harvest=trace,debug"),
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

/// Handles the --dry-run mode: shows the resolved crawl plan
fn handle_dry_run(config: &Config) {
    let site = &config.site;

    println!("=== Genre-Harvest Dry Run ===\n");

    println!("Stage 1 (category pages):");
    println!("  Root page: {}://{}/{}", site.scheme, site.domain, site.root_path);
    println!("  Link pattern: {}", site.category_pattern);

    println!("\nStage 2 (leaf links):");
    println!("  Link pattern: {}", site.leaf_pattern);
    println!("  Label delimiter: '{}'", site.label_delimiter);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s (connect {}s)", config.http.timeout_secs, config.http.connect_timeout_secs);

    println!("\nOutput: {}", config.output.path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    match run_genre_crawl(config).await {
        Ok(stats) => {
            tracing::info!("Harvest completed successfully");
            if !quiet {
                print_statistics(&stats);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
