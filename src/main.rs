//! StoryGraph Reader main entry point
//!
//! This is the command-line interface for the StoryGraph Reader client.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use storygraph_reader::config::{load_config_or_default, validate};
use storygraph_reader::output::render_outcome;
use storygraph_reader::{Outcome, StoryGraphClient};
use tracing_subscriber::EnvFilter;

/// StoryGraph Reader: an unofficial read-only StoryGraph client
///
/// Fetches book pages from The StoryGraph and prints what it finds as JSON.
#[derive(Parser, Debug)]
#[command(name = "storygraph")]
#[command(version)]
#[command(about = "Read book data from The StoryGraph", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a book's metadata, rating and content warnings
    Book {
        /// Book identifier from the book page URL
        id: String,
    },

    /// Show reading progress for a book you are currently reading
    Progress {
        /// Book identifier from the book page URL
        id: String,

        /// Session cookie as NAME=VALUE; overrides the configured cookies
        #[arg(long = "cookie", value_name = "NAME=VALUE", value_parser = parse_cookie)]
        cookies: Vec<(String, String)>,
    },

    /// Show a book's reader-submitted content warnings
    Warnings {
        /// Book identifier from the book page URL
        id: String,
    },

    /// Search for books
    Search {
        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_config_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load configuration{}",
            cli.config
                .as_ref()
                .map(|p| format!(" from {}", p.display()))
                .unwrap_or_default()
        )
    })?;
    tracing::debug!("Using site {}", config.site.base_url);

    let client = StoryGraphClient::new(&config).context("Failed to build HTTP client")?;

    let succeeded = match cli.command {
        Command::Book { id } => print_outcome(&client.book_info(&id).await)?,
        Command::Progress { id, cookies } => {
            let cookies: BTreeMap<String, String> = cookies.into_iter().collect();
            let mut check = config.clone();
            check.auth.cookies = cookies.clone();
            validate(&check).context("Invalid --cookie")?;

            print_outcome(&client.reading_progress(&id, &cookies).await)?
        }
        Command::Warnings { id } => print_outcome(&client.content_warnings(&id).await)?,
        Command::Search { query } => print_outcome(&client.search(&query.join(" ")).await)?,
    };

    if !succeeded {
        bail!("Request did not succeed");
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("storygraph_reader=warn,warn"),
            1 => EnvFilter::new("storygraph_reader=info,warn"),
            2 => EnvFilter::new("storygraph_reader=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints an outcome as JSON; returns whether it was a success
fn print_outcome<T: Serialize>(outcome: &Outcome<T>) -> anyhow::Result<bool> {
    println!("{}", render_outcome(outcome)?);
    Ok(outcome.is_ok())
}

/// Parses a `NAME=VALUE` cookie argument
fn parse_cookie(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", arg)),
    }
}
