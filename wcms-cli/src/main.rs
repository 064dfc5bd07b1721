//! wcms command line.
//!
//! Works against a single site content file (JSON):
//!
//!   wcms validate content.json
//!   wcms render content.json --out site/
//!   wcms search content.json "welcome"

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use wcms_cli::{render_site, search_site, SiteContent};

#[derive(Parser, Debug)]
#[command(name = "wcms")]
#[command(about = "Validate, render, and search wcms site content")]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every record in the content file against its declared constraints
    Validate {
        /// Path to the site content file
        content: PathBuf,
    },
    /// Render every page to an HTML file named after its slug
    Render {
        /// Path to the site content file
        content: PathBuf,
        /// Output directory
        #[arg(short, long, default_value = "site")]
        out: PathBuf,
    },
    /// Search the indexed pages and print matching titles
    Search {
        /// Path to the site content file
        content: PathBuf,
        /// The query text
        query: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Command::Validate { content } => {
            let site = SiteContent::load(&content)?;
            let violations = site.violations();
            if violations.is_empty() {
                info!("content file is valid");
                Ok(ExitCode::SUCCESS)
            } else {
                for violation in &violations {
                    eprintln!("{violation}");
                }
                eprintln!("{} invalid record(s)", violations.len());
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Render { content, out } => {
            let store = SiteContent::load(&content)?.into_store()?;
            let written = render_site(&store, &out)?;
            info!(written, out = %out.display(), "site rendered");
            Ok(ExitCode::SUCCESS)
        }
        Command::Search { content, query } => {
            let store = SiteContent::load(&content)?.into_store()?;
            let hits = search_site(&store, &query);
            if hits.is_empty() {
                println!("no pages match `{query}`");
            } else {
                for hit in hits {
                    println!("{} (matched: {})", hit.title, hit.matched_fields.join(", "));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
