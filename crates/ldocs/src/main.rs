//! ldocs CLI - Localized documentation toolkit.
//!
//! Provides commands for:
//! - `rewrite-titles`: Copy anchored H1 text into front matter titles
//! - `render`: Render one page and list its annotated headings
//! - `check`: Report unsupported heading marker usage
//! - `sync compare` / `sync pr`: Prepare the next upstream sync

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs, RewriteTitlesArgs, SyncCommand};
use output::Output;

/// ldocs - Localized documentation toolkit.
#[derive(Parser)]
#[command(name = "ldocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set front matter titles from anchored H1 headings.
    RewriteTitles(RewriteTitlesArgs),
    /// Render a Markdown page to HTML.
    Render(RenderArgs),
    /// Check heading markers across the content tree.
    Check(CheckArgs),
    /// Upstream sync helpers.
    #[command(subcommand)]
    Sync(SyncCommand),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::RewriteTitles(args) => args.verbose,
            Self::Check(args) => args.verbose,
            Self::Render(_) | Self::Sync(_) => false,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::RewriteTitles(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Sync(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
