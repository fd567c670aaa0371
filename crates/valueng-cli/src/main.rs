//! Value Engineering CLI
//!
//! Runs the material substitution pipeline over normalized project inputs.
//!
//! # Commands
//!
//! - `run`: match, enumerate, score, and optimize a project; print the
//!   per-strategy summary and optionally export JSON artifacts
//! - `strategies`: list the built-in weighting strategies

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

pub use error::exit_code_for_error;

/// Value engineering analysis over normalized project inputs.
#[derive(Parser)]
#[command(name = "valueng")]
#[command(version)]
#[command(about = "Select cost-reducing substitute building materials")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline over a project
    Run(commands::run::RunArgs),
    /// List the built-in weighting strategies
    Strategies,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).with_target(false).init();

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args).await,
        Commands::Strategies => commands::strategies::execute(),
    };

    if let Err(err) = result {
        tracing::error!("{err:#}");
        std::process::exit(exit_code_for_error(&err));
    }
}
