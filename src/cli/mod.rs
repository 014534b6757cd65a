//! Command-line interface for Reelrec.
//!
//! Each command lives in its own module with its own argument struct and
//! execution logic:
//!
//! - `init` - write a starter `reelrec.toml` config file
//! - `validate` - ingest and validate the catalogs, report a ✓/✗ summary
//! - `run` - full pipeline: validate, link, recommend, write the report
//!
//! # Global options
//!
//! All commands support:
//! - `--verbose` - debug-level logging
//! - `--quiet` - errors only
//! - `--config` - path to an alternate config file
//!
//! ```bash
//! reelrec init
//! reelrec validate --format json
//! reelrec --verbose run --output out/recommendations.txt
//! ```

mod init;
mod run;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration derived from the global CLI flags.
///
/// Kept separate from the parsed arguments so tests and programmatic
/// callers can inject their own log level without re-parsing argv.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default log level when `RUST_LOG` is not set.
    ///
    /// `None` silences everything below error level.
    pub log_level: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the tracing filter: `RUST_LOG` wins, the flag-derived level
    /// is the fallback.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let fallback = self.log_level.as_deref().unwrap_or("error");
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}

/// Main CLI application structure for Reelrec.
#[derive(Parser)]
#[command(
    name = "reelrec",
    about = "Reelrec - genre-overlap movie recommendations from flat-file catalogs",
    version,
    long_about = "Reelrec ingests a movie catalog and a user catalog, validates every \
record, links each user's liked movies, and writes a genre-overlap recommendation report."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to an alternate config file (defaults to ./reelrec.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Write a starter reelrec.toml config file.
    Init(init::InitCommand),

    /// Validate the movie and user catalogs without writing a report.
    Validate(validate::ValidateCommand),

    /// Run the full pipeline and write the recommendation report.
    Run(run::RunCommand),
}

impl Cli {
    /// Derive the runtime configuration from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig { log_level }
    }

    /// Execute the parsed command.
    pub fn execute(self) -> Result<()> {
        let config_path = self.config;
        match self.command {
            Commands::Init(cmd) => cmd.execute(),
            Commands::Validate(cmd) => cmd.execute(config_path.as_deref()),
            Commands::Run(cmd) => cmd.execute(config_path.as_deref()),
        }
    }
}
