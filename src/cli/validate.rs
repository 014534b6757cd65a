//! Validate the catalogs without writing a report.
//!
//! Runs the same gate as `reelrec run` - movie grammar, id uniqueness,
//! user grammar, liked-movie completeness - and prints a summary instead
//! of persisting anything. The text format shows ✓/✗ lines; `--format
//! json` emits a machine-readable summary for scripting.
//!
//! ```bash
//! reelrec validate
//! reelrec validate --format json
//! reelrec validate --movies films.txt --users people.txt
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::config::RunConfig;
use crate::core::ReelrecError;
use crate::pipeline::{self, PipelineOutcome};
use crate::validate::ValidationSession;

/// Output format for the validation summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable ✓/✗ lines.
    Text,
    /// Machine-readable JSON object.
    Json,
}

/// Command to validate both catalogs.
#[derive(Args)]
pub struct ValidateCommand {
    /// Movie catalog path (overrides the config value)
    #[arg(long)]
    movies: Option<PathBuf>,

    /// User catalog path (overrides the config value)
    #[arg(long)]
    users: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Serialized shape of `--format json` output.
#[derive(Debug, Serialize)]
struct ValidationSummary {
    valid: bool,
    movies: usize,
    users: usize,
    errors: Vec<String>,
}

impl ValidateCommand {
    pub fn execute(self, config_path: Option<&Path>) -> Result<()> {
        let config = RunConfig::load(config_path)?;
        let movies_path = self.movies.unwrap_or(config.catalogs.movies);
        let users_path = self.users.unwrap_or(config.catalogs.users);

        let movies = catalog::read_movies(&movies_path);
        let mut users = catalog::read_users(&users_path);

        let mut session = ValidationSession::new();
        let outcome = pipeline::validate_catalogs(&movies, &mut users, &mut session);

        let summary = ValidationSummary {
            valid: outcome == PipelineOutcome::Completed,
            movies: movies.len(),
            users: users.len(),
            errors: session.log().read().to_vec(),
        };

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            OutputFormat::Text => print_text_summary(&summary),
        }

        match outcome {
            PipelineOutcome::Completed => Ok(()),
            PipelineOutcome::Halted { first_error } => {
                Err(ReelrecError::ValidationHalted {
                    message: first_error,
                }
                .into())
            }
        }
    }
}

fn print_text_summary(summary: &ValidationSummary) {
    if summary.valid {
        println!("{} {} movies valid", "✓".green(), summary.movies);
        println!("{} {} users valid", "✓".green(), summary.users);
        println!("{}", "Valid".green().bold());
    } else {
        for error in &summary.errors {
            println!("{} {}", "✗".red(), error);
        }
        println!("{}", "Invalid".red().bold());
    }
}
