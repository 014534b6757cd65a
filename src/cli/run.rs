//! Run the full pipeline and write the recommendation report.
//!
//! Always writes the report file: the per-user success shape when the run
//! completes, or the single first error message when validation halts the
//! run - in which case the command also exits nonzero so scripts can tell
//! the two shapes apart without parsing the file.
//!
//! ```bash
//! reelrec run
//! reelrec run --movies films.txt --users people.txt --output out.txt
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::config::RunConfig;
use crate::core::ReelrecError;
use crate::pipeline::{self, PipelineOutcome};
use crate::report;
use crate::validate::ValidationSession;

/// Command to execute the complete recommendation pipeline.
#[derive(Args)]
pub struct RunCommand {
    /// Movie catalog path (overrides the config value)
    #[arg(long)]
    movies: Option<PathBuf>,

    /// User catalog path (overrides the config value)
    #[arg(long)]
    users: Option<PathBuf>,

    /// Report output path (overrides the config value)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RunCommand {
    pub fn execute(self, config_path: Option<&Path>) -> Result<()> {
        let config = RunConfig::load(config_path)?;
        let movies_path = self.movies.unwrap_or(config.catalogs.movies);
        let users_path = self.users.unwrap_or(config.catalogs.users);
        let output_path = self.output.unwrap_or(config.report.path);

        let movies = catalog::read_movies(&movies_path);
        let mut users = catalog::read_users(&users_path);

        let mut session = ValidationSession::new();
        match pipeline::run(&movies, &mut users, &mut session) {
            PipelineOutcome::Completed => {
                report::write(&output_path, &report::render(&users))
                    .with_context(|| format!("writing report to {}", output_path.display()))?;
                println!(
                    "{} Recommendations for {} user(s) written to {}",
                    "✓".green(),
                    users.len(),
                    output_path.display()
                );
                Ok(())
            }
            PipelineOutcome::Halted { first_error } => {
                report::write(&output_path, &report::render_failure(&first_error))
                    .with_context(|| format!("writing report to {}", output_path.display()))?;
                println!("{} {}", "✗".red(), first_error);
                Err(ReelrecError::ValidationHalted {
                    message: first_error,
                }
                .into())
            }
        }
    }
}
