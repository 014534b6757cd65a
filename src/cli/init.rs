//! Initialize a Reelrec project with a starter config file.
//!
//! Creates `reelrec.toml` in the target directory with the default catalog
//! and report paths filled in. Refuses to overwrite an existing config
//! unless `--force` is given.
//!
//! ```bash
//! reelrec init
//! reelrec init --path ./my-project
//! reelrec init --force
//! ```

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::config::{CONFIG_FILE, RunConfig};

/// Command to write a starter `reelrec.toml`.
#[derive(Args)]
pub struct InitCommand {
    /// Directory to create the config in (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing config file
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    pub fn execute(self) -> Result<()> {
        let target_dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let config_path = target_dir.join(CONFIG_FILE);

        if config_path.exists() && !self.force {
            return Err(anyhow!(
                "Config already exists at {}. Use --force to overwrite",
                config_path.display()
            ));
        }

        fs::create_dir_all(&target_dir)?;
        fs::write(&config_path, RunConfig::starter_toml())?;

        println!("{} Created {}", "✓".green(), config_path.display());
        println!();
        println!("Next steps:");
        println!("  1. Put your catalogs at movies.txt and users.txt (or edit the paths)");
        println!("  2. Run {} to check them", "reelrec validate".cyan());
        println!("  3. Run {} to write the report", "reelrec run".cyan());
        Ok(())
    }
}
