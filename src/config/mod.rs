//! Run configuration (`reelrec.toml`).
//!
//! The config file names the three paths a run touches:
//!
//! ```toml
//! [catalogs]
//! movies = "movies.txt"
//! users = "users.txt"
//!
//! [report]
//! path = "recommendations.txt"
//! ```
//!
//! Resolution order for every path: CLI flag, then config value, then the
//! built-in default shown above. A missing `reelrec.toml` in the working
//! directory is not an error - defaults apply - but a file named
//! explicitly with `--config` must exist, and a file that exists must
//! parse.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::ReelrecError;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "reelrec.toml";

/// Top-level run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Input catalog locations.
    #[serde(default)]
    pub catalogs: CatalogPaths,
    /// Report output location.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Paths of the two input catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPaths {
    /// Movie catalog file.
    #[serde(default = "default_movies_path")]
    pub movies: PathBuf,
    /// User catalog file.
    #[serde(default = "default_users_path")]
    pub users: PathBuf,
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report file path.
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

fn default_movies_path() -> PathBuf {
    PathBuf::from("movies.txt")
}

fn default_users_path() -> PathBuf {
    PathBuf::from("users.txt")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("recommendations.txt")
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self {
            movies: default_movies_path(),
            users: default_users_path(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            catalogs: CatalogPaths::default(),
            report: ReportConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load configuration.
    ///
    /// With `explicit` set, the file must exist and parse. Without it,
    /// `reelrec.toml` in the working directory is used when present,
    /// defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ReelrecError::ConfigNotFound {
                        file: path.display().to_string(),
                    }
                    .into());
                }
                path.to_path_buf()
            }
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let raw = fs::read_to_string(&path).map_err(ReelrecError::IoError)?;
        let config = toml::from_str(&raw).map_err(|e| ReelrecError::ConfigParseError {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// The starter config written by `reelrec init`.
    #[must_use]
    pub fn starter_toml() -> String {
        // toml::to_string on the default config would also work, but the
        // hand-written form keeps the comment header
        concat!(
            "# Reelrec run configuration\n",
            "\n",
            "[catalogs]\n",
            "movies = \"movies.txt\"\n",
            "users = \"users.txt\"\n",
            "\n",
            "[report]\n",
            "path = \"recommendations.txt\"\n",
        )
        .to_string()
    }
}
