//! Report assembly and persistence.
//!
//! The report is the run's only output artifact and has two shapes:
//!
//! - **Success**: two lines per user - `<name>, <id>` followed by the
//!   comma-space joined recommendation titles (an empty line when there
//!   are none, never a trailing separator).
//! - **Failure**: the single first validation error message, nothing else.
//!
//! Writes go through a temp-file-and-rename so a crashed run never leaves
//! a half-written report behind.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::UserRecord;

/// Render the success-shape report for all users.
pub fn render(users: &[UserRecord]) -> String {
    let mut content = String::new();
    for user in users {
        content.push_str(&user.name);
        content.push_str(", ");
        content.push_str(&user.id);
        content.push('\n');
        content.push_str(&user.recommendations.join(", "));
        content.push('\n');
    }
    content
}

/// Render the failure-shape report: the first error message alone.
pub fn render_failure(message: &str) -> String {
    format!("{message}\n")
}

/// Write `content` to `path` atomically, creating parent directories as
/// needed.
pub fn write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Cannot create report directory: {}", parent.display())
            })?;
        }
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)
        .with_context(|| format!("Cannot write report temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Cannot move report into place: {}", path.display()))?;
    Ok(())
}
