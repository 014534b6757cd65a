//! Error handling for Reelrec.
//!
//! Two layers cooperate here:
//!
//! 1. [`ReelrecError`] - strongly-typed failures for the orchestration and
//!    I/O boundary (config, report writing, a halted run).
//! 2. [`ErrorContext`] - a presentation wrapper that adds a user-facing
//!    suggestion and details, rendered with terminal colors by the CLI
//!    entry point via [`user_friendly_error`].
//!
//! Field-level validation failures deliberately do NOT flow through this
//! module: the validators convert every failure into a boolean plus an
//! [`ErrorLog`](crate::validate::ErrorLog) entry at the point of
//! detection, and nothing escapes them as a fault. The conceptual
//! taxonomy maps onto the log's message classes - grammar violations
//! ("... is wrong"), uniqueness violations ("... aren't unique",
//! duplicate user ids), and completeness violations ("No Liked Movies") -
//! while a run that halts on any of them surfaces as a single
//! [`ReelrecError::ValidationHalted`] carrying the first message.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for Reelrec operations.
#[derive(Error, Debug)]
pub enum ReelrecError {
    /// Validation halted the run; the report carries the first message.
    #[error("validation failed: {message}")]
    ValidationHalted {
        /// First message from the run's error log.
        message: String,
    },

    /// Config file exists but cannot be parsed.
    #[error("Invalid config file syntax in {file}")]
    ConfigParseError {
        /// Path of the config file that failed to parse.
        file: String,
        /// Specific reason for the parsing failure.
        reason: String,
    },

    /// Config file was named explicitly but does not exist.
    #[error("Config file not found: {file}")]
    ConfigNotFound {
        /// The path that was requested.
        file: String,
    },

    /// The report could not be written.
    #[error("Cannot write report: {path}")]
    ReportWriteError {
        /// Target report path.
        path: String,
        /// Underlying reason.
        reason: String,
    },

    /// Standard I/O error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error with a message.
    #[error("{message}")]
    Other {
        /// Description of the error.
        message: String,
    },
}

/// User-facing wrapper around a [`ReelrecError`].
///
/// Adds an optional actionable suggestion and extra details. Displayed as
/// colored `error:` / `details:` / `suggestion:` lines on stderr.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error.
    pub error: ReelrecError,
    /// Optional suggestion for resolving the error.
    pub suggestion: Option<String>,
    /// Optional additional details about the error.
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: ReelrecError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, shown in green.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add explanatory details, shown in yellow.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a contextual
/// suggestion.
///
/// Recognized error types get targeted guidance; everything else falls
/// back to a generic context.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(reelrec_error) = error.downcast_ref::<ReelrecError>() {
        return match reelrec_error {
            ReelrecError::ValidationHalted { message } => {
                ErrorContext::new(ReelrecError::ValidationHalted {
                    message: message.clone(),
                })
                .with_details("The report file contains only this first error")
                .with_suggestion(
                    "Fix the catalog record named in the message and run again",
                )
            }
            ReelrecError::ConfigParseError { file, reason } => {
                ErrorContext::new(ReelrecError::ConfigParseError {
                    file: file.clone(),
                    reason: reason.clone(),
                })
                .with_details(reason.clone())
                .with_suggestion("Check the TOML syntax in your reelrec.toml file")
            }
            ReelrecError::ConfigNotFound { file } => {
                ErrorContext::new(ReelrecError::ConfigNotFound { file: file.clone() })
                    .with_suggestion("Run 'reelrec init' to create a starter config file")
            }
            ReelrecError::ReportWriteError { path, reason } => {
                ErrorContext::new(ReelrecError::ReportWriteError {
                    path: path.clone(),
                    reason: reason.clone(),
                })
                .with_suggestion("Check permissions and free space for the report directory")
            }
            ReelrecError::IoError(io_error) => {
                let kind = io_error.kind();
                ErrorContext::new(ReelrecError::Other {
                    message: io_error.to_string(),
                })
                .with_suggestion(match kind {
                    std::io::ErrorKind::NotFound => {
                        "Check that the file or directory exists and the path is correct"
                    }
                    std::io::ErrorKind::PermissionDenied => {
                        "Check file ownership or run with sufficient permissions"
                    }
                    _ => "Re-run with --verbose for more detail",
                })
            }
            ReelrecError::Other { message } => ErrorContext::new(ReelrecError::Other {
                message: message.clone(),
            }),
        };
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(ReelrecError::ConfigParseError {
            file: crate::config::CONFIG_FILE.to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your reelrec.toml file");
    }

    ErrorContext::new(ReelrecError::Other {
        message: format!("{error:#}"),
    })
}
