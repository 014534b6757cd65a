//! Append-only diagnostic log shared by all validators.
//!
//! The [`ErrorLog`] is the single source of truth for "why did validation
//! fail". Every validator appends a message at the point of detection and
//! converts the failure into a plain `false` return - nothing is thrown
//! and nothing escapes a validator as a fault. The pipeline's
//! first-failure-wins policy reads [`ErrorLog::first`] to pick the one
//! message that becomes the whole report when a run halts.
//!
//! Order is preserved and duplicate messages are allowed; the log is
//! scoped to exactly one catalog-processing run (it lives inside
//! [`crate::validate::ValidationSession`]).

/// Ordered, append-only collection of validation diagnostics.
#[derive(Debug, Default, Clone)]
pub struct ErrorLog {
    entries: Vec<String>,
}

impl ErrorLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic message. Order preserved, duplicates allowed.
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    /// Append a failure message and return `false`.
    ///
    /// This is the boolean-returning replacement for the original
    /// raise-and-catch-locally control flow: validators write
    /// `return log.fail(...)` at the point of detection and the failure
    /// is fully accounted for - logged once, reported as `false`.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        self.append(message);
        false
    }

    /// Read-only snapshot of all entries, oldest first.
    #[must_use]
    pub fn read(&self) -> &[String] {
        &self.entries
    }

    /// The first recorded message, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// True when nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Empty the log.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
