//! Validation rule engine: per-run session, field validators, error log.
//!
//! Validation state is deliberately explicit. A [`ValidationSession`] is
//! created once per catalog-processing run and owns the three pieces of
//! run-scoped mutable state:
//!
//! - the [`ErrorLog`] every validator appends to,
//! - the set of accepted movie ids (suffix uniqueness is defined across
//!   the whole run, so the set must outlive individual records), and
//! - the set of accepted user ids.
//!
//! The field validators in [`movie`] and [`user`] are free functions that
//! receive this state by parameter - there are no process-wide singletons
//! and no hidden sinks. Record-level drivers ([`ValidationSession::validate_movie`],
//! [`ValidationSession::validate_user`]) wire the field checks together in
//! the order the pipeline gates on.

pub mod error_log;
pub mod movie;
pub mod user;

use std::collections::HashSet;

pub use error_log::ErrorLog;

use crate::models::{MovieRecord, UserRecord};

/// Run-scoped validation state: error log plus both uniqueness sets.
///
/// Create one per run, never per record.
#[derive(Debug, Default)]
pub struct ValidationSession {
    log: ErrorLog,
    seen_movie_ids: Vec<String>,
    seen_user_ids: HashSet<String>,
}

impl ValidationSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The diagnostic log accumulated so far.
    #[must_use]
    pub fn log(&self) -> &ErrorLog {
        &self.log
    }

    /// Mutable access for checks that log outside the record drivers
    /// (the pipeline's completeness check).
    pub fn log_mut(&mut self) -> &mut ErrorLog {
        &mut self.log
    }

    /// Movie ids accepted so far this run, in acceptance order.
    #[must_use]
    pub fn seen_movie_ids(&self) -> &[String] {
        &self.seen_movie_ids
    }

    /// Validate one movie record: title, full id, then every genre.
    ///
    /// The id is committed to the uniqueness set only when the whole
    /// record passes, so a movie rejected for a bad genre does not
    /// reserve its id suffix.
    pub fn validate_movie(&mut self, movie: &MovieRecord) -> bool {
        if !movie::validate_title(&movie.title, &mut self.log) {
            return false;
        }
        if !movie::validate_id_full(&movie.id, &self.seen_movie_ids, &mut self.log) {
            return false;
        }
        for genre in &movie.genres {
            if !movie::validate_genre(genre, &mut self.log) {
                return false;
            }
        }
        self.seen_movie_ids.push(movie.id.clone());
        true
    }

    /// Validate one user record: name then id.
    ///
    /// The liked-movie completeness check is not part of this driver; it
    /// runs in the pipeline after linking, fed by the linker's flag.
    pub fn validate_user(&mut self, user: &UserRecord) -> bool {
        if !user::validate_name(&user.name, &mut self.log) {
            return false;
        }
        user::validate_id(&user.id, &mut self.seen_user_ids, &mut self.log)
    }
}
