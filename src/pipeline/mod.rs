//! Run orchestration: validate, link, recommend.
//!
//! The pipeline gates progression on the validators with a strict
//! first-failure-wins policy:
//!
//! 1. **Movie phase** - each catalog movie is validated (title, full id,
//!    every genre) in catalog order; a valid movie commits its id to the
//!    session. The first invalid movie halts the run.
//! 2. **User phase** - each user is validated (name, id), then linked
//!    against the catalog; the linker's completeness flag feeds the
//!    liked-movies check, and an incomplete link halts the run.
//! 3. **Recommendation phase** - only reached when both catalogs
//!    validated completely; the matcher runs once per user.
//!
//! A halted run surfaces the first [`ErrorLog`](crate::validate::ErrorLog)
//! message, which the report writer persists as the entire report.

use tracing::{debug, info};

use crate::models::{MovieRecord, UserRecord};
use crate::recommend;
use crate::resolver;
use crate::validate::{ValidationSession, user};

/// Result of one full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Every record validated; users now carry liked movies and
    /// recommendations.
    Completed,
    /// Validation halted the run; `first_error` is the report body.
    Halted {
        /// The first message the session logged.
        first_error: String,
    },
}

/// Validate both catalogs and link every user, without computing
/// recommendations.
///
/// This is the shared gate used by both the `validate` command and
/// [`run`]. On success every user's `liked_movies` is populated.
pub fn validate_catalogs(
    movies: &[MovieRecord],
    users: &mut [UserRecord],
    session: &mut ValidationSession,
) -> PipelineOutcome {
    for movie in movies {
        if !session.validate_movie(movie) {
            return halted(session);
        }
    }
    info!(count = movies.len(), "movie catalog validated");

    for user_record in users.iter_mut() {
        if !session.validate_user(user_record) {
            return halted(session);
        }
        let complete = resolver::link_liked_movies(user_record, movies);
        user::validate_has_liked_movies(complete, session.log_mut());
        if !complete {
            return halted(session);
        }
        debug!(user = %user_record.id, "user validated and linked");
    }
    info!(count = users.len(), "user catalog validated and linked");

    PipelineOutcome::Completed
}

/// Run the complete pipeline: validate, link, then recommend.
pub fn run(
    movies: &[MovieRecord],
    users: &mut [UserRecord],
    session: &mut ValidationSession,
) -> PipelineOutcome {
    match validate_catalogs(movies, users, session) {
        PipelineOutcome::Completed => {}
        halted => return halted,
    }

    for user_record in users.iter_mut() {
        recommend::recommend(user_record, movies);
    }
    info!(count = users.len(), "recommendations computed");

    PipelineOutcome::Completed
}

fn halted(session: &ValidationSession) -> PipelineOutcome {
    PipelineOutcome::Halted {
        first_error: session
            .log()
            .first()
            .unwrap_or("validation failed")
            .to_string(),
    }
}
