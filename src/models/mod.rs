//! Shared data model for catalogs and users.
//!
//! Two record types flow through the whole pipeline:
//!
//! - [`MovieRecord`] - one entry of the movie catalog. Built once during
//!   ingestion and never mutated afterwards. Movie identity everywhere in
//!   the engine (the linker's and matcher's "already linked / already
//!   liked" checks) is value equality over all three fields - there is no
//!   surrogate key.
//! - [`UserRecord`] - one entry of the user catalog plus the two derived
//!   vectors the pipeline fills in: the concrete liked movies resolved by
//!   [`crate::resolver`] and the recommendation titles produced by
//!   [`crate::recommend`].
//!
//! Post-validation invariants (enforced by [`crate::validate`], not by
//! construction): movie titles have length >= 2, movie ids length >= 4,
//! and every genre has length >= 2 and is alphabetic.

/// A single movie catalog entry.
///
/// Genres keep their catalog-file order; comparisons against them are
/// exact, case-sensitive string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    /// Display title, e.g. `The Dark Knight`.
    pub title: String,
    /// Catalog id: an uppercase-letter stem followed by a 3-digit suffix,
    /// e.g. `TDK123`.
    pub id: String,
    /// Ordered genre list.
    pub genres: Vec<String>,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, id: impl Into<String>, genres: Vec<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            genres,
        }
    }
}

/// A single user catalog entry together with its per-run derived state.
///
/// `liked_movie_ids` is fixed at construction (duplicates permitted, order
/// preserved). `liked_movies` and `recommendations` are owned exclusively
/// by this record and are populated exactly once per pipeline run; both
/// follow catalog iteration order, not `liked_movie_ids` order. Neither
/// the linker nor the matcher clears them - running either twice on the
/// same record appends a second batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Display name, letters and spaces only once validated.
    pub name: String,
    /// 9-character alphanumeric id starting with a digit.
    pub id: String,
    /// Liked movie ids exactly as listed in the user catalog file.
    pub liked_movie_ids: Vec<String>,
    /// Concrete movies resolved from `liked_movie_ids`, in catalog order.
    pub liked_movies: Vec<MovieRecord>,
    /// Recommended titles, grouped by liked movie then catalog order.
    pub recommendations: Vec<String>,
}

impl UserRecord {
    /// Build a user with empty derived state.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        liked_movie_ids: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            liked_movie_ids,
            liked_movies: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}
