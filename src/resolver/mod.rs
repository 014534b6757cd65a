//! Catalog linker: resolve a user's liked ids to concrete movie records.
//!
//! Linking walks the catalog in order and, for each candidate movie, the
//! user's entire liked-id list (duplicates included). Every id match
//! appends the candidate to the user's `liked_movies`, which therefore
//! ends up in catalog iteration order - not liked-id order - and can
//! contain the same movie several times when the liked list repeats an id.
//!
//! The returned completeness flag is a threshold, not an exact one-to-one
//! check: `matched >= liked_movie_ids.len()`. A catalog containing
//! duplicate-id movies can push the counter past the threshold even though
//! some distinct liked id was never matched. That inequality is documented
//! behavior; do not tighten it to equality.

use tracing::debug;

use crate::models::{MovieRecord, UserRecord};

/// Link `user.liked_movie_ids` against `catalog`, appending every match to
/// `user.liked_movies`.
///
/// Returns `false` immediately, with no mutation, when the liked-id list
/// is empty. Otherwise returns the completeness flag described in the
/// module docs. Does not clear `liked_movies` first - linking twice
/// appends a second batch.
pub fn link_liked_movies(user: &mut UserRecord, catalog: &[MovieRecord]) -> bool {
    if user.liked_movie_ids.is_empty() {
        return false;
    }

    let mut matched = 0usize;
    for movie in catalog {
        for liked_id in &user.liked_movie_ids {
            if *liked_id == movie.id {
                user.liked_movies.push(movie.clone());
                matched += 1;
            }
        }
    }

    let complete = matched >= user.liked_movie_ids.len();
    debug!(
        user = %user.id,
        matched,
        wanted = user.liked_movie_ids.len(),
        complete,
        "linked liked movies"
    );
    complete
}
