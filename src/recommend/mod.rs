//! Recommendation matcher: genre overlap between liked movies and the
//! catalog.
//!
//! For every liked movie `L` and every catalog movie `M` (both in their
//! stored order), `M`'s title is recommended when `L` and `M` share at
//! least one genre by exact, case-sensitive string equality. A catalog
//! movie that is value-equal to any entry of the user's liked list is
//! skipped outright - a movie the user already likes is never recommended
//! through this check. The equality is deliberately the full record value:
//! catalog entries that merely share an id or title with a liked movie
//! still participate.
//!
//! Multiplicity rules: at most one append per `(L, M)` pair (the first
//! matching genre pair terminates both genre loops), but no deduplication
//! across pairs - a title appears once per distinct liked movie it
//! overlaps with. Output is grouped by liked movie, catalog order within
//! each group.
//!
//! Worst case O(|liked| x |catalog| x |genres_L| x |genres_M|); the early
//! break makes the common case O(|liked| x |catalog|).

use tracing::debug;

use crate::models::{MovieRecord, UserRecord};

/// Append genre-overlap recommendations for `user` to
/// `user.recommendations`.
///
/// Does not clear previous contents: running twice on an unchanged user
/// appends a duplicate batch, so the pipeline invokes this exactly once
/// per run.
pub fn recommend(user: &mut UserRecord, catalog: &[MovieRecord]) {
    let liked = &user.liked_movies;
    let recommendations = &mut user.recommendations;

    for liked_movie in liked {
        for candidate in catalog {
            if liked.contains(candidate) {
                continue;
            }
            'pair: for liked_genre in &liked_movie.genres {
                for genre in &candidate.genres {
                    if liked_genre == genre {
                        recommendations.push(candidate.title.clone());
                        break 'pair;
                    }
                }
            }
        }
    }

    debug!(
        user = %user.id,
        liked = user.liked_movies.len(),
        recommended = user.recommendations.len(),
        "computed recommendations"
    );
}
