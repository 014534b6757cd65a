//! Character-grammar checks for movie catalog fields.
//!
//! All checks are left-to-right character scans over ASCII classes; the
//! first violation found logs one message to the [`ErrorLog`] and returns
//! `false`. The uniqueness set of previously accepted ids is owned by the
//! enclosing [`crate::validate::ValidationSession`] and passed in by
//! parameter - [`check_unique_suffix`] never inserts into it; the caller
//! commits an id only after the whole record validates.
//!
//! # Grammar summary
//!
//! | Field | Rule |
//! |-------|------|
//! | title | length >= 2; letters, digits, spaces only; word-initial letters uppercase |
//! | id    | length >= 4; uppercase-letter stem; trailing 3 digits, suffix unique per run |
//! | genre | length >= 2; letters only |

use super::error_log::ErrorLog;

/// Minimum accepted title length.
pub const MIN_TITLE_LEN: usize = 2;
/// Minimum accepted id length (stem plus 3-digit suffix).
pub const MIN_ID_LEN: usize = 4;
/// Minimum accepted genre length.
pub const MIN_GENRE_LEN: usize = 2;
/// Length of the digit suffix that carries id uniqueness.
pub const SUFFIX_LEN: usize = 3;

/// Validate a movie title.
///
/// Scans characters left to right: a length below [`MIN_TITLE_LEN`] fails
/// immediately; any character that is not an ASCII letter, digit or space
/// fails; a letter at index 0 or immediately following a space must be
/// uppercase. Digits and spaces never fail regardless of position, and a
/// letter in any other position carries no case constraint.
pub fn validate_title(title: &str, log: &mut ErrorLog) -> bool {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() < MIN_TITLE_LEN {
        return log.fail(format!("ERROR: Movie Title {title} is wrong"));
    }
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_digit() || c == ' ' {
            continue;
        }
        if c.is_ascii_alphabetic() {
            let word_initial = i == 0 || chars[i - 1] == ' ';
            if word_initial && !c.is_ascii_uppercase() {
                return log.fail(format!("ERROR: Movie Title {title} is wrong"));
            }
        } else {
            return log.fail(format!("ERROR: Movie Title {title} is wrong"));
        }
    }
    true
}

/// Validate the letter stem of a movie id.
///
/// Every character except the last [`SUFFIX_LEN`] must be an uppercase
/// ASCII letter. Ids shorter than the suffix have an empty stem and pass
/// vacuously; [`validate_id_full`] guards the overall length.
pub fn validate_id_letters(id: &str, log: &mut ErrorLog) -> bool {
    let chars: Vec<char> = id.chars().collect();
    let stem = chars.len().saturating_sub(SUFFIX_LEN);
    for &c in &chars[..stem] {
        if !c.is_ascii_uppercase() {
            return log.fail(format!("ERROR: Movie Id letters {id} are wrong"));
        }
    }
    true
}

/// Check the 3-digit suffix and its uniqueness across the run.
///
/// The last [`SUFFIX_LEN`] characters must all be digits. The id under
/// validation then occupies its suffix once, and every entry of `seen_ids`
/// whose trailing 3 characters match adds another occupant; more than one
/// occupant fails. Run-level effect: the first id holding a suffix is
/// accepted, any later id sharing it is rejected.
///
/// Does not insert `id` into `seen_ids` - committing is the caller's
/// decision, taken only after the whole record validates.
pub fn check_unique_suffix(id: &str, seen_ids: &[String], log: &mut ErrorLog) -> bool {
    let Some(suffix) = trailing_suffix(id) else {
        return log.fail(format!("ERROR: Movie Id numbers {id} are wrong"));
    };
    if suffix.chars().any(|c| !c.is_ascii_digit()) {
        return log.fail(format!("ERROR: Movie Id numbers {id} are wrong"));
    }
    let mut occupants = 1usize;
    for seen in seen_ids {
        if trailing_suffix(seen) == Some(suffix) {
            occupants += 1;
        }
    }
    if occupants > 1 {
        return log.fail(format!("ERROR: Movie Id numbers {id} aren't unique"));
    }
    true
}

/// Validate a complete movie id.
///
/// A length below [`MIN_ID_LEN`] fails immediately; otherwise both
/// [`validate_id_letters`] and [`check_unique_suffix`] must pass, checked
/// in that order.
pub fn validate_id_full(id: &str, seen_ids: &[String], log: &mut ErrorLog) -> bool {
    if id.chars().count() < MIN_ID_LEN {
        return log.fail(format!("ERROR: Movie Id {id} is wrong"));
    }
    validate_id_letters(id, log) && check_unique_suffix(id, seen_ids, log)
}

/// Validate a single genre: length >= 2 and ASCII letters only.
pub fn validate_genre(genre: &str, log: &mut ErrorLog) -> bool {
    if genre.chars().count() < MIN_GENRE_LEN {
        return log.fail(format!("ERROR: Movie Genre {genre} is wrong"));
    }
    if genre.chars().any(|c| !c.is_ascii_alphabetic()) {
        return log.fail(format!("ERROR: Movie Genre {genre} is wrong"));
    }
    true
}

/// The last [`SUFFIX_LEN`] characters of `s`, or `None` when `s` is shorter.
fn trailing_suffix(s: &str) -> Option<&str> {
    let (idx, _) = s.char_indices().rev().nth(SUFFIX_LEN - 1)?;
    Some(&s[idx..])
}
