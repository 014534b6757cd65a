//! Character-grammar checks for user catalog fields.
//!
//! Same shape as [`crate::validate::movie`]: boolean returns with the
//! [`ErrorLog`] as an explicit side channel. One asymmetry is preserved
//! from the original behavior: [`validate_id`] commits a successful id to
//! the uniqueness set itself, whereas movie ids are committed by the
//! session after the whole record validates.

use std::collections::HashSet;

use super::error_log::ErrorLog;

/// Exact required length of a user id.
pub const USER_ID_LEN: usize = 9;

/// Validate a user name.
///
/// Fails when the name is empty, starts with a space, or contains any
/// character that is neither an ASCII letter nor a space.
pub fn validate_name(name: &str, log: &mut ErrorLog) -> bool {
    if name.is_empty() || name.starts_with(' ') {
        return log.fail(format!("ERROR: User Name {name} is wrong"));
    }
    if name.chars().any(|c| !c.is_ascii_alphabetic() && c != ' ') {
        return log.fail(format!("ERROR: User Name {name} is wrong"));
    }
    true
}

/// Validate a user id and, on success, commit it to `seen_user_ids`.
///
/// Checks run in order: length must be exactly [`USER_ID_LEN`]; the first
/// character must be a digit; every character must be ASCII alphanumeric;
/// the last two characters must not both be letters; and finally the id
/// must not already be present in `seen_user_ids`. Only a fully successful
/// id is inserted.
pub fn validate_id(id: &str, seen_user_ids: &mut HashSet<String>, log: &mut ErrorLog) -> bool {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() != USER_ID_LEN {
        return log.fail(format!("ERROR: User Id {id} is wrong"));
    }
    if !chars[0].is_ascii_digit() {
        return log.fail(format!("ERROR: User Id {id} is wrong"));
    }
    if chars.iter().any(|c| !c.is_ascii_alphanumeric()) {
        return log.fail(format!("ERROR: User Id {id} is wrong"));
    }
    if chars[USER_ID_LEN - 1].is_ascii_alphabetic() && chars[USER_ID_LEN - 2].is_ascii_alphabetic()
    {
        return log.fail(format!("ERROR: User Id {id} is wrong"));
    }
    if seen_user_ids.contains(id) {
        return log.fail(format!("ERROR: User Id {id} is wrong"));
    }
    seen_user_ids.insert(id.to_string());
    true
}

/// Log an error when a user ended up with no resolvable liked movies.
///
/// Pure side effect, no return value - the caller passes the linker's
/// completeness flag and decides separately whether to halt.
pub fn validate_has_liked_movies(has_any: bool, log: &mut ErrorLog) {
    if !has_any {
        log.append("ERROR: User has No Liked Movies");
    }
}
