//! Flat-file catalog readers.
//!
//! Both catalogs use the same repeating 2-line record shape:
//!
//! ```text
//! Movie catalog            User catalog
//! ----------------------   ----------------------
//! The Dark Knight,TDK123   John Doe,1a2b3c4d5
//! Action,Drama             TDK123,INC456
//! ```
//!
//! Line 1 carries `title,id` (movies) or `name,id` (users); anything after
//! the second comma-separated field is ignored, and a missing id field
//! becomes the empty string for the validators to reject. Line 2 is a
//! comma-separated list; empty fragments are dropped, so an empty line
//! yields an empty list.
//!
//! Reading is deliberately forgiving: an unreadable or missing file
//! degrades to an empty catalog with a warning, never a process fault, and
//! a dangling record (final line with no list line after it) is dropped
//! the same way. All grammar enforcement belongs to the validators.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::models::{MovieRecord, UserRecord};

/// Read the movie catalog at `path`; unreadable files yield an empty
/// catalog.
pub fn read_movies(path: &Path) -> Vec<MovieRecord> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let movies = parse_movies(&content);
            debug!(path = %path.display(), count = movies.len(), "read movie catalog");
            movies
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "movie catalog unreadable, treating as empty");
            Vec::new()
        }
    }
}

/// Read the user catalog at `path`; unreadable files yield an empty
/// catalog.
pub fn read_users(path: &Path) -> Vec<UserRecord> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let users = parse_users(&content);
            debug!(path = %path.display(), count = users.len(), "read user catalog");
            users
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "user catalog unreadable, treating as empty");
            Vec::new()
        }
    }
}

/// Parse movie records out of raw catalog text.
pub fn parse_movies(content: &str) -> Vec<MovieRecord> {
    let mut movies = Vec::new();
    let mut lines = content.lines();
    while let Some(header) = lines.next() {
        let Some(genre_line) = lines.next() else {
            warn!(line = header, "dangling movie record without a genre line, dropping");
            break;
        };
        let (title, id) = split_header(header);
        movies.push(MovieRecord::new(title, id, split_list(genre_line)));
    }
    movies
}

/// Parse user records out of raw catalog text.
pub fn parse_users(content: &str) -> Vec<UserRecord> {
    let mut users = Vec::new();
    let mut lines = content.lines();
    while let Some(header) = lines.next() {
        let Some(liked_line) = lines.next() else {
            warn!(line = header, "dangling user record without a liked-id line, dropping");
            break;
        };
        let (name, id) = split_header(header);
        users.push(UserRecord::new(name, id, split_list(liked_line)));
    }
    users
}

/// Split `first,second[,ignored...]`; a missing second field becomes "".
fn split_header(line: &str) -> (String, String) {
    match line.split_once(',') {
        Some((first, rest)) => {
            let second = rest.split(',').next().unwrap_or("");
            (first.to_string(), second.to_string())
        }
        None => (line.to_string(), String::new()),
    }
}

/// Split a comma-separated list, dropping empty fragments.
fn split_list(line: &str) -> Vec<String> {
    line.split(',')
        .filter(|fragment| !fragment.is_empty())
        .map(ToString::to_string)
        .collect()
}
