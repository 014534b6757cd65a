//! Behavioral properties of the validators, linker, and matcher.

use reelrec_cli::models::{MovieRecord, UserRecord};
use reelrec_cli::recommend::recommend;
use reelrec_cli::resolver::link_liked_movies;
use reelrec_cli::validate::movie::{check_unique_suffix, validate_id_full, validate_title};
use reelrec_cli::validate::ErrorLog;

fn movie(title: &str, id: &str, genres: &[&str]) -> MovieRecord {
    MovieRecord::new(title, id, genres.iter().map(ToString::to_string).collect())
}

#[test]
fn well_formed_titles_always_validate() {
    // letters/digits/spaces only, length >= 2, word-initial letters uppercase
    let titles = [
        "The Dark Knight",
        "Up",
        "Ocean 11",
        "2012",
        "Blade Runner 2049",
        "A B C",
    ];
    for title in titles {
        let mut log = ErrorLog::new();
        assert!(validate_title(title, &mut log), "{title} should be valid");
    }
}

#[test]
fn ids_shorter_than_four_never_validate() {
    for id in ["", "A", "A1", "A12", "123"] {
        let mut log = ErrorLog::new();
        assert!(!validate_id_full(id, &[], &mut log), "{id:?} should fail");
    }
}

#[test]
fn suffix_uniqueness_tolerates_first_holder_only() {
    let seen = vec!["TDK123".to_string()];
    let mut log = ErrorLog::new();
    assert!(!check_unique_suffix("ABC123", &seen, &mut log));

    let mut log = ErrorLog::new();
    assert!(check_unique_suffix("ABC456", &seen, &mut log));
}

#[test]
fn linking_an_empty_liked_list_is_a_no_op_for_any_catalog() {
    let catalogs = [
        vec![],
        vec![movie("Action Film", "MOV010", &["Action"])],
        vec![
            movie("Action Film", "MOV010", &["Action"]),
            movie("Other Film", "OTH020", &["Drama"]),
        ],
    ];
    for catalog in catalogs {
        let mut user = UserRecord::new("Jane", "1a2b3c4d5", vec![]);
        assert!(!link_liked_movies(&mut user, &catalog));
        assert!(user.liked_movies.is_empty());
    }
}

#[test]
fn liked_movie_outside_the_catalog_still_drives_recommendations() {
    // the liked movie itself need not be a catalog entry
    let catalog = vec![movie("Action Film", "MOV010", &["Action", "Thriller"])];
    let mut user = UserRecord::new("Alice", "1a2b3c4d5", vec![]);
    user.liked_movies = vec![movie("Action Movie", "MOV001", &["Action"])];

    recommend(&mut user, &catalog);
    assert_eq!(user.recommendations, ["Action Film"]);
}

#[test]
fn value_duplicate_catalog_entries_recommend_once_each() {
    let catalog = vec![
        movie("Action Film", "MOV010", &["Action"]),
        movie("Action Film", "MOV010", &["Action"]),
    ];
    let mut user = UserRecord::new("Alice", "1a2b3c4d5", vec![]);
    user.liked_movies = vec![movie("Liked Movie", "LIK001", &["Action"])];

    recommend(&mut user, &catalog);
    assert_eq!(user.recommendations, ["Action Film", "Action Film"]);
}

#[test]
fn recommendations_are_not_cleared_between_runs() {
    let catalog = vec![movie("Action Film", "MOV010", &["Action"])];
    let mut user = UserRecord::new("Alice", "1a2b3c4d5", vec![]);
    user.liked_movies = vec![movie("Liked Movie", "LIK001", &["Action"])];

    recommend(&mut user, &catalog);
    recommend(&mut user, &catalog);
    assert_eq!(user.recommendations, ["Action Film", "Action Film"]);
}
