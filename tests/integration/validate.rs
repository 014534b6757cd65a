use predicates::prelude::*;

use crate::common::{TestProject, valid_movie_catalog, valid_user_catalog};

/// Clean catalogs validate with a ✓ summary and a zero exit code.
#[test]
fn validate_clean_catalogs() {
    let project = TestProject::new().unwrap();
    project.write_movies(valid_movie_catalog()).unwrap();
    project.write_users(valid_user_catalog()).unwrap();

    project
        .reelrec()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Valid"));
}

/// The first grammar violation is reported and the command exits nonzero.
#[test]
fn validate_reports_first_grammar_violation() {
    let project = TestProject::new().unwrap();
    project
        .write_movies("the dark knight,TDK123\nAction\n")
        .unwrap();
    project.write_users(valid_user_catalog()).unwrap();

    project
        .reelrec()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "ERROR: Movie Title the dark knight is wrong",
        ))
        .stdout(predicate::str::contains("Invalid"));
}

/// A duplicate id suffix across the catalog is a uniqueness failure.
#[test]
fn validate_rejects_duplicate_id_suffix() {
    let project = TestProject::new().unwrap();
    project
        .write_movies("First Film,AAA123\nAction\nSecond Film,BBB123\nDrama\n")
        .unwrap();
    project.write_users(valid_user_catalog()).unwrap();

    project
        .reelrec()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("aren't unique"));
}

/// JSON output carries the summary fields for scripting.
#[test]
fn validate_json_summary() {
    let project = TestProject::new().unwrap();
    project.write_movies(valid_movie_catalog()).unwrap();
    project.write_users(valid_user_catalog()).unwrap();

    let output = project
        .reelrec()
        .args(["validate", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["valid"], true);
    assert_eq!(summary["movies"], 3);
    assert_eq!(summary["users"], 2);
    assert!(summary["errors"].as_array().unwrap().is_empty());
}

/// JSON output lists the error messages when validation fails.
#[test]
fn validate_json_lists_errors() {
    let project = TestProject::new().unwrap();
    project.write_movies("Xy,BAD\nAction\n").unwrap();
    project.write_users(valid_user_catalog()).unwrap();

    let output = project
        .reelrec()
        .args(["validate", "--format", "json"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["valid"], false);
    assert_eq!(summary["errors"][0], "ERROR: Movie Id BAD is wrong");
}

/// Missing input files degrade to empty catalogs, which validate.
#[test]
fn validate_missing_files_is_vacuously_valid() {
    let project = TestProject::new().unwrap();

    project
        .reelrec()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 movies valid"));
}

/// Path flags override the config file.
#[test]
fn validate_honors_path_flags() {
    let project = TestProject::new().unwrap();
    project.write_file("films.txt", valid_movie_catalog()).unwrap();
    project.write_file("people.txt", valid_user_catalog()).unwrap();

    project
        .reelrec()
        .args(["validate", "--movies", "films.txt", "--users", "people.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 movies valid"));
}

/// An explicitly named config file must exist.
#[test]
fn validate_with_missing_explicit_config_fails() {
    let project = TestProject::new().unwrap();

    project
        .reelrec()
        .args(["validate", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
