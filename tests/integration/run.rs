use predicates::prelude::*;

use crate::common::{TestProject, valid_movie_catalog, valid_user_catalog};

/// A clean run writes the two-line-per-user report.
#[test]
fn run_writes_per_user_report() {
    let project = TestProject::new().unwrap();
    project.write_movies(valid_movie_catalog()).unwrap();
    project.write_users(valid_user_catalog()).unwrap();

    project
        .reelrec()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("written to"));

    let report = project.read_report().unwrap();
    assert_eq!(
        report,
        "John Doe, 1a2b3c4d5\nInception\nJane Roe, 2b3c4d5e6\nThe Dark Knight\n"
    );
}

/// A user with no genre overlap still gets their header line plus an
/// empty recommendations line.
#[test]
fn run_reports_empty_line_for_no_recommendations() {
    let project = TestProject::new().unwrap();
    project
        .write_movies("Lone Film,LON123\nWestern\n")
        .unwrap();
    project.write_users("John Doe,1a2b3c4d5\nLON123\n").unwrap();

    project.reelrec().arg("run").assert().success();

    assert_eq!(project.read_report().unwrap(), "John Doe, 1a2b3c4d5\n\n");
}

/// A halted run writes only the first error message and exits nonzero.
#[test]
fn run_halted_report_contains_only_first_error() {
    let project = TestProject::new().unwrap();
    project
        .write_movies("bad title,BAD123\nAction\nGood Title,GOO456\nAction\n")
        .unwrap();
    project.write_users(valid_user_catalog()).unwrap();

    project
        .reelrec()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation failed"));

    assert_eq!(
        project.read_report().unwrap(),
        "ERROR: Movie Title bad title is wrong\n"
    );
}

/// An unresolvable liked id surfaces the completeness error.
#[test]
fn run_halts_on_unresolvable_liked_list() {
    let project = TestProject::new().unwrap();
    project.write_movies(valid_movie_catalog()).unwrap();
    project
        .write_users("John Doe,1a2b3c4d5\nGONE999\n")
        .unwrap();

    project.reelrec().arg("run").assert().failure();

    assert_eq!(
        project.read_report().unwrap(),
        "ERROR: User has No Liked Movies\n"
    );
}

/// Missing catalogs degrade to empty input; the run succeeds with an
/// empty report body.
#[test]
fn run_with_missing_catalogs_writes_empty_report() {
    let project = TestProject::new().unwrap();

    project.reelrec().arg("run").assert().success();

    assert_eq!(project.read_report().unwrap(), "");
}

/// The --output flag redirects the report.
#[test]
fn run_honors_output_flag() {
    let project = TestProject::new().unwrap();
    project.write_movies(valid_movie_catalog()).unwrap();
    project.write_users(valid_user_catalog()).unwrap();

    project
        .reelrec()
        .args(["run", "--output", "out/report.txt"])
        .assert()
        .success();

    let report = project.read_file("out/report.txt").unwrap();
    assert!(report.starts_with("John Doe, 1a2b3c4d5\n"));
}

/// Paths can come from a config file instead of flags.
#[test]
fn run_reads_paths_from_config() {
    let project = TestProject::new().unwrap();
    project.write_file("films.txt", valid_movie_catalog()).unwrap();
    project.write_file("people.txt", valid_user_catalog()).unwrap();
    project
        .write_config(
            "[catalogs]\nmovies = \"films.txt\"\nusers = \"people.txt\"\n\n[report]\npath = \"out.txt\"\n",
        )
        .unwrap();

    project.reelrec().arg("run").assert().success();

    assert!(project.read_file("out.txt").unwrap().contains("John Doe"));
}

/// Rerunning replaces the previous report rather than appending to it.
#[test]
fn rerun_replaces_the_report() {
    let project = TestProject::new().unwrap();
    project.write_movies(valid_movie_catalog()).unwrap();
    project.write_users(valid_user_catalog()).unwrap();

    project.reelrec().arg("run").assert().success();
    let first = project.read_report().unwrap();
    project.reelrec().arg("run").assert().success();
    assert_eq!(project.read_report().unwrap(), first);
}
