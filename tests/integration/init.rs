use predicates::prelude::*;

use crate::common::TestProject;

/// `init` writes a starter config that the other commands can load.
#[test]
fn init_creates_starter_config() {
    let project = TestProject::new().unwrap();

    project
        .reelrec()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let config = project.read_file("reelrec.toml").unwrap();
    assert!(config.contains("[catalogs]"));
    assert!(config.contains("movies = \"movies.txt\""));
    assert!(config.contains("[report]"));
}

/// A second `init` refuses to clobber the config without --force.
#[test]
fn init_refuses_to_overwrite_without_force() {
    let project = TestProject::new().unwrap();

    project.reelrec().arg("init").assert().success();
    project
        .reelrec()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

/// `init --force` overwrites a hand-edited config.
#[test]
fn init_force_overwrites() {
    let project = TestProject::new().unwrap();
    project.write_config("# edited by hand\n").unwrap();

    project.reelrec().args(["init", "--force"]).assert().success();

    let config = project.read_file("reelrec.toml").unwrap();
    assert!(config.contains("[catalogs]"));
}
