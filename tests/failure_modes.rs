mod common;

use assert_fs::TempDir;
use common::command::run_gtg_command;
use common::repo::{FixtureRepo, forked_fixture};
use predicates::prelude::predicate;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn fails_outside_any_repository() {
    let dir = TempDir::new().expect("failed to create temp dir");

    run_gtg_command(dir.path(), &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found git repository"));
}

#[test]
fn fails_when_the_repository_has_no_branches() {
    let repo = FixtureRepo::new();

    run_gtg_command(repo.path(), &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no branch found"));
}

#[test]
fn fails_when_only_unknown_branches_are_selected() {
    let fixture = forked_fixture();

    run_gtg_command(fixture.repo.path(), &["-b", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no branch found"));
}

#[test]
fn unreadable_ancestry_aborts_the_run() {
    let repo = FixtureRepo::new();
    let a = repo.commit(None, "first", 1_000);
    let b = repo.commit(Some(&a), "second", 2_000);
    repo.branch("master", &b);
    repo.corrupt_object(&a);

    run_gtg_command(repo.path(), &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read ancestry"));
}

#[test]
fn missing_parent_object_aborts_the_run() {
    let repo = FixtureRepo::new();
    // the branch tip names a parent that was never stored
    let tip = repo.commit(
        Some("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"),
        "dangling parent",
        1_000,
    );
    repo.branch("master", &tip);

    run_gtg_command(repo.path(), &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read ancestry"));
}

#[test]
fn unresolvable_tags_are_ignored() {
    let fixture = forked_fixture();
    // tag ref pointing at an object that does not exist
    fixture
        .repo
        .tag_ref("ghost", "ffffffffffffffffffffffffffffffffffffffff");

    run_gtg_command(fixture.repo.path(), &["--format", "script"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".tag(").not());
}

#[test]
fn redundant_branches_are_reported_informationally() {
    let repo = FixtureRepo::new();
    let a = repo.commit(None, "first", 1_000);
    let b = repo.commit(Some(&a), "second", 2_000);
    repo.branch("master", &b);
    repo.branch("old-master", &a);

    run_gtg_command(repo.path(), &["--format", "script", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("same or independent branch"));
}
