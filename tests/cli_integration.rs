use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn marks_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("marks").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn add(dir: &TempDir, url: &str) {
    marks_in(dir).args(["add", url]).assert().success();
}

#[test]
fn add_then_list_round_trips() {
    let dir = TempDir::new().unwrap();

    marks_in(&dir)
        .args(["add", "https://example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bookmark added: https://example.com",
        ));

    marks_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. https://example.com"));
}

#[test]
fn empty_store_reports_instead_of_listing() {
    let dir = TempDir::new().unwrap();

    marks_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmarks yet. Go add some!"));
}

#[test]
fn invalid_url_is_rejected_without_mutating() {
    let dir = TempDir::new().unwrap();

    marks_in(&dir)
        .args(["add", "not a url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please provide a valid URL"));

    marks_in(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No bookmarks yet"));
}

#[test]
fn duplicate_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    add(&dir, "https://example.com");

    marks_in(&dir)
        .args(["add", "https://example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("URL is already bookmarked"));

    marks_in(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("2. ").not());
}

#[test]
fn edit_replaces_in_place() {
    let dir = TempDir::new().unwrap();
    add(&dir, "https://a.com");
    add(&dir, "https://b.com");

    marks_in(&dir)
        .args(["edit", "1", "https://x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmark updated (1): https://x.com"));

    marks_in(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("1. https://x.com"))
        .stdout(predicate::str::contains("2. https://b.com"));
}

#[test]
fn remove_shifts_later_indexes_down() {
    let dir = TempDir::new().unwrap();
    add(&dir, "https://a.com");
    add(&dir, "https://b.com");

    marks_in(&dir)
        .args(["remove", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmark removed: https://a.com"));

    marks_in(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("1. https://b.com"));
}

#[test]
fn stale_index_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    add(&dir, "https://a.com");

    marks_in(&dir)
        .args(["edit", "5", "https://b.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmark at index 5"));

    marks_in(&dir)
        .args(["remove", "5", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmark at index 5"));
}

#[test]
fn second_page_lists_the_tail() {
    let dir = TempDir::new().unwrap();
    for i in 0..21 {
        add(&dir, &format!("https://site{}.com", i));
    }

    marks_in(&dir)
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("21. https://site20.com"))
        .stdout(predicate::str::contains("Showing 20 - 40"))
        .stdout(predicate::str::contains("Page 2 of 2"))
        .stdout(predicate::str::contains("prev"));

    marks_in(&dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Page 1 of 2"))
        .stdout(predicate::str::contains("next"))
        .stdout(predicate::str::contains("21. ").not());
}

#[test]
fn page_selection_is_lenient() {
    let dir = TempDir::new().unwrap();
    add(&dir, "https://example.com");

    marks_in(&dir)
        .args(["list", "--page", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. https://example.com"));
}

#[test]
fn config_round_trips_through_the_cli() {
    let dir = TempDir::new().unwrap();

    marks_in(&dir)
        .args(["config", "browser", "firefox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("browser set to firefox"));

    marks_in(&dir)
        .args(["config", "browser"])
        .assert()
        .success()
        .stdout(predicate::str::contains("firefox"));
}
