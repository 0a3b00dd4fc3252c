//! Integration tests for the list command: filtering, sorting, pagination

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{add_snippet, init_stash, snipstash_cmd};

#[test]
fn test_list_empty_stash() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());

    snipstash_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No snippets found"));
}

#[test]
fn test_list_paginates() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());
    for i in 0..25 {
        add_snippet(temp.path(), &format!("Item {:02}", i), "python", "x = 1");
    }

    snipstash_cmd()
        .current_dir(temp.path())
        .args(["list", "--page", "3", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 3 of 3 (25 snippets)"));
}

#[test]
fn test_list_search_matches_code() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());
    add_snippet(temp.path(), "Fetcher", "javascript", "await fetch('/api')");
    add_snippet(temp.path(), "Plain", "javascript", "let x = 1;");

    snipstash_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "FETCH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetcher"))
        .stdout(predicate::str::contains("Plain").not());
}

#[test]
fn test_list_filters_by_language() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());
    add_snippet(temp.path(), "Py", "python", "x = 1");
    add_snippet(temp.path(), "Js", "javascript", "let x = 1;");

    snipstash_cmd()
        .current_dir(temp.path())
        .args(["list", "--language", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Py"))
        .stdout(predicate::str::contains("Js").not());
}

#[test]
fn test_list_filters_by_auto_tag() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());
    add_snippet(
        temp.path(),
        "Looper",
        "javascript",
        "for (let i = 0; i < 3; i++) {}",
    );
    add_snippet(temp.path(), "Plain", "javascript", "let x = 1;");

    snipstash_cmd()
        .current_dir(temp.path())
        .args(["list", "--tag", "loop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Looper"))
        .stdout(predicate::str::contains("Plain").not());
}

#[test]
fn test_list_sorts_by_title() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());
    add_snippet(temp.path(), "Banana", "python", "x = 1");
    add_snippet(temp.path(), "Apple", "python", "x = 1");

    let output = snipstash_cmd()
        .current_dir(temp.path())
        .args(["list", "--sort", "title", "--order", "asc"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let apple = stdout.find("Apple").unwrap();
    let banana = stdout.find("Banana").unwrap();
    assert!(apple < banana);
}

#[test]
fn test_list_invalid_sort_field_fails_with_suggestions() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());

    snipstash_cmd()
        .current_dir(temp.path())
        .args(["list", "--sort", "nonexistentField"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unknown sort field"))
        .stderr(predicate::str::contains(
            "created, updated, title, language, usage, last-used",
        ));
}

#[test]
fn test_list_invalid_language_fails() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());

    snipstash_cmd()
        .current_dir(temp.path())
        .args(["list", "--language", "cobol"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("cobol"));
}
