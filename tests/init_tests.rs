//! Integration tests for init and config commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_stash, snipstash_cmd};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    snipstash_cmd().arg("init").arg(temp.path()).assert().success();

    // Check .snipstash directory structure exists
    assert!(temp.path().join(".snipstash").exists());
    assert!(temp.path().join(".snipstash/snippets").is_dir());
    assert!(temp.path().join(".snipstash/folders").is_dir());

    // Check config content
    let config_path = temp.path().join(".snipstash/config.toml");
    assert!(config_path.exists());
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("user = \"tester\""));
    assert!(content.contains("created"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    // First init succeeds
    snipstash_cmd().arg("init").arg(temp.path()).assert().success();

    // Second init fails
    snipstash_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_command_outside_stash_fails_with_suggestions() {
    let temp = TempDir::new().unwrap();

    snipstash_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a snipstash directory"))
        .stderr(predicate::str::contains("snipstash init"));
}

#[test]
fn test_config_get_user() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());

    snipstash_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("user")
        .assert()
        .success()
        .stdout(predicate::str::contains("tester"));
}

#[test]
fn test_config_set_user() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());

    snipstash_cmd()
        .current_dir(temp.path())
        .args(["config", "user", "alice"])
        .assert()
        .success();

    // The stored value changed; SNIPSTASH_USER still wins at runtime, so
    // verify through the stored document.
    let content = fs::read_to_string(temp.path().join(".snipstash/config.toml")).unwrap();
    assert!(content.contains("user = \"alice\""));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());

    snipstash_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("user"))
        .stdout(predicate::str::contains("created"));
}

#[test]
fn test_config_set_created_fails() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());

    snipstash_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2025-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_discovery_walks_up_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    init_stash(temp.path());

    let subdir = temp.path().join("a").join("b");
    fs::create_dir_all(&subdir).unwrap();

    snipstash_cmd()
        .current_dir(&subdir)
        .arg("config")
        .arg("user")
        .assert()
        .success()
        .stdout(predicate::str::contains("tester"));
}
