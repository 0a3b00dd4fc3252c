#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn snipstash_cmd() -> Command {
    let mut cmd = Command::cargo_bin("snipstash").unwrap();
    cmd.env_remove("SNIPSTASH_ROOT");
    cmd.env("SNIPSTASH_USER", "tester");
    cmd
}

pub fn init_stash(path: &Path) {
    snipstash_cmd().arg("init").arg(path).assert().success();
}

/// Add a snippet with its code on stdin, returning the new snippet's id.
pub fn add_snippet(dir: &Path, title: &str, language: &str, code: &str) -> String {
    let output = snipstash_cmd()
        .current_dir(dir)
        .args(["add", "--title", title, "--language", language])
        .write_stdin(code.to_string())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Added snippet "))
        .expect("expected an 'Added snippet <id>' line")
        .to_string()
}

/// Create a folder, returning its id.
pub fn add_folder(dir: &Path, name: &str) -> String {
    let output = snipstash_cmd()
        .current_dir(dir)
        .args(["folder", "add", name])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "folder add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Added folder "))
        .expect("expected an 'Added folder <id>' line")
        .to_string()
}
