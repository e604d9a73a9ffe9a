// End-to-end runs of the dna-trie binary over command files
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn command_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_runs_command_file() {
    let file = command_file("INSERT AC\nINSERT GT\nSEARCH A\nREMOVE AC\nPRINT\n");

    Command::cargo_bin("dna-trie")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq(
            "sequence AC inserted at level 0\n\
             sequence GT inserted at level 1\n\
             Number of nodes visited: 2\n\
             Sequence: AC\n\
             sequence AC removed\n\
             GT\n",
        ));
}

#[test]
fn test_malformed_lines_are_skipped() {
    let file = command_file("INSERT ACXG\nJUMP AC\n\ninsert gattaca\nPRINT lengths\n");

    Command::cargo_bin("dna-trie")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("sequence GATTACA inserted at level 0\nGATTACA: length 7\n"))
        .stderr(predicate::str::contains("skipping command"));
}

#[test]
fn test_case_sensitive_flag() {
    let file = command_file("INSERT acgt\nINSERT ACGT\n");

    Command::cargo_bin("dna-trie")
        .unwrap()
        .arg("--case-sensitive")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("sequence ACGT inserted at level 0\n"));
}

#[test]
fn test_json_format() {
    let file = command_file("INSERT AACGT\nSEARCH AAC$\nPRINT STATS\n");

    let output = Command::cargo_bin("dna-trie")
        .unwrap()
        .args(["--format", "json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let values: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0]["command"], "insert");
    assert_eq!(values[1]["outcome"]["kind"], "not_found");
    assert_eq!(values[2]["dump"], "AACGT: A(40.00), C(20.00), G(20.00), T(20.00)");
    assert_eq!(values[2]["tree"]["kind"], "leaf");
}

#[test]
fn test_unknown_format_rejected() {
    let file = command_file("PRINT\n");

    Command::cargo_bin("dna-trie")
        .unwrap()
        .args(["--format", "yaml"])
        .arg(file.path())
        .assert()
        .failure();
}

#[test]
fn test_missing_file_fails() {
    Command::cargo_bin("dna-trie")
        .unwrap()
        .arg("/nonexistent/commands.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("running commands from"));
}
