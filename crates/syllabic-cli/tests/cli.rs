//! End-to-end tests for the syllabic command-line tools.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use syllabic_cli::WORDLIST_ENV;
use tempfile::TempDir;

fn syllable_count() -> Command {
    let mut cmd = Command::cargo_bin("syllable-count").unwrap();
    cmd.env_remove(WORDLIST_ENV).env_remove("RUST_LOG");
    cmd
}

fn syllable_words() -> Command {
    let mut cmd = Command::cargo_bin("syllable-words").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_wordlist(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

// -- syllable-count --

#[test]
fn count_from_stdin() {
    syllable_count()
        .write_stdin("cat\nhome-brew\nxyz123\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading words from <stdin>"))
        .stdout(predicate::str::contains("Counted 3 syllables in 2 words"))
        .stdout(predicate::str::is_match(r"Elapsed time: \d+\.\d{3} sec").unwrap());
}

#[test]
fn count_from_files() {
    let dir = TempDir::new().unwrap();
    let a = write_wordlist(&dir, "a.txt", "beautiful\nmake\n");
    let b = write_wordlist(&dir, "b.txt", "the-end\r\n'tis\r\n");

    syllable_count()
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Reading words from {a}, {b}")))
        .stdout(predicate::str::contains("Counted 7 syllables in 4 words"));
}

#[test]
fn count_from_environment() {
    let dir = TempDir::new().unwrap();
    let list = write_wordlist(&dir, "words.txt", "banana\n");

    syllable_count()
        .env(WORDLIST_ENV, &list)
        .assert()
        .success()
        .stdout(predicate::str::contains("Counted 3 syllables in 1 words"));
}

#[test]
fn count_json() {
    let output = syllable_count()
        .args(["--format", "json"])
        .write_stdin("cat\n-word\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sources"][0], "<stdin>");
    assert_eq!(value["lines"], 2);
    assert_eq!(value["words"], 1);
    assert_eq!(value["syllables"], 1);
    assert_eq!(value["unscannable"], 1);
    assert!(value["elapsed_secs"].is_f64());
}

#[test]
fn count_missing_file_fails() {
    syllable_count()
        .arg("/nonexistent/syllabic/words.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with(
            "error: failed to open /nonexistent/syllabic/words.txt",
        ));
}

#[test]
fn count_verbose_logs_unscannable_words() {
    syllable_count()
        .arg("-vv")
        .write_stdin("a1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unscannable character '1' at position 1"));
}

// -- syllable-words --

#[test]
fn words_from_arguments() {
    syllable_words()
        .args(["cat", "Home-Brew", "a1"])
        .assert()
        .success()
        .stdout("cat\t1\nHome-Brew\t2\na1\t0\n");
}

#[test]
fn words_from_stdin_skip_blank_lines() {
    syllable_words()
        .write_stdin("  make  \n\n\nthe\n")
        .assert()
        .success()
        .stdout("make\t1\nthe\t1\n");
}

#[test]
fn words_from_stdin_continue_past_invalid_utf8() {
    syllable_words()
        .write_stdin(&b"cat\ncaf\xe9\nmake\n"[..])
        .assert()
        .success()
        .stdout("cat\t1\ncaf\u{FFFD}\t0\nmake\t1\n");
}

#[test]
fn count_from_stdin_with_invalid_utf8() {
    syllable_count()
        .write_stdin(&b"cat\ncaf\xe9\nmake\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Counted 2 syllables in 2 words"));
}

#[test]
fn words_strict() {
    syllable_words()
        .args(["--strict", "x", "a--b"])
        .assert()
        .success()
        .stdout("x\t0\na--b\terror: unscannable character '-' at position 2\n");
}

#[test]
fn words_trace() {
    syllable_words()
        .args(["--trace", "the"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'e' E: Consonant -> TrailingE"))
        .stdout(predicate::str::contains("' ' Boundary: TrailingE -> TrailingE +1"))
        .stdout(predicate::str::ends_with("  = 1\n"));
}

#[test]
fn words_strict_and_trace_conflict() {
    syllable_words()
        .args(["--strict", "--trace", "cat"])
        .assert()
        .failure();
}
