//! End-to-end runs of the `attrix` binary over temporary files.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use super::common::repetitive_text;

fn write_input(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

fn attrix(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_attrix"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("run attrix")
}

#[test]
fn query_prints_the_requested_bytes() {
    let file = write_input(b"the quick brown fox");
    let path = file.path().to_str().unwrap();

    let out = attrix(&["query", path, "--offset", "4", "--len", "5"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim_end(), "quick");

    let out = attrix(&["query", path, "--offset", "16", "--len", "3", "--raw"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"fox");
}

#[test]
fn query_past_the_end_fails() {
    let file = write_input(b"short");
    let out = attrix(&["query", file.path().to_str().unwrap(), "--offset", "3", "--len", "9"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("outside text"));
}

#[test]
fn verify_accepts_a_faithful_index() {
    let file = write_input(&repetitive_text(2, 4000, 31));
    let out = attrix(&[
        "verify",
        file.path().to_str().unwrap(),
        "--tau",
        "3",
        "--samples",
        "500",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("OK crc32"));
}

#[test]
fn stats_json_describes_the_index() {
    let text = repetitive_text(4, 2500, 11);
    let file = write_input(&text);
    let out = attrix(&["stats", file.path().to_str().unwrap(), "--json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(report["textLen"], 2500);
    assert_eq!(report["tau"], 2);
    assert!(report["gamma"].as_u64().unwrap() > 0);
    assert!(report["brotliBytes"].as_u64().unwrap() < text.len() as u64);
    let levels = report["levels"].as_array().unwrap();
    assert_eq!(levels.last().unwrap()["terminal"], true);
}

#[test]
fn empty_and_missing_files_are_reported() {
    let empty = write_input(b"");
    let out = attrix(&["stats", empty.path().to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("is empty"));

    let out = attrix(&["stats", "/nonexistent/attrix-input"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("reading"));
}

#[test]
fn tau_below_two_is_rejected() {
    let file = write_input(b"abcabc");
    let out = attrix(&["stats", file.path().to_str().unwrap(), "--tau", "1"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("tau must be at least 2"));
}
