mod helpers;

use helpers::{field, run_cli, EnvGuard};
use serde_json::Value;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn simulate(dir: &TempDir, name: &str, rounds: &str) -> String {
    let path = dir.path().join(name).to_string_lossy().to_string();
    let res = run_cli(&["sim", "--rounds", rounds, "--seed", "21", "--output", &path], "");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    path
}

fn rewrite_line(path: &str, line_no: usize, edit: impl FnOnce(&mut Value)) {
    let content = fs::read_to_string(path).unwrap();
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let mut v: Value = serde_json::from_str(&lines[line_no]).unwrap();
    edit(&mut v);
    lines[line_no] = serde_json::to_string(&v).unwrap();
    fs::write(path, lines.join("\n") + "\n").unwrap();
}

#[test]
#[serial]
fn honest_archive_passes() {
    let _env = EnvGuard::clean();
    let dir = TempDir::new().unwrap();
    let path = simulate(&dir, "rounds.jsonl", "25");
    let res = run_cli(&["audit", "--input", &path], "");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert_eq!(field(&res.stdout, "Audited"), Some("25 rounds"));
    assert!(res.stdout.lines().any(|l| l == "OK"));
}

#[test]
#[serial]
fn compressed_archive_passes() {
    let _env = EnvGuard::clean();
    let dir = TempDir::new().unwrap();
    let path = simulate(&dir, "rounds.jsonl.zst", "10");
    let res = run_cli(&["audit", "--input", &path], "");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
}

#[test]
#[serial]
fn tampered_public_hash_is_reported_by_line() {
    let _env = EnvGuard::clean();
    let dir = TempDir::new().unwrap();
    let path = simulate(&dir, "rounds.jsonl", "5");
    rewrite_line(&path, 1, |v| {
        v["public_hash"] = Value::String("0".repeat(64));
    });
    let res = run_cli(&["audit", "--input", &path], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Error: 2: round"), "stderr: {}", res.stderr);
    assert!(res.stderr.contains("public hash"));
    assert_eq!(field(&res.stdout, "Failed"), Some("1"));
}

#[test]
#[serial]
fn swapped_dealer_card_is_reported() {
    let _env = EnvGuard::clean();
    let dir = TempDir::new().unwrap();
    let path = simulate(&dir, "rounds.jsonl", "3");
    rewrite_line(&path, 0, |v| {
        let dealer = v["dealer_cards"].as_array_mut().unwrap();
        dealer.swap(0, 1);
    });
    let content = fs::read_to_string(&path).unwrap();
    let first: Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    // Two equal cards swap to the same record; nothing to detect then.
    if first["dealer_cards"][0] == first["dealer_cards"][1] {
        return;
    }
    let res = run_cli(&["audit", "--input", &path], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("cards"));
}

#[test]
fn garbage_line_fails_without_aborting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.jsonl");
    fs::write(&path, "{not json}\n").unwrap();
    let res = run_cli(&["audit", "--input", &path.to_string_lossy()], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("1: invalid record"));
}

#[test]
fn empty_archive_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.jsonl");
    fs::write(&path, "\n\n").unwrap();
    let res = run_cli(&["audit", "--input", &path.to_string_lossy()], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("no rounds found"));
}

#[test]
fn missing_archive_is_an_error() {
    let missing = Path::new("/nonexistent/cardroom/rounds.jsonl");
    let res = run_cli(&["audit", "--input", &missing.to_string_lossy()], "");
    assert_eq!(res.code, 2);
}
