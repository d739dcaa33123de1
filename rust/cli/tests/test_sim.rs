mod helpers;

use cardroom_engine::logger::RoundRecord;
use helpers::{field, run_cli, EnvGuard};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

#[test]
#[serial]
fn same_seed_same_results() {
    let _env = EnvGuard::clean();
    let a = run_cli(&["sim", "--rounds", "40", "--seed", "99"], "");
    let b = run_cli(&["sim", "--rounds", "40", "--seed", "99"], "");
    assert_eq!(a.code, 0, "stderr: {}", a.stderr);
    assert_eq!(a.stdout, b.stdout);
    assert_eq!(field(&a.stdout, "Simulated"), Some("40 rounds"));
    assert_eq!(field(&a.stdout, "Strategy"), Some("BasicStrategy"));
    assert_eq!(field(&a.stdout, "Seed"), Some("99"));
}

#[test]
#[serial]
fn different_strategies_play_differently() {
    let _env = EnvGuard::clean();
    let basic = run_cli(&["sim", "--rounds", "200", "--seed", "5"], "");
    let mimic = run_cli(
        &["sim", "--rounds", "200", "--seed", "5", "--strategy", "mimic"],
        "",
    );
    assert_eq!(mimic.code, 0);
    assert_eq!(field(&mimic.stdout, "Strategy"), Some("DealerMimic"));
    assert_ne!(
        field(&basic.stdout, "Results"),
        field(&mimic.stdout, "Results")
    );
}

#[test]
#[serial]
fn archive_has_one_record_per_round() {
    let _env = EnvGuard::clean();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("rounds.jsonl");
    let p = path.to_string_lossy().to_string();
    let res = run_cli(
        &["sim", "--rounds", "12", "--seed", "1", "--bet", "25", "--output", &p],
        "",
    );
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);

    let content = fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 12);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.fairness.nonce, i as u64);
        assert!(rec.ts.as_deref().is_some_and(|t| t.ends_with('Z')));
        assert_eq!(rec.meta.as_ref().unwrap()["strategy"], "BasicStrategy");
        assert!(rec.summary.total_wagered >= 25);
    }
    let ids: std::collections::HashSet<_> = records.iter().map(|r| &r.round_id).collect();
    assert_eq!(ids.len(), 12);
}

#[test]
#[serial]
fn zst_archive_is_compressed() {
    let _env = EnvGuard::clean();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rounds.jsonl.zst");
    let p = path.to_string_lossy().to_string();
    let res = run_cli(&["sim", "--rounds", "8", "--seed", "3", "--output", &p], "");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);

    let raw = fs::read(&path).unwrap();
    assert_eq!(&raw[..4], &[0x28, 0xb5, 0x2f, 0xfd]);
    let text = String::from_utf8(zstd::stream::decode_all(&raw[..]).unwrap()).unwrap();
    assert_eq!(text.lines().count(), 8);
}

#[test]
#[serial]
fn unknown_strategy_is_rejected() {
    let _env = EnvGuard::clean();
    let res = run_cli(&["sim", "--rounds", "5", "--strategy", "martingale"], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("unknown strategy 'martingale'"));
    assert!(res.stderr.contains("basic, mimic"));
}

#[test]
#[serial]
fn zero_rounds_is_rejected() {
    let _env = EnvGuard::clean();
    let res = run_cli(&["sim", "--rounds", "0"], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("rounds must be >= 1"));
}

#[test]
#[serial]
fn stops_when_bankroll_runs_out() {
    let env = EnvGuard::clean();
    env.set("CARDROOM_BALANCE", "200");
    let res = run_cli(&["sim", "--rounds", "3000", "--seed", "11", "--bet", "100"], "");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    let bankroll: u64 = field(&res.stdout, "Final bankroll").unwrap().parse().unwrap();
    if field(&res.stdout, "Simulated") == Some("3000 rounds") {
        assert!(!res.stderr.contains("below the bet"));
    } else {
        assert!(res.stderr.contains("below the bet"));
        assert!(bankroll < 100);
    }
}

#[test]
#[serial]
fn break_after_env_interrupts_with_130() {
    let env = EnvGuard::clean();
    env.set("CARDROOM_SIM_BREAK_AFTER", "3");
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.jsonl");
    let p = path.to_string_lossy().to_string();
    let res = run_cli(&["sim", "--rounds", "10", "--seed", "2", "--output", &p], "");
    assert_eq!(res.code, 130);
    assert!(res.stdout.contains("Interrupted: saved 3/10"));
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
}
