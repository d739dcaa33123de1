mod helpers;

use cardroom_engine::fairness::verify;
use helpers::{field, run_cli};

const BASE: &[&str] = &["play", "--bet", "10", "--balance", "1000", "--client-seed", "tester"];

fn play(extra: &[&str], input: &str) -> helpers::CliOutput {
    let mut args = BASE.to_vec();
    args.extend_from_slice(extra);
    run_cli(&args, input)
}

#[test]
fn quit_ends_session_with_success() {
    let res = play(&[], "q\n");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Public hash:"));
    assert_eq!(field(&res.stdout, "Final balance"), Some("1000"));
}

#[test]
fn eof_ends_session_with_success() {
    let res = play(&["--rounds", "3"], "");
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("Final balance:"));
}

#[test]
fn invalid_input_reprompts() {
    let res = play(&[], "x\nfold\ns\ns\ns\ns\n");
    assert_eq!(res.code, 0);
    if res.stdout.contains("Action [") {
        assert!(res.stderr.contains("Valid actions"));
    }
    assert_eq!(field(&res.stdout, "Rounds played"), Some("1"));
}

#[test]
fn standing_settles_and_reveals_a_verifiable_seed() {
    let res = play(&["--rounds", "3"], &"s\n".repeat(12));
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert_eq!(field(&res.stdout, "Rounds played"), Some("3"));

    let hashes: Vec<&str> = res
        .stdout
        .lines()
        .filter_map(|l| l.strip_prefix("Public hash: "))
        .collect();
    let seeds: Vec<&str> = res
        .stdout
        .lines()
        .filter_map(|l| l.strip_prefix("Server seed: "))
        .collect();
    assert_eq!(hashes.len(), 3);
    assert_eq!(seeds.len(), 3);
    for (seed, hash) in seeds.iter().zip(&hashes) {
        assert!(verify(seed, "tester", hash));
    }
    // Fresh seed every round.
    assert_ne!(seeds[0], seeds[1]);
}

#[test]
fn bet_above_balance_is_rejected() {
    let res = run_cli(&["play", "--bet", "500", "--balance", "100"], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("exceeds balance"));
}

#[test]
fn balance_tracks_round_results() {
    let res = play(&["--rounds", "2"], &"s\n".repeat(8));
    let nets: i64 = res
        .stdout
        .lines()
        .filter_map(|l| l.strip_prefix("Net: "))
        .map(|l| {
            let n = l.split_whitespace().next().unwrap();
            n.trim_start_matches('+').parse::<i64>().unwrap()
        })
        .sum();
    let balance: i64 = field(&res.stdout, "Final balance").unwrap().parse().unwrap();
    assert_eq!(balance, 1000 + nets);
}
