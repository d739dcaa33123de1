//! Exit codes: 0 on success, 2 on any error, 130 when interrupted. Errors go
//! to stderr only.

mod helpers;

use cardroom_cli::exit_code;
use helpers::run_cli;

#[test]
fn version_and_help_succeed_on_stdout() {
    for flag in ["--version", "--help"] {
        let res = run_cli(&[flag], "");
        assert_eq!(res.code, exit_code::SUCCESS);
        assert!(!res.stdout.is_empty());
        assert!(res.stderr.is_empty());
    }
}

#[test]
fn missing_subcommand_is_an_error() {
    let res = run_cli(&[], "");
    assert_eq!(res.code, exit_code::ERROR);
    assert!(res.stderr.contains("Commands:"));
}

#[test]
fn missing_required_flag_is_an_error() {
    let res = run_cli(&["verify", "--seed", "abc"], "");
    assert_eq!(res.code, exit_code::ERROR);
    assert!(res.stdout.is_empty());
}

#[test]
fn non_numeric_bet_is_an_error() {
    let res = run_cli(&["deal", "--bet", "lots"], "");
    assert_eq!(res.code, exit_code::ERROR);
}

#[test]
fn zero_bet_is_rejected_by_the_engine() {
    let res = run_cli(&["deal", "--server-seed", "s", "--bet", "0"], "");
    assert_eq!(res.code, exit_code::ERROR);
    assert!(res.stderr.starts_with("Error:"));
    assert!(res.stdout.is_empty());
}

#[test]
fn play_quit_is_success() {
    let res = run_cli(&["play", "--bet", "5", "--balance", "50"], "q\n");
    assert_eq!(res.code, exit_code::SUCCESS);
}
