//! Shared helpers for CLI integration tests.
//!
//! `run_cli` drives [`cardroom_cli::run_with_input`] in-process with a fixed
//! stdin. `EnvGuard` sets `CARDROOM_*` variables and clears them on drop;
//! tests that touch the environment are `#[serial]`.
#![allow(dead_code)]

use std::io::Cursor;

pub const CONFIG_VARS: &[&str] = &[
    "CARDROOM_CONFIG",
    "CARDROOM_DECKS",
    "CARDROOM_PENETRATION",
    "CARDROOM_H17",
    "CARDROOM_SURRENDER",
    "CARDROOM_BALANCE",
    "CARDROOM_BET",
    "CARDROOM_SEED",
    "CARDROOM_SIM_BREAK_AFTER",
];

#[derive(Debug)]
pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str], input: &str) -> CliOutput {
    let mut argv = vec!["cardroom"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = cardroom_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
    CliOutput {
        code,
        stdout: String::from_utf8(out).expect("utf8 stdout"),
        stderr: String::from_utf8(err).expect("utf8 stderr"),
    }
}

/// Clears every `CARDROOM_*` variable on creation and again on drop.
pub struct EnvGuard;

impl EnvGuard {
    pub fn clean() -> Self {
        clear_env();
        EnvGuard
    }

    pub fn set(&self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> &Self {
        std::env::set_var(key, value);
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear_env();
    }
}

fn clear_env() {
    for key in CONFIG_VARS {
        std::env::remove_var(key);
    }
}

/// Parses `key: value` lines such as `Net: +150` from command output.
pub fn field<'a>(stdout: &'a str, key: &str) -> Option<&'a str> {
    let prefix = format!("{}: ", key);
    stdout
        .lines()
        .find_map(|l| l.strip_prefix(prefix.as_str()))
        .map(str::trim)
}
