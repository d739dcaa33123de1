//! # Cardroom CLI Library
//!
//! Command-line front end for the provably-fair blackjack engine: publish
//! commitments, deal and play rounds, run strategy simulations and audit
//! archived rounds.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand. It writes to the
//! streams it is given and returns an exit code, so tests drive it directly.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = cardroom_cli::run(
//!     ["cardroom", "verify", "--seed", "s", "--client-seed", "c", "--public-hash", "00"],
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, cardroom_cli::exit_code::ERROR);
//! assert!(String::from_utf8(out).unwrap().contains("MISMATCH"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `commit`: Generate a server seed and print its public hash
//! - `verify`: Check a revealed seed against a public hash
//! - `deal`: Deal one round and print the client view
//! - `play`: Play rounds interactively from stdin
//! - `sim`: Play rounds with a strategy and report aggregate results
//! - `audit`: Re-verify an archive written by `sim --output`
//! - `cfg`: Show the resolved configuration and value sources

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{CardroomCli, Commands};
use commands::{
    handle_audit_command, handle_cfg_command, handle_commit_command, handle_deal_command,
    handle_play_command, handle_sim_command, handle_verify_command, PlayArgs, SimArgs,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["commit", "verify", "deal", "play", "sim", "audit", "cfg"];

/// Main entry point. `play` reads from the process stdin.
///
/// Returns `0` on success, `2` on any error and `130` when a simulation is
/// interrupted.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut lock = stdin.lock();
    run_with_input(args, &mut lock, out, err)
}

/// Same as [`run`] with an explicit input stream for `play`.
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardroomCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with a success code
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Cardroom blackjack CLI");
            write_or_exit!(err, "Usage: cardroom <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: cardroom --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Commit { client_seed } => handle_commit_command(client_seed, out),
        Commands::Verify {
            seed,
            client_seed,
            public_hash,
        } => handle_verify_command(&seed, &client_seed, &public_hash, out),
        Commands::Deal {
            server_seed,
            client_seed,
            nonce,
            bet,
        } => handle_deal_command(server_seed, client_seed, nonce, bet, out),
        Commands::Play {
            bet,
            balance,
            client_seed,
            rounds,
        } => handle_play_command(
            PlayArgs {
                bet,
                balance,
                client_seed,
                rounds,
            },
            stdin,
            out,
            err,
        ),
        Commands::Sim {
            rounds,
            seed,
            bet,
            strategy,
            output,
        } => handle_sim_command(
            SimArgs {
                rounds,
                seed,
                bet,
                strategy,
                output,
            },
            out,
            err,
        ),
        Commands::Audit { input } => handle_audit_command(&input, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
