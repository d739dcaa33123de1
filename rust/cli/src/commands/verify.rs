//! `verify`: check a revealed server seed against its published hash.

use crate::error::CliError;
use cardroom_engine::fairness::verify;
use std::io::Write;

/// Prints `OK` on a match. On a mismatch prints `MISMATCH` and fails, so
/// the process exits non-zero.
pub fn handle_verify_command(
    seed: &str,
    client_seed: &str,
    public_hash: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if verify(seed, client_seed, public_hash) {
        writeln!(out, "OK")?;
        Ok(())
    } else {
        writeln!(out, "MISMATCH")?;
        Err(CliError::InvalidInput(
            "seed does not match public hash".to_string(),
        ))
    }
}
