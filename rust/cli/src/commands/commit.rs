//! `commit`: create a server seed and publish its hash.

use crate::error::CliError;
use cardroom_engine::fairness::{create_commitment, generate_seed};
use std::io::Write;

/// Prints the full commitment as pretty JSON. The operator keeps `seed`
/// secret and hands out `public_hash` before play.
pub fn handle_commit_command(
    client_seed: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let client_seed = client_seed.unwrap_or_else(generate_seed);
    let c = create_commitment(&client_seed);
    let json = serde_json::json!({
        "seed": c.seed,
        "client_seed": c.client_seed,
        "hash": c.hash,
        "public_hash": c.public_hash,
    });
    let text = serde_json::to_string_pretty(&json).map_err(std::io::Error::other)?;
    writeln!(out, "{}", text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardroom_engine::fairness::verify;

    #[test]
    fn output_verifies() {
        let mut out = Vec::new();
        handle_commit_command(Some("table-7".into()), &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["client_seed"], "table-7");
        assert!(verify(
            v["seed"].as_str().unwrap(),
            "table-7",
            v["public_hash"].as_str().unwrap()
        ));
    }

    #[test]
    fn client_seed_generated_when_missing() {
        let mut out = Vec::new();
        handle_commit_command(None, &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["client_seed"].as_str().unwrap().len(), 64);
    }
}
