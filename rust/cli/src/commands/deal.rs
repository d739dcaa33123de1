//! `deal`: start one round and print what the client would receive.

use crate::config;
use crate::error::CliError;
use cardroom_engine::engine::{Engine, StartRound};
use cardroom_engine::fairness::generate_seed;
use std::io::Write;

pub const DEFAULT_CLIENT_SEED: &str = "cardroom";

/// Deals a round from the given seeds (a random server seed when none is
/// given) and prints the redacted view as pretty JSON. The server seed is
/// not part of the output.
pub fn handle_deal_command(
    server_seed: Option<String>,
    client_seed: Option<String>,
    nonce: Option<u64>,
    bet: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let engine = Engine::default();
    let round = engine.start_round(StartRound {
        server_seed: server_seed.unwrap_or_else(generate_seed),
        client_seed: client_seed.unwrap_or_else(|| DEFAULT_CLIENT_SEED.to_string()),
        nonce: nonce.unwrap_or(0),
        bet: bet.unwrap_or(cfg.bet),
        config: cfg.table,
        meta: None,
    })?;
    let view = engine.serialize(&round);
    let text = serde_json::to_string_pretty(&view).map_err(std::io::Error::other)?;
    writeln!(out, "{}", text)?;
    Ok(())
}
