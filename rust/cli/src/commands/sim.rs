//! # Sim Command
//!
//! Plays rounds automatically with a named strategy and reports aggregate
//! results. Server and client seeds for every round come from a ChaCha20
//! stream, so `--seed` makes a whole run reproducible.
//!
//! Settled rounds can be archived to JSONL (`.zst` for compressed output)
//! and re-checked later with `cardroom audit`.

use crate::config;
use crate::error::CliError;
use crate::io_utils::create_output;
use crate::ui;
use crate::validation::validate_rounds;
use cardroom_ai::{create_strategy, Strategy, STRATEGY_NAMES};
use cardroom_engine::engine::{Engine, StartRound};
use cardroom_engine::logger::{RoundLogger, RoundRecord};
use cardroom_engine::round::{Round, RoundStatus};
use cardroom_engine::settlement::{HandResult, RoundSummary};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Stops a run after this many rounds with exit code 130. Used to exercise
/// the interrupted path without sending signals.
pub const BREAK_AFTER_ENV: &str = "CARDROOM_SIM_BREAK_AFTER";

#[derive(Debug, Clone)]
pub struct SimArgs {
    pub rounds: u64,
    pub seed: Option<u64>,
    pub bet: Option<u64>,
    pub strategy: String,
    pub output: Option<String>,
}

/// Running totals over a simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    pub rounds: u64,
    pub hands: u64,
    pub total_wagered: u64,
    pub total_payout: u64,
    pub net: i64,
    pub blackjacks: u64,
    pub wins: u64,
    pub pushes: u64,
    pub losses: u64,
    pub surrenders: u64,
    pub busts: u64,
}

impl SimStats {
    pub fn record(&mut self, summary: &RoundSummary) {
        self.rounds += 1;
        self.hands += summary.hands.len() as u64;
        self.total_wagered += summary.total_wagered;
        self.total_payout += summary.total_payout;
        self.net += summary.net_result;
        for hand in &summary.hands {
            match hand.result {
                HandResult::Blackjack => self.blackjacks += 1,
                HandResult::Win => self.wins += 1,
                HandResult::Push => self.pushes += 1,
                HandResult::Loss => self.losses += 1,
                HandResult::Bust => self.busts += 1,
                HandResult::Surrendered => self.surrenders += 1,
            }
        }
    }

    /// House edge as a percentage of money wagered. Positive favours the house.
    pub fn house_edge(&self) -> f64 {
        if self.total_wagered == 0 {
            return 0.0;
        }
        -(self.net as f64) / self.total_wagered as f64 * 100.0
    }
}

pub fn handle_sim_command(
    args: SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if let Err(msg) = validate_rounds(args.rounds) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    let Some(strategy) = create_strategy(&args.strategy) else {
        let msg = format!(
            "unknown strategy '{}' (expected one of: {})",
            args.strategy,
            STRATEGY_NAMES.join(", ")
        );
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    };

    let cfg = config::load()?;
    let bet = args.bet.unwrap_or(cfg.bet);
    let base_seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(base_seed);
    let break_after = std::env::var(BREAK_AFTER_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok());

    let mut logger = match &args.output {
        Some(path) => Some(RoundLogger::with_writer(create_output(Path::new(path))?)),
        None => None,
    };

    let engine = Engine::default();
    let mut bankroll = cfg.starting_balance;
    let mut stats = SimStats::default();

    for nonce in 0..args.rounds {
        if bankroll < bet {
            ui::display_warning(
                err,
                &format!("bankroll {} is below the bet after {} rounds", bankroll, nonce),
            )?;
            break;
        }
        let round = engine.start_round(StartRound {
            server_seed: random_hex(&mut rng, 32),
            client_seed: random_hex(&mut rng, 16),
            nonce,
            bet,
            config: cfg.table.clone(),
            meta: Some(serde_json::json!({
                "strategy": strategy.name(),
                "sim_seed": base_seed,
            })),
        })?;
        let settled = play_round(&engine, strategy.as_ref(), round, bankroll)?;
        let summary = settled
            .summary
            .as_ref()
            .ok_or_else(|| CliError::Engine("settled round has no summary".to_string()))?;
        stats.record(summary);
        bankroll = bankroll.saturating_add_signed(summary.net_result);

        if let Some(logger) = logger.as_mut() {
            logger.write(&RoundRecord::from_round(&settled)?)?;
        }

        if break_after == Some(stats.rounds) {
            writeln!(out, "Interrupted: saved {}/{}", stats.rounds, args.rounds)?;
            return Err(CliError::Interrupted(format!(
                "stopped after {} rounds",
                stats.rounds
            )));
        }
    }

    tracing::info!(
        rounds = stats.rounds,
        net = stats.net,
        strategy = strategy.name(),
        "simulation finished"
    );

    writeln!(out, "Simulated: {} rounds", stats.rounds)?;
    writeln!(out, "Strategy: {}", strategy.name())?;
    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Hands: {}", stats.hands)?;
    writeln!(out, "Wagered: {}", stats.total_wagered)?;
    writeln!(out, "Paid out: {}", stats.total_payout)?;
    writeln!(out, "Net: {:+}", stats.net)?;
    writeln!(
        out,
        "Results: blackjack {} win {} push {} loss {} bust {} surrender {}",
        stats.blackjacks, stats.wins, stats.pushes, stats.losses, stats.busts, stats.surrenders
    )?;
    writeln!(out, "House edge: {:.2}%", stats.house_edge())?;
    writeln!(out, "Final bankroll: {}", bankroll)?;
    if let Some(path) = &args.output {
        writeln!(out, "Archived to: {}", path)?;
    }
    Ok(())
}

fn play_round(
    engine: &Engine,
    strategy: &dyn Strategy,
    mut round: Round,
    bankroll: u64,
) -> Result<Round, CliError> {
    while round.status == RoundStatus::PlayerTurn {
        let available = bankroll.saturating_sub(round.bets.total_wager);
        let legal = engine.available_actions(&round, available);
        let action = strategy.choose(&round, &legal);
        round = engine.apply_player_action(&round, action, available)?;
    }
    let round = engine.play_dealer(&round)?;
    Ok(engine.settle_round(&round)?)
}

fn random_hex(rng: &mut ChaCha20Rng, len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
