//! # Play Command
//!
//! Interactive rounds against the house, read from stdin.
//!
//! Each round gets a fresh server seed. Its public hash is printed before the
//! deal and the seed itself after settlement, so every round can be checked
//! with `cardroom verify`. The session balance lives in memory only.

use crate::commands::deal::DEFAULT_CLIENT_SEED;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_actions, format_dealer, format_hand, format_result};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_player_action, validate_bet, ParseResult};
use cardroom_engine::engine::{Engine, StartRound};
use cardroom_engine::fairness::create_commitment;
use cardroom_engine::round::{Round, RoundStatus};
use std::io::{BufRead, Write};

#[derive(Debug, Clone)]
pub struct PlayArgs {
    pub bet: Option<u64>,
    pub balance: Option<u64>,
    pub client_seed: Option<String>,
    pub rounds: u32,
}

/// Runs up to `rounds` rounds. `q` or EOF ends the session; a round left
/// unfinished is abandoned without touching the balance.
pub fn handle_play_command(
    args: PlayArgs,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let bet = args.bet.unwrap_or(cfg.bet);
    let mut balance = args.balance.unwrap_or(cfg.starting_balance);

    if args.rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    if let Err(msg) = validate_bet(bet, balance) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let client_seed = args
        .client_seed
        .unwrap_or_else(|| DEFAULT_CLIENT_SEED.to_string());
    let engine = Engine::default();
    writeln!(
        out,
        "play: rounds={} bet={} balance={}",
        args.rounds, bet, balance
    )?;

    let mut played = 0u32;
    for nonce in 0..args.rounds {
        if balance < bet {
            ui::display_warning(err, "balance is below the bet, ending session")?;
            break;
        }
        let commitment = create_commitment(&client_seed);
        writeln!(out, "Round {}", nonce + 1)?;
        writeln!(out, "Public hash: {}", commitment.public_hash)?;

        let round = engine.start_round(StartRound {
            server_seed: commitment.seed.clone(),
            client_seed: client_seed.clone(),
            nonce: u64::from(nonce),
            bet,
            config: cfg.table.clone(),
            meta: None,
        })?;

        let Some(round) = player_turn(&engine, round, balance, stdin, out, err)? else {
            writeln!(out, "Round abandoned.")?;
            break;
        };

        let settled = engine.settle_round(&engine.play_dealer(&round)?)?;
        let view = engine.serialize(&settled);
        writeln!(out, "Dealer: {}", format_dealer(&view.dealer))?;
        if let Some(summary) = &settled.summary {
            for hand in &summary.hands {
                writeln!(
                    out,
                    "{}: {} (payout {}, net {:+})",
                    hand.hand_id,
                    format_result(hand.result),
                    hand.payout,
                    hand.net
                )?;
            }
            if let Some(ins) = &summary.insurance {
                writeln!(out, "Insurance: payout {}, net {:+}", ins.payout, ins.net)?;
            }
            balance = balance.saturating_add_signed(summary.net_result);
            writeln!(out, "Net: {:+}  Balance: {}", summary.net_result, balance)?;
        }
        writeln!(out, "Server seed: {}", commitment.seed)?;
        played += 1;
    }

    writeln!(out, "Rounds played: {}", played)?;
    writeln!(out, "Final balance: {}", balance)?;
    Ok(())
}

/// Prompts until the player turn is over. `None` when the player quits.
fn player_turn(
    engine: &Engine,
    mut round: Round,
    balance: u64,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<Round>, CliError> {
    loop {
        let view = engine.serialize(&round);
        writeln!(out, "Dealer: {}", format_dealer(&view.dealer))?;
        for (i, hand) in round.player.hands.iter().enumerate() {
            let active = i == round.player.active_hand_index
                && round.status == RoundStatus::PlayerTurn;
            let marker = if active { ">" } else { " " };
            writeln!(out, "{} {}: {}", marker, hand.id, format_hand(hand))?;
        }
        if round.status != RoundStatus::PlayerTurn {
            return Ok(Some(round));
        }

        let available = balance.saturating_sub(round.bets.total_wager);
        let legal = engine.available_actions(&round, available);
        write!(out, "Action {} or [q]uit: ", format_actions(&legal))?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_player_action(&line) {
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Action(action) => {
                match engine.apply_player_action(&round, action, available) {
                    Ok(next) => {
                        writeln!(out, "Action: {}", action)?;
                        round = next;
                    }
                    Err(e) => ui::write_error(err, &e.to_string())?,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(rounds: u32) -> PlayArgs {
        PlayArgs {
            bet: Some(10),
            balance: Some(1_000),
            client_seed: Some("unit".into()),
            rounds,
        }
    }

    #[test]
    fn standing_plays_out_every_round() {
        let mut input = Cursor::new("s\ns\ns\ns\ns\ns\ns\ns\n".as_bytes());
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_play_command(args(2), &mut input, &mut out, &mut err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Public hash:").count(), 2);
        assert_eq!(text.matches("Server seed:").count(), 2);
        assert!(text.contains("Rounds played: 2"));
    }

    #[test]
    fn zero_rounds_rejected() {
        let mut input = Cursor::new(&b""[..]);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_play_command(args(0), &mut input, &mut out, &mut err);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        assert!(String::from_utf8(err).unwrap().contains("rounds must be >= 1"));
    }

    #[test]
    fn bet_larger_than_balance_rejected() {
        let mut a = args(1);
        a.bet = Some(5_000);
        let mut input = Cursor::new(&b""[..]);
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert!(handle_play_command(a, &mut input, &mut out, &mut err).is_err());
    }
}
