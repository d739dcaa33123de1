#![allow(dead_code)]

use cardroom_engine::actions::{apply_player_action, ActionKind};
use cardroom_engine::cards::{Card, Rank, Suit};
use cardroom_engine::dealer::play_dealer;
use cardroom_engine::round::{create_round_state, NewRound, Round, RoundStatus};
use cardroom_engine::rules::TableConfig;
use cardroom_engine::shoe::Shoe;

pub const RICH: u64 = 1_000_000;

pub fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Deals from a stacked shoe: player, dealer, player, dealer, then `rest`.
pub fn deal_with(
    player: [Card; 2],
    dealer: [Card; 2],
    rest: &[Card],
    bet: u64,
    config: TableConfig,
) -> Round {
    let mut cards = vec![player[0], dealer[0], player[1], dealer[1]];
    cards.extend_from_slice(rest);
    let shoe = Shoe::stacked(cards, &config);
    create_round_state(NewRound {
        round_id: "r-1".into(),
        shoe,
        bet,
        config,
        meta: None,
    })
    .expect("stacked deal")
}

pub fn deal(player: [Card; 2], dealer: [Card; 2], rest: &[Card], bet: u64) -> Round {
    deal_with(player, dealer, rest, bet, TableConfig::default())
}

pub fn act(round: &Round, action: ActionKind) -> Round {
    apply_player_action(round, action, RICH).expect("action should be legal")
}

/// Stands on every remaining hand and lets the dealer finish.
pub fn finish(round: &Round) -> Round {
    let mut r = round.clone();
    while r.status == RoundStatus::PlayerTurn {
        r = act(&r, ActionKind::Stand);
    }
    play_dealer(&r).expect("dealer play")
}
