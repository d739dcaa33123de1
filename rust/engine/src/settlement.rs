use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::events::RoundEvent;
use crate::round::{Hand, HandStatus, Round, RoundStatus};

/// Insurance pays 2:1, i.e. three times the stake back.
pub const INSURANCE_RETURN: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandResult {
    Blackjack,
    Win,
    Push,
    Loss,
    Bust,
    /// Pays back `bet / 2` rounded down; an odd bet loses the extra unit.
    Surrendered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSettlement {
    pub hand_id: String,
    pub result: HandResult,
    pub bet: u64,
    pub payout: u64,
    pub net: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceSettlement {
    pub bet: u64,
    pub payout: u64,
    pub net: i64,
}

/// Totals of a settled round. `net_result` is what the wallet applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub total_wagered: u64,
    pub total_payout: u64,
    pub net_result: i64,
    pub hands: Vec<HandSettlement>,
    pub insurance: Option<InsuranceSettlement>,
    pub dealer_total: u32,
    pub dealer_bust: bool,
}

fn net(payout: u64, bet: u64) -> i64 {
    payout as i64 - bet as i64
}

fn blackjack_payout(bet: u64, multiplier: f64) -> u64 {
    bet + (bet as f64 * multiplier).floor() as u64
}

/// Outcome of a single hand against the final dealer hand.
pub fn settle_hand(round: &Round, hand: &Hand) -> HandSettlement {
    let bet = hand.bet;
    let dealer = &round.dealer.evaluation;
    let player_natural = round.flags.player_has_natural && !hand.has_split;
    let dealer_natural = round.flags.dealer_has_natural;
    let total = hand.evaluation.best_total;

    let (result, payout) = if hand.status == HandStatus::Surrendered {
        (HandResult::Surrendered, bet / 2)
    } else if hand.status == HandStatus::Bust || hand.evaluation.is_bust {
        (HandResult::Bust, 0)
    } else if player_natural && dealer_natural {
        (HandResult::Push, bet)
    } else if player_natural {
        (
            HandResult::Blackjack,
            blackjack_payout(bet, round.config.blackjack_payout),
        )
    } else if dealer_natural {
        (HandResult::Loss, 0)
    } else if dealer.is_bust || total > dealer.best_total {
        (HandResult::Win, bet * 2)
    } else if total == dealer.best_total {
        (HandResult::Push, bet)
    } else {
        (HandResult::Loss, 0)
    };

    HandSettlement {
        hand_id: hand.id.clone(),
        result,
        bet,
        payout,
        net: net(payout, bet),
    }
}

fn settle_insurance(round: &Round) -> Option<InsuranceSettlement> {
    if !round.player.insurance_taken {
        return None;
    }
    let bet = round.player.insurance_bet;
    let payout = if round.flags.dealer_has_natural {
        bet * INSURANCE_RETURN
    } else {
        0
    };
    Some(InsuranceSettlement {
        bet,
        payout,
        net: net(payout, bet),
    })
}

/// Computes payouts for a completed round and seals it as settled.
///
/// # Errors
///
/// [`GameError::PrematureSettlement`] unless the round is `completed`,
/// which includes rounds that are already settled.
pub fn settle_round(round: &Round) -> Result<Round, GameError> {
    if round.status != RoundStatus::Completed {
        return Err(GameError::PrematureSettlement {
            status: round.status,
        });
    }
    let mut next = round.clone();

    let hands: Vec<HandSettlement> = next
        .player
        .hands
        .iter()
        .map(|h| settle_hand(round, h))
        .collect();
    for (hand, s) in next.player.hands.iter_mut().zip(&hands) {
        hand.result = Some(s.result);
        hand.payout = Some(s.payout);
        hand.net = Some(s.net);
    }
    let insurance = settle_insurance(round);

    let total_payout = hands.iter().map(|h| h.payout).sum::<u64>()
        + insurance.as_ref().map_or(0, |i| i.payout);
    let total_wagered = next.bets.total_wager;
    let summary = RoundSummary {
        total_wagered,
        total_payout,
        net_result: net(total_payout, total_wagered),
        hands,
        insurance,
        dealer_total: next.dealer.evaluation.best_total,
        dealer_bust: next.dealer.evaluation.is_bust,
    };

    next.events.push(RoundEvent::Settled {
        total_wagered,
        total_payout,
        net_result: summary.net_result,
    });
    tracing::info!(
        round_id = %next.id,
        total_wagered,
        total_payout,
        net = summary.net_result,
        "round settled"
    );
    next.summary = Some(summary);
    next.status = RoundStatus::Settled;
    Ok(next)
}
