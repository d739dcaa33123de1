//! Action processor: the legal-action set and the transitions it guards.
//!
//! Legality and application share one check, so an action is listed by
//! [`available_actions`] exactly when [`apply_player_action`] would accept it
//! with the same balance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::Card;
use crate::errors::GameError;
use crate::events::RoundEvent;
use crate::round::{Hand, HandStatus, Round, RoundStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Hit,
    Stand,
    Double,
    Split,
    Surrender,
    Insurance,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Hit,
        ActionKind::Stand,
        ActionKind::Double,
        ActionKind::Split,
        ActionKind::Surrender,
        ActionKind::Insurance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Hit => "hit",
            ActionKind::Stand => "stand",
            ActionKind::Double => "double",
            ActionKind::Split => "split",
            ActionKind::Surrender => "surrender",
            ActionKind::Insurance => "insurance",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hit" | "h" => Ok(ActionKind::Hit),
            "stand" | "s" => Ok(ActionKind::Stand),
            "double" | "d" => Ok(ActionKind::Double),
            "split" | "p" => Ok(ActionKind::Split),
            "surrender" | "r" => Ok(ActionKind::Surrender),
            "insurance" | "i" => Ok(ActionKind::Insurance),
            other => Err(format!("Unrecognized action: {}", other)),
        }
    }
}

fn illegal(action: ActionKind, reason: &str) -> GameError {
    GameError::IllegalAction {
        action,
        reason: reason.to_string(),
    }
}

fn require_balance(required: u64, available: u64) -> Result<(), GameError> {
    if available < required {
        Err(GameError::InsufficientBalance {
            required,
            available,
        })
    } else {
        Ok(())
    }
}

fn actionable_hand(round: &Round, action: ActionKind) -> Result<&Hand, GameError> {
    let invalid = GameError::InvalidStateTransition {
        action,
        status: round.status,
    };
    if round.status != RoundStatus::PlayerTurn {
        return Err(invalid);
    }
    match round.active_hand() {
        Some(hand) if hand.status == HandStatus::Playing => Ok(hand),
        _ => Err(invalid),
    }
}

/// Checks one action against the current snapshot and balance.
pub fn check_action(
    round: &Round,
    action: ActionKind,
    available_balance: u64,
) -> Result<(), GameError> {
    let hand = actionable_hand(round, action)?;
    let cfg = &round.config;
    match action {
        ActionKind::Hit | ActionKind::Stand => Ok(()),
        ActionKind::Double => {
            if hand.has_doubled {
                return Err(illegal(action, "hand has already doubled"));
            }
            if hand.cards.len() != 2 {
                return Err(illegal(action, "double requires exactly two cards"));
            }
            if !cfg.allow_double_on_any_two {
                return Err(illegal(action, "doubling is not allowed at this table"));
            }
            if hand.has_split && !cfg.allow_double_after_split {
                return Err(illegal(action, "double after split is not allowed"));
            }
            require_balance(hand.bet, available_balance)
        }
        ActionKind::Split => {
            if !hand.can_split {
                return Err(illegal(action, "hand is not a splittable pair"));
            }
            if round.player.hands.len() >= cfg.max_split_hands {
                return Err(illegal(action, "maximum number of split hands reached"));
            }
            require_balance(hand.bet, available_balance)
        }
        ActionKind::Surrender => {
            if !cfg.allow_surrender {
                return Err(illegal(action, "surrender is not allowed at this table"));
            }
            if !hand.actions.is_empty() || hand.has_split {
                return Err(illegal(action, "surrender is only allowed as the first decision"));
            }
            Ok(())
        }
        ActionKind::Insurance => {
            if !round.flags.offer_insurance || round.player.insurance_taken {
                return Err(illegal(action, "insurance is not on offer"));
            }
            if !hand.actions.is_empty() {
                return Err(illegal(action, "insurance must be taken before acting on the hand"));
            }
            require_balance(hand.bet / 2, available_balance)
        }
    }
}

/// Legal actions for the active hand, in a stable order.
///
/// Empty unless the round is in `player-turn` and the active hand is still
/// playing.
pub fn available_actions(round: &Round, available_balance: u64) -> Vec<ActionKind> {
    ActionKind::ALL
        .into_iter()
        .filter(|a| check_action(round, *a, available_balance).is_ok())
        .collect()
}

/// Applies one player decision and returns the next snapshot.
///
/// The input is never modified; on error the caller keeps using it.
pub fn apply_player_action(
    round: &Round,
    action: ActionKind,
    available_balance: u64,
) -> Result<Round, GameError> {
    if let Err(e) = check_action(round, action, available_balance) {
        tracing::warn!(
            round_id = %round.id,
            action = %action,
            status = %round.status,
            error = %e,
            "player action rejected"
        );
        return Err(e);
    }

    let mut next = round.clone();
    match action {
        ActionKind::Hit => hit(&mut next)?,
        ActionKind::Stand => stand(&mut next),
        ActionKind::Double => double(&mut next)?,
        ActionKind::Split => split(&mut next)?,
        ActionKind::Surrender => surrender(&mut next),
        ActionKind::Insurance => insurance(&mut next),
    }
    debug_assert_eq!(next.bets.total_wager, next.computed_total_wager());

    tracing::debug!(
        round_id = %next.id,
        action = %action,
        status = %next.status,
        active_hand = next.player.active_hand_index,
        "player action applied"
    );
    Ok(next)
}

fn record(round: &mut Round, action: ActionKind, card: Option<Card>) {
    let idx = round.player.active_hand_index;
    let hand = &round.player.hands[idx];
    round.events.push(RoundEvent::PlayerAction {
        hand_id: hand.id.clone(),
        action,
        card,
        total: hand.evaluation.best_total,
        status: hand.status,
    });
}

fn hit(round: &mut Round) -> Result<(), GameError> {
    let card = round.shoe.draw()?;
    let done = match round.active_hand_mut() {
        Some(hand) => {
            hand.push_card(card);
            hand.actions.push(ActionKind::Hit);
            hand.close_if_done()
        }
        None => false,
    };
    record(round, ActionKind::Hit, Some(card));
    if done {
        round.advance();
    }
    Ok(())
}

fn stand(round: &mut Round) {
    if let Some(hand) = round.active_hand_mut() {
        hand.status = HandStatus::Stood;
        hand.actions.push(ActionKind::Stand);
    }
    record(round, ActionKind::Stand, None);
    round.advance();
}

fn double(round: &mut Round) -> Result<(), GameError> {
    let card = round.shoe.draw()?;
    let mut added = 0;
    if let Some(hand) = round.active_hand_mut() {
        added = hand.bet;
        hand.bet *= 2;
        hand.has_doubled = true;
        hand.push_card(card);
        hand.actions.push(ActionKind::Double);
        hand.close();
    }
    round.bets.total_wager += added;
    record(round, ActionKind::Double, Some(card));
    round.advance();
    Ok(())
}

fn split(round: &mut Round) -> Result<(), GameError> {
    let idx = round.player.active_hand_index;
    let new_id = round.next_hand_id();
    let allow_resplit_aces = round.config.allow_resplit_aces;
    let allow_hit_split_aces = round.config.allow_hit_split_aces;

    let first_draw = round.shoe.draw()?;
    let second_draw = round.shoe.draw()?;

    let original = &mut round.player.hands[idx];
    let moved = match original.cards.pop() {
        Some(card) => card,
        None => return Err(illegal(ActionKind::Split, "hand has no cards")),
    };
    let aces = moved.rank.is_ace();
    let bet = original.bet;

    original.has_split = true;
    original.resplit_locked = aces && !allow_resplit_aces;
    original.actions.push(ActionKind::Split);
    original.push_card(first_draw);

    let mut sibling = Hand::new(new_id.clone(), vec![moved], bet);
    sibling.has_split = true;
    sibling.resplit_locked = original.resplit_locked;
    sibling.actions.push(ActionKind::Split);
    sibling.push_card(second_draw);

    if aces && !allow_hit_split_aces {
        original.close();
        sibling.close();
    } else {
        original.close_if_done();
        sibling.close_if_done();
    }
    let original_id = original.id.clone();
    let closed = original.status.is_terminal();

    round.player.hands.insert(idx + 1, sibling);
    round.bets.total_wager += bet;
    round.events.push(RoundEvent::Split {
        hand_id: original_id,
        new_hand_id: new_id,
        bet,
    });
    if closed {
        round.advance();
    }
    Ok(())
}

fn surrender(round: &mut Round) {
    if let Some(hand) = round.active_hand_mut() {
        hand.status = HandStatus::Surrendered;
        hand.actions.push(ActionKind::Surrender);
    }
    round.player.surrendered = true;
    record(round, ActionKind::Surrender, None);
    round.advance();
}

fn insurance(round: &mut Round) {
    let (hand_id, amount) = match round.active_hand_mut() {
        Some(hand) => {
            // Counts as the hand's first decision, so surrender is gone.
            hand.actions.push(ActionKind::Insurance);
            (hand.id.clone(), hand.bet / 2)
        }
        None => return,
    };
    round.player.insurance_bet = amount;
    round.player.insurance_taken = true;
    round.flags.offer_insurance = false;
    round.bets.total_wager += amount;
    round.events.push(RoundEvent::Insurance { hand_id, amount });
}
