//! Round state machine: the snapshot every operation consumes and returns.
//!
//! Status only moves forward: `player-turn -> dealer-turn -> completed ->
//! settled`. A round dealt with a natural on either side starts at
//! `dealer-turn` with the hole card already revealed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::actions::ActionKind;
use crate::cards::Card;
use crate::errors::GameError;
use crate::events::RoundEvent;
use crate::hand::{evaluate, is_pair, HandEvaluation, BLACKJACK};
use crate::redact::CardView;
use crate::rules::TableConfig;
use crate::settlement::{HandResult, RoundSummary};
use crate::shoe::Shoe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundStatus {
    PlayerTurn,
    DealerTurn,
    Completed,
    Settled,
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundStatus::PlayerTurn => "player-turn",
            RoundStatus::DealerTurn => "dealer-turn",
            RoundStatus::Completed => "completed",
            RoundStatus::Settled => "settled",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandStatus {
    Playing,
    Stood,
    Bust,
    Blackjack,
    Surrendered,
}

impl HandStatus {
    pub fn is_terminal(self) -> bool {
        self != HandStatus::Playing
    }
}

/// One player hand. Split hands are siblings in [`PlayerState::hands`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub id: String,
    pub cards: Vec<Card>,
    pub bet: u64,
    pub status: HandStatus,
    pub evaluation: HandEvaluation,
    pub can_split: bool,
    pub has_doubled: bool,
    pub has_split: bool,
    /// Set on hands born from split Aces when resplitting Aces is off
    #[serde(default)]
    pub resplit_locked: bool,
    pub result: Option<HandResult>,
    pub payout: Option<u64>,
    pub net: Option<i64>,
    pub actions: Vec<ActionKind>,
}

impl Hand {
    pub fn new(id: String, cards: Vec<Card>, bet: u64) -> Self {
        let mut hand = Self {
            id,
            evaluation: evaluate(&cards),
            cards,
            bet,
            status: HandStatus::Playing,
            can_split: false,
            has_doubled: false,
            has_split: false,
            resplit_locked: false,
            result: None,
            payout: None,
            net: None,
            actions: Vec::new(),
        };
        hand.refresh();
        hand
    }

    pub(crate) fn push_card(&mut self, card: Card) {
        self.cards.push(card);
        self.refresh();
    }

    pub(crate) fn refresh(&mut self) {
        self.evaluation = evaluate(&self.cards);
        self.can_split = is_pair(&self.cards) && !self.resplit_locked;
    }

    /// Marks the hand bust or stood once it can take no more useful cards.
    /// Returns true when the hand became terminal.
    pub(crate) fn close_if_done(&mut self) -> bool {
        if self.evaluation.is_bust {
            self.status = HandStatus::Bust;
        } else if self.evaluation.best_total >= BLACKJACK {
            self.status = HandStatus::Stood;
        }
        self.status.is_terminal()
    }

    pub(crate) fn close(&mut self) {
        self.status = if self.evaluation.is_bust {
            HandStatus::Bust
        } else {
            HandStatus::Stood
        };
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealerState {
    pub cards: Vec<Card>,
    pub evaluation: HandEvaluation,
    pub hole_revealed: bool,
}

impl DealerState {
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub(crate) fn push_card(&mut self, card: Card) {
        self.cards.push(card);
        self.evaluation = evaluate(&self.cards);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub hands: Vec<Hand>,
    pub active_hand_index: usize,
    pub insurance_bet: u64,
    pub insurance_taken: bool,
    pub surrendered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bets {
    pub base_bet: u64,
    /// Sum of every hand's bet plus the insurance wager
    pub total_wager: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundFlags {
    pub offer_insurance: bool,
    pub player_has_natural: bool,
    pub dealer_has_natural: bool,
}

/// Complete snapshot of one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    pub status: RoundStatus,
    pub dealer: DealerState,
    pub player: PlayerState,
    pub bets: Bets,
    pub flags: RoundFlags,
    pub config: TableConfig,
    pub shoe: Shoe,
    pub events: Vec<RoundEvent>,
    pub summary: Option<RoundSummary>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    #[serde(default)]
    pub next_hand_seq: u32,
}

/// Inputs for [`create_round_state`].
#[derive(Debug, Clone)]
pub struct NewRound {
    pub round_id: String,
    pub shoe: Shoe,
    pub bet: u64,
    pub config: TableConfig,
    pub meta: Option<serde_json::Value>,
}

/// Deals the opening four cards and decides where the round starts.
///
/// Cards come off the shoe in the fixed order player, dealer, player,
/// dealer.
pub fn create_round_state(input: NewRound) -> Result<Round, GameError> {
    let NewRound {
        round_id,
        mut shoe,
        bet,
        config,
        meta,
    } = input;
    config.validate()?;
    if bet == 0 {
        return Err(GameError::InvalidBet { amount: bet });
    }

    let p1 = shoe.draw()?;
    let d1 = shoe.draw()?;
    let p2 = shoe.draw()?;
    let d2 = shoe.draw()?;

    let hand_id = format!("{}-h1", round_id);
    let mut hand = Hand::new(hand_id.clone(), vec![p1, p2], bet);
    let dealer_cards = vec![d1, d2];
    let dealer_eval = evaluate(&dealer_cards);

    let player_has_natural = hand.evaluation.is_blackjack;
    let dealer_has_natural = dealer_eval.is_blackjack;
    let any_natural = player_has_natural || dealer_has_natural;

    if player_has_natural {
        hand.status = HandStatus::Blackjack;
    } else if dealer_has_natural {
        hand.status = HandStatus::Stood;
    }

    let mut round = Round {
        id: round_id,
        status: if any_natural {
            RoundStatus::DealerTurn
        } else {
            RoundStatus::PlayerTurn
        },
        dealer: DealerState {
            cards: dealer_cards,
            evaluation: dealer_eval,
            hole_revealed: any_natural,
        },
        player: PlayerState {
            hands: vec![hand],
            active_hand_index: 0,
            insurance_bet: 0,
            insurance_taken: false,
            surrendered: false,
        },
        bets: Bets {
            base_bet: bet,
            total_wager: bet,
        },
        flags: RoundFlags {
            offer_insurance: d1.rank.is_ace(),
            player_has_natural,
            dealer_has_natural,
        },
        config,
        shoe,
        events: Vec::new(),
        summary: None,
        meta,
        next_hand_seq: 1,
    };

    round.events.push(RoundEvent::Deal {
        hand_id,
        player_cards: vec![p1, p2],
        dealer_cards: vec![CardView::Visible(d1), CardView::Hidden],
        bet,
    });
    if any_natural {
        round.events.push(RoundEvent::DealerReveal {
            hole_card: d2,
            total: round.dealer.evaluation.best_total,
        });
    }

    tracing::info!(
        round_id = %round.id,
        bet,
        status = %round.status,
        player_natural = player_has_natural,
        dealer_natural = dealer_has_natural,
        "round dealt"
    );
    Ok(round)
}

impl Round {
    pub fn active_hand(&self) -> Option<&Hand> {
        self.player.hands.get(self.player.active_hand_index)
    }

    pub(crate) fn active_hand_mut(&mut self) -> Option<&mut Hand> {
        self.player.hands.get_mut(self.player.active_hand_index)
    }

    pub(crate) fn next_hand_id(&mut self) -> String {
        self.next_hand_seq += 1;
        format!("{}-h{}", self.id, self.next_hand_seq)
    }

    /// Moves to the next playable hand, or hands control to the dealer
    /// when none is left.
    pub(crate) fn advance(&mut self) {
        let start = self.player.active_hand_index + 1;
        let next = self
            .player
            .hands
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, h)| h.status == HandStatus::Playing)
            .map(|(i, _)| i);
        match next {
            Some(i) => self.player.active_hand_index = i,
            None => {
                self.status = RoundStatus::DealerTurn;
                tracing::debug!(round_id = %self.id, "all hands resolved, dealer to act");
            }
        }
    }

    /// Recomputes the wager total from its parts.
    pub fn computed_total_wager(&self) -> u64 {
        self.player.hands.iter().map(|h| h.bet).sum::<u64>() + self.player.insurance_bet
    }

    pub fn is_settled(&self) -> bool {
        self.status == RoundStatus::Settled
    }
}
