use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;
use crate::cards::Card;
use crate::redact::CardView;
use crate::round::HandStatus;

/// One entry of a round's chronological event log.
///
/// Nothing here leaks the dealer's hole card before [`RoundEvent::DealerReveal`],
/// so the log can be sent to the client as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    Deal {
        hand_id: String,
        player_cards: Vec<Card>,
        /// Up-card followed by a hidden placeholder
        dealer_cards: Vec<CardView>,
        bet: u64,
    },
    PlayerAction {
        hand_id: String,
        action: ActionKind,
        card: Option<Card>,
        total: u32,
        status: HandStatus,
    },
    Split {
        hand_id: String,
        new_hand_id: String,
        bet: u64,
    },
    Insurance {
        hand_id: String,
        amount: u64,
    },
    DealerReveal {
        hole_card: Card,
        total: u32,
    },
    DealerDraw {
        card: Card,
        total: u32,
    },
    DealerStand {
        total: u32,
        bust: bool,
    },
    Settled {
        total_wagered: u64,
        total_payout: u64,
        net_result: i64,
    },
}
