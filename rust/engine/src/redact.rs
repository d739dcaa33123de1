//! Client-safe projection of a round.
//!
//! The dealer's hole card, the shoe order and the server seed stay behind
//! until they may be shown: the hole card once revealed, the seed once the
//! round is settled.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::events::RoundEvent;
use crate::fairness::commit;
use crate::hand::{evaluate, HandEvaluation};
use crate::round::{Bets, Hand, Round, RoundStatus};
use crate::rules::TableConfig;
use crate::settlement::RoundSummary;

/// A card slot as seen by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CardView {
    Visible(Card),
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealerView {
    pub cards: Vec<CardView>,
    /// Evaluation of the visible cards only
    pub evaluation: HandEvaluation,
    pub hole_revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub hands: Vec<Hand>,
    pub active_hand_index: usize,
    pub insurance_bet: u64,
    pub insurance_taken: bool,
    pub surrendered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagsView {
    pub offer_insurance: bool,
    pub player_has_natural: bool,
    /// Only known to the client once the hole card is up
    pub dealer_has_natural: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessView {
    /// `SHA256(SHA256(server_seed + "-" + client_seed))`
    pub public_hash: Option<String>,
    pub client_seed: Option<String>,
    pub nonce: Option<u64>,
    /// Present only after settlement
    pub server_seed: Option<String>,
    pub shoe_hash: Option<String>,
    pub cards_remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactedRound {
    pub id: String,
    pub status: RoundStatus,
    pub dealer: DealerView,
    pub player: PlayerView,
    pub bets: Bets,
    pub flags: FlagsView,
    pub config: TableConfig,
    pub fairness: FairnessView,
    pub events: Vec<RoundEvent>,
    pub summary: Option<RoundSummary>,
}

/// Projects a round for transmission to the client. The input is untouched.
pub fn client_view(round: &Round) -> RedactedRound {
    let revealed = round.dealer.hole_revealed;
    let cards: Vec<CardView> = round
        .dealer
        .cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if revealed || i == 0 {
                CardView::Visible(*c)
            } else {
                CardView::Hidden
            }
        })
        .collect();
    let visible: Vec<Card> = cards
        .iter()
        .filter_map(|v| match v {
            CardView::Visible(c) => Some(*c),
            CardView::Hidden => None,
        })
        .collect();

    let settled = round.status == RoundStatus::Settled;
    let fairness = match round.shoe.fairness() {
        Some(rec) => FairnessView {
            public_hash: Some(commit(&rec.server_seed, &rec.client_seed).public_hash),
            client_seed: Some(rec.client_seed.clone()),
            nonce: Some(rec.nonce),
            server_seed: settled.then(|| rec.server_seed.clone()),
            shoe_hash: settled.then(|| rec.shoe_hash.clone()),
            cards_remaining: round.shoe.remaining(),
        },
        None => FairnessView {
            public_hash: None,
            client_seed: None,
            nonce: None,
            server_seed: None,
            shoe_hash: None,
            cards_remaining: round.shoe.remaining(),
        },
    };

    RedactedRound {
        id: round.id.clone(),
        status: round.status,
        dealer: DealerView {
            evaluation: evaluate(&visible),
            cards,
            hole_revealed: revealed,
        },
        player: PlayerView {
            hands: round.player.hands.clone(),
            active_hand_index: round.player.active_hand_index,
            insurance_bet: round.player.insurance_bet,
            insurance_taken: round.player.insurance_taken,
            surrendered: round.player.surrendered,
        },
        bets: round.bets.clone(),
        flags: FlagsView {
            offer_insurance: round.flags.offer_insurance,
            player_has_natural: round.flags.player_has_natural,
            dealer_has_natural: revealed.then_some(round.flags.dealer_has_natural),
        },
        config: round.config.clone(),
        fairness,
        events: round.events.clone(),
        summary: round.summary.clone(),
    }
}
