use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

pub const BLACKJACK: u32 = 21;

/// Derived view of a set of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEvaluation {
    /// Every distinct total reachable by counting each Ace as 1 or 11, ascending
    pub totals: Vec<u32>,
    pub best_total: u32,
    pub is_soft: bool,
    pub is_blackjack: bool,
    pub is_bust: bool,
}

/// Evaluates a blackjack hand.
///
/// Every Ace doubles the candidate set (1 or 11); other cards add their
/// value. The best total is the highest one not over 21, or the lowest one
/// when all of them bust.
///
/// # Examples
///
/// ```
/// use cardroom_engine::cards::{Card, Rank, Suit};
/// use cardroom_engine::hand::evaluate;
///
/// let eval = evaluate(&[
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Six, Suit::Hearts),
/// ]);
/// assert_eq!(eval.best_total, 17);
/// assert!(eval.is_soft);
/// assert!(!eval.is_blackjack);
/// ```
pub fn evaluate(cards: &[Card]) -> HandEvaluation {
    let mut totals: BTreeSet<u32> = BTreeSet::new();
    totals.insert(0);
    for card in cards {
        totals = if card.rank.is_ace() {
            totals.iter().flat_map(|t| [t + 1, t + 11]).collect()
        } else {
            totals.iter().map(|t| t + card.value()).collect()
        };
    }

    let min_total = totals.iter().next().copied().unwrap_or(0);
    let best_total = totals
        .iter()
        .rev()
        .find(|t| **t <= BLACKJACK)
        .copied()
        .unwrap_or(min_total);
    let is_soft = best_total >= 10
        && totals
            .iter()
            .any(|t| *t <= BLACKJACK && *t != best_total && *t == best_total - 10);

    HandEvaluation {
        totals: totals.into_iter().collect(),
        best_total,
        is_soft,
        is_blackjack: cards.len() == 2 && best_total == BLACKJACK,
        is_bust: min_total > BLACKJACK,
    }
}

/// Two cards of the same blackjack value (ten-valued cards pair with each other).
pub fn is_pair(cards: &[Card]) -> bool {
    cards.len() == 2 && cards[0].value() == cards[1].value()
}
