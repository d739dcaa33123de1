//! Multi-deck basic strategy, dealer stands on soft 17.
//!
//! Each chart cell names a preferred move and a fallback. Doubling falls
//! back to hit or stand once the hand has more than two cards, and
//! surrender falls back to hit. Insurance is never taken.

use crate::{pick, Strategy};
use cardroom_engine::actions::ActionKind;
use cardroom_engine::cards::{Card, Rank};
use cardroom_engine::round::{Hand, Round};

/// One chart cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Play {
    Hit,
    Stand,
    DoubleOrHit,
    DoubleOrStand,
    Split,
    SurrenderOrHit,
}

impl Play {
    fn preference(self) -> &'static [ActionKind] {
        use ActionKind::*;
        match self {
            Play::Hit => &[Hit, Stand],
            Play::Stand => &[Stand],
            Play::DoubleOrHit => &[Double, Hit, Stand],
            Play::DoubleOrStand => &[Double, Stand],
            Play::Split => &[Split, Hit, Stand],
            Play::SurrenderOrHit => &[Surrender, Hit, Stand],
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl BasicStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Dealer up-card as 2..=11, Ace counted 11.
    fn up_value(card: Card) -> u32 {
        if card.rank == Rank::Ace {
            11
        } else {
            card.value()
        }
    }

    fn pair_play(rank_value: u32, up: u32) -> Option<Play> {
        let split = match rank_value {
            1 | 8 => true,
            9 => !matches!(up, 7 | 10 | 11),
            7 | 2 | 3 => up <= 7,
            6 => up <= 6,
            4 => matches!(up, 5 | 6),
            _ => false,
        };
        split.then_some(Play::Split)
    }

    fn soft_play(total: u32, up: u32) -> Play {
        match total {
            13 | 14 if matches!(up, 5 | 6) => Play::DoubleOrHit,
            15 | 16 if (4..=6).contains(&up) => Play::DoubleOrHit,
            17 if (3..=6).contains(&up) => Play::DoubleOrHit,
            18 if (3..=6).contains(&up) => Play::DoubleOrStand,
            18 if up >= 9 => Play::Hit,
            18.. => Play::Stand,
            _ => Play::Hit,
        }
    }

    fn hard_play(total: u32, up: u32) -> Play {
        match total {
            16 if up >= 9 => Play::SurrenderOrHit,
            15 if up == 10 => Play::SurrenderOrHit,
            17.. => Play::Stand,
            13..=16 if up <= 6 => Play::Stand,
            12 if (4..=6).contains(&up) => Play::Stand,
            11 if up != 11 => Play::DoubleOrHit,
            10 if up <= 9 => Play::DoubleOrHit,
            9 if (3..=6).contains(&up) => Play::DoubleOrHit,
            _ => Play::Hit,
        }
    }

    fn play_for(hand: &Hand, up: u32, can_split: bool) -> Play {
        if can_split {
            if let Some(play) = Self::pair_play(hand.cards[0].value(), up) {
                return play;
            }
        }
        let eval = &hand.evaluation;
        if eval.is_soft {
            Self::soft_play(eval.best_total, up)
        } else {
            Self::hard_play(eval.best_total, up)
        }
    }
}

impl Strategy for BasicStrategy {
    fn choose(&self, round: &Round, legal: &[ActionKind]) -> ActionKind {
        let (hand, up) = match (round.active_hand(), round.dealer.up_card()) {
            (Some(h), Some(c)) => (h, Self::up_value(c)),
            _ => return pick(legal, &[ActionKind::Stand]),
        };
        let play = Self::play_for(hand, up, legal.contains(&ActionKind::Split));
        pick(legal, play.preference())
    }

    fn name(&self) -> &str {
        "BasicStrategy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardroom_engine::actions::available_actions;
    use cardroom_engine::cards::Suit as S;
    use cardroom_engine::round::{create_round_state, NewRound};
    use cardroom_engine::rules::TableConfig;
    use cardroom_engine::shoe::Shoe;

    fn round(p: [Rank; 2], up: Rank) -> Round {
        let config = TableConfig::default();
        let cards = vec![
            Card::new(p[0], S::Spades),
            Card::new(up, S::Clubs),
            Card::new(p[1], S::Hearts),
            // Hole card that never makes a dealer natural.
            Card::new(if up == Rank::Ace { Rank::Six } else { Rank::Two }, S::Clubs),
        ];
        create_round_state(NewRound {
            round_id: "b".into(),
            shoe: Shoe::stacked(cards, &config),
            bet: 10,
            config,
            meta: None,
        })
        .unwrap()
    }

    fn choose(p: [Rank; 2], up: Rank, balance: u64) -> ActionKind {
        let r = round(p, up);
        let legal = available_actions(&r, balance);
        let action = BasicStrategy.choose(&r, &legal);
        assert!(legal.contains(&action));
        action
    }

    #[test]
    fn always_splits_aces_and_eights() {
        assert_eq!(choose([Rank::Eight, Rank::Eight], Rank::Ten, 100), ActionKind::Split);
        assert_eq!(choose([Rank::Ace, Rank::Ace], Rank::Six, 100), ActionKind::Split);
    }

    #[test]
    fn never_splits_tens_or_fives() {
        assert_eq!(choose([Rank::King, Rank::Ten], Rank::Six, 100), ActionKind::Stand);
        assert_eq!(choose([Rank::Five, Rank::Five], Rank::Six, 100), ActionKind::Double);
    }

    #[test]
    fn doubles_eleven_unless_short() {
        assert_eq!(choose([Rank::Six, Rank::Five], Rank::Ten, 100), ActionKind::Double);
        assert_eq!(choose([Rank::Six, Rank::Five], Rank::Ten, 5), ActionKind::Hit);
        assert_eq!(choose([Rank::Six, Rank::Five], Rank::Ace, 100), ActionKind::Hit);
    }

    #[test]
    fn surrenders_sixteen_against_ten() {
        assert_eq!(choose([Rank::Ten, Rank::Six], Rank::Ten, 100), ActionKind::Surrender);
        assert_eq!(choose([Rank::Ten, Rank::Six], Rank::Six, 100), ActionKind::Stand);
    }

    #[test]
    fn soft_hands() {
        assert_eq!(choose([Rank::Ace, Rank::Seven], Rank::Two, 100), ActionKind::Stand);
        assert_eq!(choose([Rank::Ace, Rank::Seven], Rank::Five, 100), ActionKind::Double);
        assert_eq!(choose([Rank::Ace, Rank::Seven], Rank::Nine, 100), ActionKind::Hit);
        assert_eq!(choose([Rank::Ace, Rank::Two], Rank::Ten, 100), ActionKind::Hit);
    }

    #[test]
    fn never_insures() {
        let r = round([Rank::Ten, Rank::Nine], Rank::Ace);
        let legal = available_actions(&r, 100);
        assert!(legal.contains(&ActionKind::Insurance));
        assert_eq!(BasicStrategy.choose(&r, &legal), ActionKind::Stand);
    }
}
