//! Mirrors the house: hit below 17, otherwise stand.

use crate::{pick, Strategy};
use cardroom_engine::actions::ActionKind;
use cardroom_engine::round::Round;

#[derive(Debug, Clone, Copy, Default)]
pub struct DealerMimic;

impl Strategy for DealerMimic {
    fn choose(&self, round: &Round, legal: &[ActionKind]) -> ActionKind {
        let total = round
            .active_hand()
            .map_or(21, |h| h.evaluation.best_total);
        if total < 17 {
            pick(legal, &[ActionKind::Hit, ActionKind::Stand])
        } else {
            pick(legal, &[ActionKind::Stand])
        }
    }

    fn name(&self) -> &str {
        "DealerMimic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardroom_engine::actions::available_actions;
    use cardroom_engine::cards::{Card, Rank as R, Suit as S};
    use cardroom_engine::round::{create_round_state, NewRound};
    use cardroom_engine::rules::TableConfig;
    use cardroom_engine::shoe::Shoe;

    fn round(p: [R; 2]) -> Round {
        let config = TableConfig::default();
        let cards = vec![
            Card::new(p[0], S::Spades),
            Card::new(R::Ten, S::Clubs),
            Card::new(p[1], S::Hearts),
            Card::new(R::Seven, S::Clubs),
        ];
        create_round_state(NewRound {
            round_id: "m".into(),
            shoe: Shoe::stacked(cards, &config),
            bet: 10,
            config,
            meta: None,
        })
        .unwrap()
    }

    #[test]
    fn hits_below_seventeen_only() {
        let r = round([R::Ten, R::Six]);
        assert_eq!(
            DealerMimic.choose(&r, &available_actions(&r, 100)),
            ActionKind::Hit
        );
        let r = round([R::Ten, R::Seven]);
        assert_eq!(
            DealerMimic.choose(&r, &available_actions(&r, 100)),
            ActionKind::Stand
        );
    }
}
