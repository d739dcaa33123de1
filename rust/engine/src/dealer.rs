use crate::errors::GameError;
use crate::events::RoundEvent;
use crate::hand::HandEvaluation;
use crate::round::{HandStatus, Round, RoundStatus};

/// Dealer draws below 17, and on soft 17 when the table hits soft 17.
pub fn dealer_should_draw(eval: &HandEvaluation, hits_soft_17: bool) -> bool {
    eval.best_total < 17 || (eval.best_total == 17 && eval.is_soft && hits_soft_17)
}

/// Plays out the dealer hand once every player hand is resolved.
///
/// A no-op (returning an identical snapshot) unless the round is in
/// `dealer-turn`. The dealer skips drawing when no player hand is still
/// live or a natural was dealt.
pub fn play_dealer(round: &Round) -> Result<Round, GameError> {
    if round.status != RoundStatus::DealerTurn {
        return Ok(round.clone());
    }
    let mut next = round.clone();

    if !next.dealer.hole_revealed {
        next.dealer.hole_revealed = true;
        if let Some(&hole_card) = next.dealer.cards.get(1) {
            next.events.push(RoundEvent::DealerReveal {
                hole_card,
                total: next.dealer.evaluation.best_total,
            });
        }
    }

    let no_live_hands = next
        .player
        .hands
        .iter()
        .all(|h| matches!(h.status, HandStatus::Bust | HandStatus::Surrendered));
    let natural = next.flags.player_has_natural || next.flags.dealer_has_natural;

    if !(no_live_hands || natural) {
        while dealer_should_draw(&next.dealer.evaluation, next.config.dealer_hits_soft_17) {
            let card = next.shoe.draw()?;
            next.dealer.push_card(card);
            tracing::debug!(
                round_id = %next.id,
                card = %card,
                total = next.dealer.evaluation.best_total,
                "dealer draws"
            );
            next.events.push(RoundEvent::DealerDraw {
                card,
                total: next.dealer.evaluation.best_total,
            });
        }
    }

    next.events.push(RoundEvent::DealerStand {
        total: next.dealer.evaluation.best_total,
        bust: next.dealer.evaluation.is_bust,
    });
    next.status = RoundStatus::Completed;
    tracing::debug!(
        round_id = %next.id,
        total = next.dealer.evaluation.best_total,
        bust = next.dealer.evaluation.is_bust,
        "dealer complete"
    );
    Ok(next)
}
