mod helpers;

use cardroom_engine::actions::ActionKind;
use cardroom_engine::engine::{Engine, StartRound};
use cardroom_engine::hand::evaluate;
use cardroom_engine::redact::{client_view, CardView};
use cardroom_engine::round::{Round, RoundStatus};
use cardroom_engine::rules::TableConfig;
use serde_json::json;

const SERVER_SEED: &str = "9f86d081884c7d659a2feaa0c55ad015";

fn seeded(engine: &Engine) -> Round {
    engine
        .start_round(StartRound {
            server_seed: SERVER_SEED.into(),
            client_seed: "player-chosen".into(),
            nonce: 42,
            bet: 100,
            config: TableConfig::default(),
            meta: None,
        })
        .unwrap()
}

fn play_out(engine: &Engine, round: &Round) -> Round {
    let mut r = round.clone();
    while r.status == RoundStatus::PlayerTurn {
        r = engine.apply_player_action(&r, ActionKind::Stand, 0).unwrap();
    }
    let done = engine.play_dealer(&r).unwrap();
    engine.settle_round(&done).unwrap()
}

#[test]
fn hole_card_and_seed_hidden_during_play() {
    let engine = Engine::default();
    let round = seeded(&engine);
    if round.status != RoundStatus::PlayerTurn {
        // A natural reveals the hole card immediately; nothing to mask.
        return;
    }
    let before = round.clone();
    let view = engine.serialize(&round);
    assert_eq!(round, before, "projection must not touch the round");

    assert_eq!(view.dealer.cards[0], CardView::Visible(round.dealer.cards[0]));
    assert_eq!(view.dealer.cards[1], CardView::Hidden);
    assert_eq!(view.dealer.evaluation, evaluate(&round.dealer.cards[..1]));
    assert_eq!(view.flags.dealer_has_natural, None);
    assert_eq!(view.fairness.server_seed, None);
    assert_eq!(view.fairness.shoe_hash, None);
    assert_eq!(view.fairness.nonce, Some(42));
    assert_eq!(view.fairness.cards_remaining, 312 - 4);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["dealer"]["cards"][1], json!({ "state": "hidden" }));
    assert_eq!(json["status"], "player-turn");
    let text = json.to_string();
    assert!(!text.contains(SERVER_SEED));
    assert!(json.get("shoe").is_none());
}

#[test]
fn public_hash_verifies_after_settlement() {
    let engine = Engine::default();
    let round = seeded(&engine);
    let public_hash = engine
        .serialize(&round)
        .fairness
        .public_hash
        .expect("seeded rounds publish a hash");

    let settled = play_out(&engine, &round);
    let view = client_view(&settled);
    assert!(view.dealer.hole_revealed);
    assert!(view
        .dealer
        .cards
        .iter()
        .all(|c| matches!(c, CardView::Visible(_))));
    let revealed = view.fairness.server_seed.expect("seed revealed");
    assert_eq!(revealed, SERVER_SEED);
    assert!(engine.verify_commitment(&revealed, "player-chosen", &public_hash));
    assert!(view.summary.is_some());
}

#[test]
fn stacked_rounds_publish_no_commitment() {
    use cardroom_engine::cards::{Rank as R, Suit as S};
    let round = helpers::deal(
        [helpers::c(R::Ten, S::Spades), helpers::c(R::Six, S::Hearts)],
        [helpers::c(R::Ten, S::Clubs), helpers::c(R::Seven, S::Diamonds)],
        &[],
        100,
    );
    let view = client_view(&round);
    assert_eq!(view.fairness.public_hash, None);
    assert_eq!(view.fairness.cards_remaining, 0);
}
