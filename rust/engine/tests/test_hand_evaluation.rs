use cardroom_engine::cards::{all_ranks, Card, Rank as R, Suit as S};
use cardroom_engine::hand::evaluate;

fn c(r: R) -> Card {
    Card::new(r, S::Hearts)
}

#[test]
fn natural_is_blackjack_for_every_ten_value() {
    for r in [R::Ten, R::Jack, R::Queen, R::King] {
        let e = evaluate(&[c(R::Ace), c(r)]);
        assert!(e.is_blackjack, "A + {:?} should be a natural", r);
        assert_eq!(e.best_total, 21);
        let e = evaluate(&[c(r), c(R::Ace)]);
        assert!(e.is_blackjack, "{:?} + A should be a natural", r);
    }
}

#[test]
fn three_card_21_is_not_blackjack() {
    let e = evaluate(&[c(R::Seven), c(R::Seven), c(R::Seven)]);
    assert_eq!(e.best_total, 21);
    assert!(!e.is_blackjack);
    assert!(!e.is_soft);
}

#[test]
fn soft_hand_hardens_after_big_card() {
    let soft = evaluate(&[c(R::Ace), c(R::Six)]);
    assert_eq!(soft.best_total, 17);
    assert!(soft.is_soft);

    let hard = evaluate(&[c(R::Ace), c(R::Six), c(R::Nine)]);
    assert_eq!(hard.best_total, 16);
    assert!(!hard.is_soft);
    assert!(!hard.is_bust);
}

#[test]
fn bust_reports_minimum_total() {
    let e = evaluate(&[c(R::King), c(R::Queen), c(R::Five)]);
    assert!(e.is_bust);
    assert_eq!(e.best_total, 25);

    let e = evaluate(&[c(R::King), c(R::Queen), c(R::Ace)]);
    assert!(!e.is_bust, "ace counted low saves the hand");
    assert_eq!(e.best_total, 21);
}

#[test]
fn many_aces_collapse_to_distinct_totals() {
    let e = evaluate(&[c(R::Ace), c(R::Ace), c(R::Ace), c(R::Ace)]);
    assert_eq!(e.totals, vec![4, 14, 24, 34, 44]);
    assert_eq!(e.best_total, 14);
    assert!(e.is_soft);
}

#[test]
fn best_total_never_exceeds_21_unless_bust() {
    let ranks = all_ranks();
    for &a in &ranks {
        for &b in &ranks {
            let two = evaluate(&[c(a), c(b)]);
            assert!(two.best_total <= 21 || two.is_bust);
            if two.best_total == 21 {
                assert!(two.is_blackjack, "{:?}{:?} is a two-card 21", a, b);
            }
            for &x in &ranks {
                for &y in &ranks {
                    let e = evaluate(&[c(a), c(b), c(x), c(y)]);
                    assert!(
                        e.best_total <= 21 || e.is_bust,
                        "{:?} {:?} {:?} {:?} -> {:?}",
                        a,
                        b,
                        x,
                        y,
                        e
                    );
                    assert!(!e.is_blackjack);
                    if e.is_bust {
                        assert_eq!(e.best_total, e.totals[0]);
                    }
                }
            }
        }
    }
}
