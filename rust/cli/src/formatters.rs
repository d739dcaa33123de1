//! Card, hand and action formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal supports it and fall back to
//! `h d c s` otherwise.
//!
//! ```rust
//! use cardroom_engine::cards::{Card, Rank, Suit};
//! use cardroom_cli::formatters::format_card;
//!
//! let ace = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace) == "A♠" || format_card(&ace) == "As");
//! ```

use cardroom_engine::actions::ActionKind;
use cardroom_engine::cards::{Card, Suit};
use cardroom_engine::redact::{CardView, DealerView};
use cardroom_engine::round::Hand;
use cardroom_engine::settlement::HandResult;

/// Windows consoles outside modern terminals get ASCII suits; everything
/// else gets Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(card.suit))
}

pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// `10♠ 6♥ (16)`, with a marker for soft, blackjack and bust hands.
pub fn format_hand(hand: &Hand) -> String {
    let e = &hand.evaluation;
    let marker = if e.is_blackjack {
        " blackjack"
    } else if e.is_bust {
        " bust"
    } else if e.is_soft {
        " soft"
    } else {
        ""
    };
    format!(
        "{} ({}{})",
        format_cards(&hand.cards),
        e.best_total,
        marker
    )
}

/// Dealer cards as the client sees them, hole card shown as `??`.
pub fn format_dealer(view: &DealerView) -> String {
    let cards: Vec<String> = view
        .cards
        .iter()
        .map(|c| match c {
            CardView::Visible(card) => format_card(card),
            CardView::Hidden => "??".to_string(),
        })
        .collect();
    format!("{} ({})", cards.join(" "), view.evaluation.best_total)
}

/// Prompt label with the shortcut key in brackets.
pub fn format_action(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Hit => "[h]it",
        ActionKind::Stand => "[s]tand",
        ActionKind::Double => "[d]ouble",
        ActionKind::Split => "s[p]lit",
        ActionKind::Surrender => "su[r]render",
        ActionKind::Insurance => "[i]nsurance",
    }
}

pub fn format_actions(actions: &[ActionKind]) -> String {
    actions
        .iter()
        .map(|a| format_action(*a))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_result(result: HandResult) -> &'static str {
    match result {
        HandResult::Blackjack => "BLACKJACK",
        HandResult::Win => "WIN",
        HandResult::Push => "PUSH",
        HandResult::Loss => "LOSS",
        HandResult::Bust => "BUST",
        HandResult::Surrendered => "SURRENDER",
    }
}
