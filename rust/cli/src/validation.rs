//! Input parsing and validation for interactive and batch commands.

use cardroom_engine::actions::ActionKind;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(ActionKind),
    /// User entered quit command (q or quit)
    Quit,
    Invalid(String),
}

/// Parses a player decision. Accepts full names and one-letter shortcuts,
/// case-insensitive.
///
/// ```rust
/// use cardroom_cli::validation::{parse_player_action, ParseResult};
/// use cardroom_engine::actions::ActionKind;
///
/// assert_eq!(parse_player_action("H"), ParseResult::Action(ActionKind::Hit));
/// assert_eq!(parse_player_action("split"), ParseResult::Action(ActionKind::Split));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// match parse_player_action("fold") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if input == "q" || input == "quit" {
        return ParseResult::Quit;
    }
    match input.parse::<ActionKind>() {
        Ok(action) => ParseResult::Action(action),
        Err(msg) => ParseResult::Invalid(format!(
            "{}. Valid actions: h, s, d, p, r, i, q",
            msg
        )),
    }
}

/// A bet must be positive and covered by the balance.
pub fn validate_bet(bet: u64, balance: u64) -> Result<(), String> {
    if bet == 0 {
        return Err("bet must be > 0".to_string());
    }
    if bet > balance {
        return Err(format!("bet {} exceeds balance {}", bet, balance));
    }
    Ok(())
}

pub fn validate_rounds(rounds: u64) -> Result<(), String> {
    if rounds == 0 {
        Err("rounds must be >= 1".to_string())
    } else {
        Ok(())
    }
}
