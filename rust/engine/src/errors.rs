use thiserror::Error;

use crate::actions::ActionKind;
use crate::round::RoundStatus;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("Cannot {action} while round is {status} (active hand not playable)")]
    InvalidStateTransition {
        action: ActionKind,
        status: RoundStatus,
    },
    #[error("Illegal action {action}: {reason}")]
    IllegalAction {
        action: ActionKind,
        reason: String,
    },
    #[error("Insufficient balance: {required} required, {available} available")]
    InsufficientBalance { required: u64, available: u64 },
    #[error("Shoe depleted: cannot draw at position {position} of {len}")]
    ShoeDepleted { position: usize, len: usize },
    #[error("Cannot settle a round that is {status}")]
    PrematureSettlement { status: RoundStatus },
    #[error("Invalid bet amount: {amount}")]
    InvalidBet { amount: u64 },
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("Commitment error: {0}")]
    Commitment(String),
}
