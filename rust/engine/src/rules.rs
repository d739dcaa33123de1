use serde::{Deserialize, Serialize};

use crate::errors::GameError;

pub const MAX_DECKS: u8 = 8;

/// House rules for one round. Copied into the round at deal time so later
/// operations never depend on a caller-side config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub decks: u8,
    /// Fraction of the shoe dealt before the cut card (0, 1]
    pub penetration: f64,
    pub dealer_hits_soft_17: bool,
    pub allow_double_after_split: bool,
    pub allow_double_on_any_two: bool,
    pub allow_surrender: bool,
    pub max_split_hands: usize,
    /// Profit multiplier on a natural; 1.5 pays 3:2
    pub blackjack_payout: f64,
    pub allow_resplit_aces: bool,
    pub allow_hit_split_aces: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            decks: 6,
            penetration: 0.75,
            dealer_hits_soft_17: false,
            allow_double_after_split: true,
            allow_double_on_any_two: true,
            allow_surrender: true,
            max_split_hands: 4,
            blackjack_payout: 1.5,
            allow_resplit_aces: false,
            allow_hit_split_aces: false,
        }
    }
}

impl TableConfig {
    /// Rejects configurations the engine cannot deal from.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardroom_engine::rules::TableConfig;
    ///
    /// assert!(TableConfig::default().validate().is_ok());
    ///
    /// let bad = TableConfig { decks: 0, ..TableConfig::default() };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), GameError> {
        if self.decks == 0 || self.decks > MAX_DECKS {
            return Err(GameError::InvalidConfig(format!(
                "decks must be between 1 and {}, got {}",
                MAX_DECKS, self.decks
            )));
        }
        if !(self.penetration > 0.0 && self.penetration <= 1.0) {
            return Err(GameError::InvalidConfig(format!(
                "penetration must be in (0, 1], got {}",
                self.penetration
            )));
        }
        if self.max_split_hands == 0 {
            return Err(GameError::InvalidConfig(
                "max_split_hands must be >= 1".into(),
            ));
        }
        if !self.blackjack_payout.is_finite() || self.blackjack_payout <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "blackjack_payout must be positive, got {}",
                self.blackjack_payout
            )));
        }
        Ok(())
    }
}
