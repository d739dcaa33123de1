//! # cardroom-ai: Automated Blackjack Players
//!
//! Strategies that pick a player action from a round snapshot. The CLI uses
//! them to drive simulations; they are deterministic, so a seeded simulation
//! replays identically.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Trait every automated player implements
//! - [`basic`] - Multi-deck basic strategy
//! - [`mimic`] - Plays the dealer's fixed policy
//! - [`create_strategy`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use cardroom_ai::create_strategy;
//! use cardroom_engine::engine::{Engine, StartRound};
//! use cardroom_engine::rules::TableConfig;
//!
//! let strategy = create_strategy("basic").expect("known strategy");
//! let engine = Engine::default();
//! let round = engine
//!     .start_round(StartRound {
//!         server_seed: "server".into(),
//!         client_seed: "client".into(),
//!         nonce: 1,
//!         bet: 10,
//!         config: TableConfig::default(),
//!         meta: None,
//!     })
//!     .expect("deal");
//!
//! let legal = engine.available_actions(&round, 100);
//! if !legal.is_empty() {
//!     let action = strategy.choose(&round, &legal);
//!     assert!(legal.contains(&action));
//! }
//! ```

use cardroom_engine::actions::ActionKind;
use cardroom_engine::round::Round;

pub mod basic;
pub mod mimic;

/// An automated player.
///
/// `choose` is only called while the round is in `player-turn` with a
/// non-empty `legal` list, and must return one of its entries.
pub trait Strategy: Send + Sync {
    fn choose(&self, round: &Round, legal: &[ActionKind]) -> ActionKind;

    fn name(&self) -> &str;
}

/// Names accepted by [`create_strategy`].
pub const STRATEGY_NAMES: [&str; 2] = ["basic", "mimic"];

/// Builds a strategy by name, or `None` for an unknown name.
///
/// ```rust
/// use cardroom_ai::create_strategy;
///
/// assert_eq!(create_strategy("basic").unwrap().name(), "BasicStrategy");
/// assert!(create_strategy("martingale").is_none());
/// ```
pub fn create_strategy(name: &str) -> Option<Box<dyn Strategy>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "basic" => Some(Box::new(basic::BasicStrategy::new())),
        "mimic" | "dealer" => Some(Box::new(mimic::DealerMimic)),
        _ => None,
    }
}

/// First of `preferred` that is legal, else the first legal action.
pub(crate) fn pick(legal: &[ActionKind], preferred: &[ActionKind]) -> ActionKind {
    preferred
        .iter()
        .copied()
        .find(|a| legal.contains(a))
        .or_else(|| legal.first().copied())
        .unwrap_or(ActionKind::Stand)
}
