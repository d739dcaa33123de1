//! # cardroom-engine: Provably-Fair Blackjack Round Engine
//!
//! Runs a single round of casino blackjack end to end: shoe construction,
//! dealing, player decisions, dealer automation and settlement. Every shuffle
//! is derived from a committed seed so outcomes can be verified afterwards.
//!
//! The engine is stateless between calls. Each operation takes a [`round::Round`]
//! snapshot and returns a new one; the input is never mutated, so a failed
//! operation leaves the caller's snapshot exactly as it was.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and deck construction
//! - [`fairness`] - Seed commitment, verification and keyed index derivation
//! - [`shoe`] - Multi-deck shoe, deterministic shuffle and draw cursor
//! - [`hand`] - Hand totals, softness, blackjack and bust detection
//! - [`round`] - Round snapshot and the opening deal
//! - [`actions`] - Legal actions and player transitions
//! - [`dealer`] - Dealer draw-to-17 policy
//! - [`settlement`] - Payouts and round summary
//! - [`redact`] - Client-safe projection with the hole card masked
//! - [`engine`] - Caller-facing facade
//! - [`logger`] / [`audit`] - Round archive and post-hoc verification
//!
//! ## Quick Start
//!
//! ```rust
//! use cardroom_engine::cards::{Card, Rank, Suit};
//! use cardroom_engine::hand::evaluate;
//!
//! let eval = evaluate(&[
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//! ]);
//! assert!(eval.is_blackjack);
//! assert_eq!(eval.best_total, 21);
//! ```
//!
//! ## Provably Fair
//!
//! ```rust
//! use cardroom_engine::fairness::{create_commitment, verify};
//!
//! let c = create_commitment("my-client-seed");
//! // publish c.public_hash, play the round, then reveal c.seed
//! assert!(verify(&c.seed, "my-client-seed", &c.public_hash));
//! ```

pub mod actions;
pub mod audit;
pub mod cards;
pub mod dealer;
pub mod engine;
pub mod errors;
pub mod events;
pub mod fairness;
pub mod hand;
pub mod ids;
pub mod logger;
pub mod logging;
pub mod redact;
pub mod round;
pub mod rules;
pub mod settlement;
pub mod shoe;
