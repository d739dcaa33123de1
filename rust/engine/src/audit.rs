//! Post-hoc verification of archived rounds.
//!
//! Given the revealed seeds, anyone can rebuild the shoe and check that the
//! round was dealt from it and matches what was committed to.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::fairness::{seed_key, sha256_hex, verify};
use crate::logger::RoundRecord;
use crate::shoe::{initialize_shoe, ShoeSeeds};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub round_id: String,
    pub public_hash_ok: bool,
    pub shoe_hash_ok: bool,
    /// Dealt cards are the prefix of the rebuilt shoe
    pub shoe_order_ok: bool,
    /// Hands and dealer cards account for exactly the dealt cards
    pub cards_ok: bool,
}

impl AuditReport {
    pub fn is_ok(&self) -> bool {
        self.public_hash_ok && self.shoe_hash_ok && self.shoe_order_ok && self.cards_ok
    }
}

fn counts<'a>(cards: impl Iterator<Item = &'a Card>) -> HashMap<Card, usize> {
    let mut m = HashMap::new();
    for c in cards {
        *m.entry(*c).or_insert(0) += 1;
    }
    m
}

/// Rebuilds the shoe from the revealed seeds and checks the record against it.
pub fn audit_round(record: &RoundRecord) -> Result<AuditReport, GameError> {
    let f = &record.fairness;
    let public_hash_ok = verify(&f.server_seed, &f.client_seed, &record.public_hash);

    let key = seed_key(&f.server_seed, &f.client_seed, f.nonce);
    let shoe_hash_ok = key == f.seed_key && sha256_hex(&key) == f.shoe_hash;

    let shoe = initialize_shoe(
        ShoeSeeds {
            server_seed: &f.server_seed,
            client_seed: &f.client_seed,
            nonce: f.nonce,
        },
        &record.config,
    )?;
    let n = record.dealt.len();
    let shoe_order_ok = n <= shoe.len() && shoe.cards()[..n] == record.dealt[..];

    // Opening deal order is player, dealer, player, dealer.
    let dealer_ok = n >= 4
        && record.dealer_cards.len() >= 2
        && record.dealer_cards[0] == record.dealt[1]
        && record.dealer_cards[1] == record.dealt[3];
    let held = record
        .hands
        .iter()
        .flat_map(|h| h.cards.iter())
        .chain(record.dealer_cards.iter());
    let cards_ok = dealer_ok && counts(held) == counts(record.dealt.iter());

    let report = AuditReport {
        round_id: record.round_id.clone(),
        public_hash_ok,
        shoe_hash_ok,
        shoe_order_ok,
        cards_ok,
    };
    if !report.is_ok() {
        tracing::warn!(round_id = %report.round_id, ?report, "round failed audit");
    }
    Ok(report)
}
