use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::fairness::{derive_index, seed_key, sha256_hex};
use crate::rules::TableConfig;

/// Seed material a shoe was shuffled from, kept for post-hoc auditing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessRecord {
    pub server_seed: String,
    pub client_seed: String,
    pub nonce: u64,
    pub seed_key: String,
    /// SHA256 of `seed_key`
    pub shoe_hash: String,
}

/// Multi-deck stack of cards with a draw cursor.
///
/// Invariant: `0 <= position <= cards.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
    cut_card_position: usize,
    decks: u8,
    penetration: f64,
    fairness: Option<FairnessRecord>,
}

/// Inputs for [`initialize_shoe`].
#[derive(Debug, Clone)]
pub struct ShoeSeeds<'a> {
    pub server_seed: &'a str,
    pub client_seed: &'a str,
    pub nonce: u64,
}

/// `deck_count` ordered decks laid end to end.
pub fn build_deck(deck_count: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(52 * deck_count as usize);
    for _ in 0..deck_count {
        cards.extend(full_deck());
    }
    cards
}

/// Fisher-Yates from the last index down, one derived index per swap.
pub fn shuffle(cards: &mut [Card], seed_key: &str) -> Result<(), GameError> {
    let mut counter: u64 = 0;
    for i in (1..cards.len()).rev() {
        let j = derive_index(seed_key, i, counter, i)?;
        cards.swap(i, j);
        counter += 1;
    }
    Ok(())
}

fn cut_card(len: usize, penetration: f64) -> usize {
    (len as f64 * penetration).floor() as usize
}

/// Builds and shuffles a shoe from the server seed, client seed and nonce.
pub fn initialize_shoe(seeds: ShoeSeeds<'_>, config: &TableConfig) -> Result<Shoe, GameError> {
    config.validate()?;
    let key = seed_key(seeds.server_seed, seeds.client_seed, seeds.nonce);
    let mut cards = build_deck(config.decks);
    shuffle(&mut cards, &key)?;
    let cut_card_position = cut_card(cards.len(), config.penetration);
    tracing::debug!(
        decks = config.decks,
        cards = cards.len(),
        cut_card = cut_card_position,
        "shoe initialized"
    );
    Ok(Shoe {
        cards,
        position: 0,
        cut_card_position,
        decks: config.decks,
        penetration: config.penetration,
        fairness: Some(FairnessRecord {
            server_seed: seeds.server_seed.to_string(),
            client_seed: seeds.client_seed.to_string(),
            nonce: seeds.nonce,
            shoe_hash: sha256_hex(&key),
            seed_key: key,
        }),
    })
}

/// Returns the card at the cursor and the shoe advanced by one.
pub fn draw_card(shoe: &Shoe) -> Result<(Card, Shoe), GameError> {
    let mut next = shoe.clone();
    let card = next.draw()?;
    Ok((card, next))
}

impl Shoe {
    /// A shoe dealt in exactly the given order, with no fairness record.
    pub fn stacked(cards: Vec<Card>, config: &TableConfig) -> Self {
        let cut_card_position = cut_card(cards.len(), config.penetration);
        Self {
            cards,
            position: 0,
            cut_card_position,
            decks: config.decks,
            penetration: config.penetration,
            fairness: None,
        }
    }

    /// In-place draw used by the round state machine on its own copy.
    pub(crate) fn draw(&mut self) -> Result<Card, GameError> {
        match self.cards.get(self.position) {
            Some(&card) => {
                self.position += 1;
                Ok(card)
            }
            None => {
                tracing::warn!(
                    position = self.position,
                    len = self.cards.len(),
                    "draw past end of shoe"
                );
                Err(GameError::ShoeDepleted {
                    position: self.position,
                    len: self.cards.len(),
                })
            }
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn cut_card_position(&self) -> usize {
        self.cut_card_position
    }

    /// True once the cursor has reached the cut card.
    pub fn needs_reshuffle(&self) -> bool {
        self.position >= self.cut_card_position
    }

    pub fn decks(&self) -> u8 {
        self.decks
    }

    pub fn penetration(&self) -> f64 {
        self.penetration
    }

    pub fn fairness(&self) -> Option<&FairnessRecord> {
        self.fairness.as_ref()
    }
}
