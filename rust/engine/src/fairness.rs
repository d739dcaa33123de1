//! Provably-fair commitment scheme and keyed index derivation.
//!
//! Before a round starts the server picks a random seed and publishes
//! `public_hash = SHA256(SHA256(seed + "-" + client_seed))`. After settlement
//! the seed is revealed and anyone can recompute the chain with [`verify`].
//! All shuffle randomness comes from [`derive_index`], so the same seed
//! material always reproduces the same shoe.

use hmac::{Hmac, Mac};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::GameError;

type HmacSha256 = Hmac<Sha256>;

/// Number of random bytes in a freshly generated server seed.
pub const SEED_BYTES: usize = 32;

/// Published commitment for one round.
///
/// `seed` stays server-side until settlement; `public_hash` is what the
/// client sees before play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub seed: String,
    pub client_seed: String,
    pub hash: String,
    pub public_hash: String,
}

impl Commitment {
    /// Seed material revealed to the client once the round is settled.
    pub fn reveal(&self) -> Reveal {
        Reveal {
            seed: self.seed.clone(),
            client_seed: self.client_seed.clone(),
            public_hash: self.public_hash.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub seed: String,
    pub client_seed: String,
    pub public_hash: String,
}

pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Fresh hex-encoded server seed from the thread CSPRNG.
pub fn generate_seed() -> String {
    let mut bytes = [0u8; SEED_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn combined(seed: &str, client_seed: &str) -> String {
    format!("{}-{}", seed, client_seed)
}

/// Builds the commitment chain for a known server seed.
pub fn commit(seed: &str, client_seed: &str) -> Commitment {
    let hash = sha256_hex(&combined(seed, client_seed));
    let public_hash = sha256_hex(&hash);
    Commitment {
        seed: seed.to_string(),
        client_seed: client_seed.to_string(),
        hash,
        public_hash,
    }
}

/// Generates a random server seed and commits to it together with the
/// client-supplied fragment.
pub fn create_commitment(client_seed: &str) -> Commitment {
    commit(&generate_seed(), client_seed)
}

/// Recomputes the hash chain from a revealed seed and compares it with the
/// value published before play.
pub fn verify(seed: &str, client_seed: &str, public_hash: &str) -> bool {
    commit(seed, client_seed)
        .public_hash
        .eq_ignore_ascii_case(public_hash.trim())
}

/// Seed key that drives the shuffle of one shoe.
pub fn seed_key(server_seed: &str, client_seed: &str, nonce: u64) -> String {
    format!("{}-{}-{}", server_seed, client_seed, nonce)
}

/// Derives a uniform-ish index in `0..=modulus` from the seed key.
///
/// The message is `"{position}:{counter}"`, keyed with the seed key under
/// HMAC-SHA256; the first 40 bits of the digest are reduced modulo
/// `modulus + 1`.
pub fn derive_index(
    seed_key: &str,
    position: usize,
    counter: u64,
    modulus: usize,
) -> Result<usize, GameError> {
    let mut mac = HmacSha256::new_from_slice(seed_key.as_bytes())
        .map_err(|e| GameError::Commitment(e.to_string()))?;
    mac.update(format!("{}:{}", position, counter).as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut value: u64 = 0;
    for b in &digest[..5] {
        value = (value << 8) | u64::from(*b);
    }
    Ok((value % (modulus as u64 + 1)) as usize)
}
