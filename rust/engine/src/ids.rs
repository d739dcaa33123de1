use std::sync::atomic::{AtomicU64, Ordering};

/// Source of round identifiers, injected by the caller so dealing stays
/// independent of wall-clock time.
pub trait IdGenerator: Send + Sync {
    fn next_round_id(&self) -> String;
}

/// `prefix-NNNNNN`, counting up from 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("rnd")
    }
}

impl IdGenerator for SequentialIds {
    fn next_round_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format_round_id(&self.prefix, n)
    }
}

pub fn format_round_id(prefix: &str, seq: u64) -> String {
    format!("{}-{:06}", prefix, seq)
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_round_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
