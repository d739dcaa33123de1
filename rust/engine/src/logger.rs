use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::events::RoundEvent;
use crate::fairness::commit;
use crate::round::{Hand, Round, RoundStatus};
use crate::rules::TableConfig;
use crate::shoe::FairnessRecord;
use crate::settlement::RoundSummary;

/// Archived form of a settled round, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_id: String,
    /// Timestamp when the round was archived (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Published before play
    pub public_hash: String,
    /// Revealed seed material
    pub fairness: FairnessRecord,
    pub config: TableConfig,
    /// Every card drawn from the shoe, in draw order
    pub dealt: Vec<Card>,
    pub hands: Vec<Hand>,
    pub dealer_cards: Vec<Card>,
    pub summary: RoundSummary,
    pub events: Vec<RoundEvent>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl RoundRecord {
    /// Builds the archive record. Only settled, seeded rounds qualify.
    pub fn from_round(round: &Round) -> Result<Self, GameError> {
        if round.status != RoundStatus::Settled {
            return Err(GameError::PrematureSettlement {
                status: round.status,
            });
        }
        let fairness = round
            .shoe
            .fairness()
            .cloned()
            .ok_or_else(|| GameError::Commitment("round has no fairness record".into()))?;
        let summary = round
            .summary
            .clone()
            .ok_or_else(|| GameError::Commitment("settled round has no summary".into()))?;
        Ok(Self {
            round_id: round.id.clone(),
            ts: None,
            public_hash: commit(&fairness.server_seed, &fairness.client_seed).public_hash,
            fairness,
            config: round.config.clone(),
            dealt: round.shoe.cards()[..round.shoe.position()].to_vec(),
            hands: round.player.hands.clone(),
            dealer_cards: round.dealer.cards.clone(),
            summary,
            events: round.events.clone(),
            meta: round.meta.clone(),
        })
    }
}

/// JSONL writer for [`RoundRecord`]s.
pub struct RoundLogger {
    writer: Option<Box<dyn Write>>,
    written: u64,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self::with_writer(BufWriter::new(f)))
    }

    /// Logger over any sink, e.g. a compressing encoder.
    pub fn with_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            written: 0,
        }
    }

    /// Logger that formats records but writes nowhere.
    pub fn sink() -> Self {
        Self {
            writer: None,
            written: 0,
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Serializes one record, injecting `ts` if missing. Returns the line
    /// without its trailing LF.
    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<String> {
        let line = to_line(record)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        self.written += 1;
        Ok(line)
    }
}

/// One JSONL line for a record, with `ts` filled in when absent.
pub fn to_line(record: &RoundRecord) -> std::io::Result<String> {
    let mut rec = record.clone();
    if rec.ts.is_none() {
        rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    serde_json::to_string(&rec).map_err(std::io::Error::other)
}
