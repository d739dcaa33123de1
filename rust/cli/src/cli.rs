//! Command-line definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cardroom",
    version,
    about = "Provably-fair blackjack: commit, deal, play, simulate and audit rounds"
)]
pub struct CardroomCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a server seed and print its commitment
    Commit {
        #[arg(long)]
        client_seed: Option<String>,
    },
    /// Check a revealed seed against a published hash
    Verify {
        #[arg(long)]
        seed: String,
        #[arg(long)]
        client_seed: String,
        #[arg(long)]
        public_hash: String,
    },
    /// Deal one round and print the client view as JSON
    Deal {
        #[arg(long)]
        server_seed: Option<String>,
        #[arg(long)]
        client_seed: Option<String>,
        #[arg(long)]
        nonce: Option<u64>,
        #[arg(long)]
        bet: Option<u64>,
    },
    /// Play rounds interactively from stdin
    Play {
        #[arg(long)]
        bet: Option<u64>,
        #[arg(long)]
        balance: Option<u64>,
        #[arg(long)]
        client_seed: Option<String>,
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
    /// Play rounds automatically and report aggregate results
    Sim {
        #[arg(long)]
        rounds: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        bet: Option<u64>,
        #[arg(long, default_value = "basic")]
        strategy: String,
        #[arg(long)]
        output: Option<String>,
    },
    /// Re-verify every round in a JSONL archive
    Audit {
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
