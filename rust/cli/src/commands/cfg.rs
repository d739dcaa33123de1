//! `cfg`: print the resolved configuration with the source of each value.
//!
//! ```json
//! {
//!   "bet": { "value": 100, "source": "default" },
//!   "decks": { "value": 6, "source": "env" },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };

    let t = &config.table;
    let display = serde_json::json!({
        "decks": { "value": t.decks, "source": sources.decks },
        "penetration": { "value": t.penetration, "source": sources.penetration },
        "dealer_hits_soft_17": {
            "value": t.dealer_hits_soft_17,
            "source": sources.dealer_hits_soft_17,
        },
        "allow_surrender": { "value": t.allow_surrender, "source": sources.allow_surrender },
        "rules": {
            "value": {
                "allow_double_after_split": t.allow_double_after_split,
                "allow_double_on_any_two": t.allow_double_on_any_two,
                "max_split_hands": t.max_split_hands,
                "blackjack_payout": t.blackjack_payout,
                "allow_resplit_aces": t.allow_resplit_aces,
                "allow_hit_split_aces": t.allow_hit_split_aces,
            },
            "source": sources.rules,
        },
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "bet": { "value": config.bet, "source": sources.bet },
        "seed": { "value": config.seed, "source": sources.seed },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
