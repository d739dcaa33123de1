//! Layered configuration: defaults, then a TOML file named by
//! `CARDROOM_CONFIG`, then `CARDROOM_*` environment overrides.
//!
//! ```toml
//! starting_balance = 5000
//! bet = 25
//! seed = 7
//!
//! [table]
//! decks = 8
//! dealer_hits_soft_17 = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;

use cardroom_engine::rules::TableConfig;

pub const CONFIG_ENV: &str = "CARDROOM_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub table: TableConfig,
    pub starting_balance: u64,
    pub bet: u64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            starting_balance: 10_000,
            bet: 100,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub decks: ValueSource,
    pub penetration: ValueSource,
    pub dealer_hits_soft_17: ValueSource,
    pub allow_surrender: ValueSource,
    /// The remaining table rules, which only the file can change
    pub rules: ValueSource,
    pub starting_balance: ValueSource,
    pub bet: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            decks: ValueSource::Default,
            penetration: ValueSource::Default,
            dealer_hits_soft_17: ValueSource::Default,
            allow_surrender: ValueSource::Default,
            rules: ValueSource::Default,
            starting_balance: ValueSource::Default,
            bet: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env_value(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        apply_file(&mut cfg, &mut sources, f);
    }

    if let Some(v) = env_value("CARDROOM_DECKS") {
        cfg.table.decks = parse_env("CARDROOM_DECKS", &v)?;
        sources.decks = ValueSource::Env;
    }
    if let Some(v) = env_value("CARDROOM_PENETRATION") {
        cfg.table.penetration = parse_env("CARDROOM_PENETRATION", &v)?;
        sources.penetration = ValueSource::Env;
    }
    if let Some(v) = env_value("CARDROOM_H17") {
        cfg.table.dealer_hits_soft_17 = parse_bool(&v)
            .ok_or_else(|| ConfigError::Invalid("Invalid CARDROOM_H17".into()))?;
        sources.dealer_hits_soft_17 = ValueSource::Env;
    }
    if let Some(v) = env_value("CARDROOM_SURRENDER") {
        cfg.table.allow_surrender = parse_bool(&v)
            .ok_or_else(|| ConfigError::Invalid("Invalid CARDROOM_SURRENDER".into()))?;
        sources.allow_surrender = ValueSource::Env;
    }
    if let Some(v) = env_value("CARDROOM_BALANCE") {
        cfg.starting_balance = parse_env("CARDROOM_BALANCE", &v)?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Some(v) = env_value("CARDROOM_BET") {
        cfg.bet = parse_env("CARDROOM_BET", &v)?;
        sources.bet = ValueSource::Env;
    }
    if let Some(v) = env_value("CARDROOM_SEED") {
        cfg.seed = Some(parse_env("CARDROOM_SEED", &v)?);
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileTable {
    decks: Option<u8>,
    penetration: Option<f64>,
    dealer_hits_soft_17: Option<bool>,
    allow_double_after_split: Option<bool>,
    allow_double_on_any_two: Option<bool>,
    allow_surrender: Option<bool>,
    max_split_hands: Option<usize>,
    blackjack_payout: Option<f64>,
    allow_resplit_aces: Option<bool>,
    allow_hit_split_aces: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    table: Option<FileTable>,
    #[serde(default)]
    starting_balance: Option<u64>,
    #[serde(default)]
    bet: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
}

fn apply_file(cfg: &mut Config, sources: &mut ConfigSources, f: FileConfig) {
    fn set<T>(slot: &mut T, value: Option<T>, source: &mut ValueSource) {
        if let Some(v) = value {
            *slot = v;
            *source = ValueSource::File;
        }
    }

    let t = f.table.unwrap_or_default();
    let table = &mut cfg.table;
    set(&mut table.decks, t.decks, &mut sources.decks);
    set(&mut table.penetration, t.penetration, &mut sources.penetration);
    set(
        &mut table.dealer_hits_soft_17,
        t.dealer_hits_soft_17,
        &mut sources.dealer_hits_soft_17,
    );
    set(
        &mut table.allow_surrender,
        t.allow_surrender,
        &mut sources.allow_surrender,
    );
    set(
        &mut table.allow_double_after_split,
        t.allow_double_after_split,
        &mut sources.rules,
    );
    set(
        &mut table.allow_double_on_any_two,
        t.allow_double_on_any_two,
        &mut sources.rules,
    );
    set(&mut table.max_split_hands, t.max_split_hands, &mut sources.rules);
    set(&mut table.blackjack_payout, t.blackjack_payout, &mut sources.rules);
    set(
        &mut table.allow_resplit_aces,
        t.allow_resplit_aces,
        &mut sources.rules,
    );
    set(
        &mut table.allow_hit_split_aces,
        t.allow_hit_split_aces,
        &mut sources.rules,
    );

    set(
        &mut cfg.starting_balance,
        f.starting_balance,
        &mut sources.starting_balance,
    );
    set(&mut cfg.bet, f.bet, &mut sources.bet);
    if let Some(seed) = f.seed {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::File;
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    if cfg.starting_balance == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_balance must be >0".into(),
        ));
    }
    if cfg.bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: bet must be >0".into(),
        ));
    }
    Ok(())
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, value)))
}

pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
