use crate::actions::{apply_player_action, available_actions, ActionKind};
use crate::dealer::play_dealer;
use crate::errors::GameError;
use crate::fairness::verify;
use crate::ids::{IdGenerator, SequentialIds};
use crate::redact::{client_view, RedactedRound};
use crate::round::{create_round_state, NewRound, Round};
use crate::rules::TableConfig;
use crate::settlement::settle_round;
use crate::shoe::{initialize_shoe, ShoeSeeds};

/// Everything needed to deal a fresh round.
#[derive(Debug, Clone)]
pub struct StartRound {
    pub server_seed: String,
    pub client_seed: String,
    pub nonce: u64,
    pub bet: u64,
    pub config: TableConfig,
    pub meta: Option<serde_json::Value>,
}

/// Entry point for callers. Holds only the injected id generator; every
/// round lives in the snapshots the caller passes back in.
///
/// Operations on different rounds may run in parallel. Operations on the
/// same round must be serialized by the caller, since each one consumes the
/// previous snapshot.
///
/// # Examples
///
/// ```
/// use cardroom_engine::engine::{Engine, StartRound};
/// use cardroom_engine::round::RoundStatus;
/// use cardroom_engine::rules::TableConfig;
///
/// let engine = Engine::default();
/// let round = engine
///     .start_round(StartRound {
///         server_seed: "server".into(),
///         client_seed: "client".into(),
///         nonce: 1,
///         bet: 100,
///         config: TableConfig::default(),
///         meta: None,
///     })
///     .expect("deal");
///
/// // Play every hand out by standing, then let the dealer finish.
/// let mut round = round;
/// while round.status == RoundStatus::PlayerTurn {
///     round = engine
///         .apply_player_action(&round, cardroom_engine::actions::ActionKind::Stand, 0)
///         .expect("stand");
/// }
/// let round = engine.play_dealer(&round).expect("dealer");
/// let settled = engine.settle_round(&round).expect("settle");
/// assert_eq!(settled.status, RoundStatus::Settled);
/// ```
pub struct Engine {
    ids: Box<dyn IdGenerator>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Box::new(SequentialIds::default()))
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

impl Engine {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Builds and shuffles the shoe, then deals the opening cards.
    pub fn start_round(&self, req: StartRound) -> Result<Round, GameError> {
        let shoe = initialize_shoe(
            ShoeSeeds {
                server_seed: &req.server_seed,
                client_seed: &req.client_seed,
                nonce: req.nonce,
            },
            &req.config,
        )?;
        create_round_state(NewRound {
            round_id: self.ids.next_round_id(),
            shoe,
            bet: req.bet,
            config: req.config,
            meta: req.meta,
        })
    }

    pub fn available_actions(&self, round: &Round, available_balance: u64) -> Vec<ActionKind> {
        available_actions(round, available_balance)
    }

    pub fn apply_player_action(
        &self,
        round: &Round,
        action: ActionKind,
        available_balance: u64,
    ) -> Result<Round, GameError> {
        apply_player_action(round, action, available_balance)
    }

    pub fn play_dealer(&self, round: &Round) -> Result<Round, GameError> {
        play_dealer(round)
    }

    pub fn settle_round(&self, round: &Round) -> Result<Round, GameError> {
        settle_round(round)
    }

    pub fn serialize(&self, round: &Round) -> RedactedRound {
        client_view(round)
    }

    pub fn verify_commitment(&self, seed: &str, client_seed: &str, public_hash: &str) -> bool {
        verify(seed, client_seed, public_hash)
    }
}
