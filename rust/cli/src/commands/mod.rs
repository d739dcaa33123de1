//! Command handlers, one module per subcommand.
//!
//! Each handler has the shape
//! `handle_<name>_command(..., out, err) -> Result<(), CliError>` and takes
//! its output streams as parameters so tests can capture them.

pub mod audit;
pub mod cfg;
pub mod commit;
pub mod deal;
pub mod play;
pub mod sim;
pub mod verify;

pub use audit::handle_audit_command;
pub use cfg::handle_cfg_command;
pub use commit::handle_commit_command;
pub use deal::handle_deal_command;
pub use play::{handle_play_command, PlayArgs};
pub use sim::{handle_sim_command, SimArgs};
pub use verify::handle_verify_command;
