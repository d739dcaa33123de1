//! Exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Any failure: bad input, rejected action, failed audit, I/O.
pub const ERROR: i32 = 2;

/// Stopped early (Ctrl+C convention).
pub const INTERRUPTED: i32 = 130;
