//! Compiled defaults for the `recite` binary.
//!
//! The library itself takes all parameters explicitly; these are only the
//! defaults the CLI falls back to when no flags are given.

/// Default seed sequence (the puzzle input).
pub const DEFAULT_SEED: [u32; 6] = [14, 1, 17, 0, 3, 20];

/// Default target turn count: thirty million turns.
pub const DEFAULT_TARGET: u32 = 30_000_000;

/// Default progress-reporting interval, in turns.
pub const DEFAULT_PROGRESS_INTERVAL: u32 = 100_000;
