//! # Recitation — memory-game simulator
//!
//! Plays the number game "speak the gap since this number was last spoken"
//! to a large turn count (tens of millions) and reports the last spoken
//! value.
//!
//! ## Rules
//!
//! An ordered seed sequence is spoken first, one number per turn. Every turn
//! after that considers the most recently spoken number:
//!
//! - if it had never been spoken before that turn, the next number is `0`;
//! - otherwise the next number is the gap between the two most recent turns
//!   on which it was spoken.
//!
//! The result of a run is the number spoken on the final turn.
//!
//! ## Data-structure choice
//!
//! The hot path is one history lookup plus one history update per turn, tens
//! of millions of times. Hashing every access dominates the runtime, so
//! [`history::NumberHistory`] is a hybrid: a dense table preallocated at the
//! target turn count (every in-game gap is strictly below the turn count, so
//! it absorbs essentially all traffic) with a `HashMap` fallback for the rare
//! seed value outside that range. Each [`types::NumberRecord`] packs its two
//! optional turn indices into 8 bytes.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Compiled defaults: puzzle seed, target, progress interval |
//! | [`types`] | [`types::NumberRecord`] — per-number speaking history |
//! | [`history`] | [`history::NumberHistory`] — dense + sparse record store |
//! | [`engine`] | [`engine::GameEngine`] — seeding, turn loop, run report |

pub mod constants;
pub mod engine;
pub mod history;
pub mod types;

pub use engine::{play, GameEngine, GameError};
