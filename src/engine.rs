//! Game engine — seeds the history and drives the turn loop.
//!
//! A run has two phases. Seeding consumes the fixed initial sequence, one
//! number per turn, entirely inside [`GameEngine::new`]. Playing then
//! computes every subsequent number from the history of the most recently
//! spoken one: the gap between its two most recent turns, or `0` if it had
//! only been spoken once. [`GameEngine::run`] loops to the target turn count
//! and returns the final spoken number.

use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::history::NumberHistory;

/// Invalid simulation parameters, reported to the caller before any turn runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The seed sequence is empty.
    EmptySeed,
    /// The target turn count does not leave room for a single played turn.
    TargetTooSmall { target: u32, seed_len: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EmptySeed => write!(f, "seed sequence must not be empty"),
            GameError::TargetTooSmall { target, seed_len } => write!(
                f,
                "target turn count {} must exceed seed length {}",
                target, seed_len
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Simulation state: history, last spoken number, turn counter.
///
/// All mutable state is owned by this value; running several engines in the
/// same process (as the test suite does) cannot interfere.
pub struct GameEngine {
    history: NumberHistory,
    last_spoken: u32,
    turns_played: u32,
    target: u32,
}

impl GameEngine {
    /// Validate parameters and speak the seed sequence, one number per turn.
    ///
    /// The dense table is sized to `target`: every played number is a turn
    /// gap strictly below the turn count, so only seed values `>= target`
    /// ever reach the sparse fallback. Repeated seed values are fine; each
    /// occurrence shifts that number's record like any other turn.
    pub fn new(seed: &[u32], target: u32) -> Result<Self, GameError> {
        if seed.is_empty() {
            return Err(GameError::EmptySeed);
        }
        if target as usize <= seed.len() {
            return Err(GameError::TargetTooSmall {
                target,
                seed_len: seed.len(),
            });
        }

        let mut engine = Self {
            history: NumberHistory::new(target as usize),
            last_spoken: 0,
            turns_played: 0,
            target,
        };
        for &number in seed {
            engine.history.record_turn(number, engine.turns_played);
            engine.last_spoken = number;
            engine.turns_played += 1;
        }
        Ok(engine)
    }

    /// Play one turn; returns the number spoken.
    #[inline(always)]
    pub fn step(&mut self) -> u32 {
        debug_assert!(!self.is_done(), "step past target {}", self.target);
        let spoken = self.history.get_or_create(self.last_spoken).gap().unwrap_or(0);
        self.history.record_turn(spoken, self.turns_played);
        self.last_spoken = spoken;
        self.turns_played += 1;
        spoken
    }

    /// Play to the target turn count; returns the final spoken number.
    pub fn run(&mut self) -> u32 {
        while !self.is_done() {
            self.step();
        }
        self.last_spoken
    }

    /// Like [`run`](Self::run), printing a progress line every `interval`
    /// turns. Purely observational; the result is identical to `run`.
    pub fn run_with_progress(&mut self, interval: u32) -> u32 {
        let interval = interval.max(1);
        while !self.is_done() {
            if self.turns_played % interval == 0 {
                println!(
                    "turn {:>10} / {} ({} sparse entries)",
                    self.turns_played,
                    self.target,
                    self.history.sparse_len()
                );
            }
            self.step();
        }
        self.last_spoken
    }

    /// Number spoken on the most recent turn.
    pub fn last_spoken(&self) -> u32 {
        self.last_spoken
    }

    /// Turns executed so far (seed turns included).
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Configured target turn count.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// True once the target turn count has been reached.
    pub fn is_done(&self) -> bool {
        self.turns_played == self.target
    }

    /// The underlying record store.
    pub fn history(&self) -> &NumberHistory {
        &self.history
    }
}

/// Run a full game: the number spoken at turn index `target - 1`.
pub fn play(seed: &[u32], target: u32) -> Result<u32, GameError> {
    Ok(GameEngine::new(seed, target)?.run())
}

/// Summary of one completed run, for the `--output` JSON file.
#[derive(Serialize)]
pub struct RunReport {
    pub seed: Vec<u32>,
    pub target: u32,
    pub result: u32,
    pub elapsed_ms: f64,
    pub turns_per_second: f64,
    pub dense_size: usize,
    pub sparse_entries: usize,
}

impl RunReport {
    /// Build a report from a finished engine and its wall-clock start time.
    pub fn from_run(seed: &[u32], engine: &GameEngine, started: Instant) -> Self {
        let elapsed = started.elapsed().as_secs_f64();
        Self {
            seed: seed.to_vec(),
            target: engine.target(),
            result: engine.last_spoken(),
            elapsed_ms: elapsed * 1000.0,
            turns_per_second: engine.turns_played() as f64 / elapsed.max(f64::EPSILON),
            dense_size: engine.history().dense_size(),
            sparse_entries: engine.history().sparse_len(),
        }
    }
}

/// Write a run report as pretty JSON, creating parent directories.
pub fn save_report(report: &RunReport, path: &str) -> std::io::Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report).expect("Failed to serialize run report");
    std::fs::write(path, json)
}
