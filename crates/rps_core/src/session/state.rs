//! Session State
//!
//! The mutable aggregate behind a game session. Owned exclusively by
//! `GameSession`; every mutation goes through the operations here so the
//! running invariant `scores.total() == current_round` holds at all times.

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, Gesture, Outcome, Scores};
use crate::session::SessionConfig;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Created or explicitly stopped/reset; no round may be consumed.
    Idle,
    /// Rounds are being consumed on each scheduler tick.
    Running,
    /// The configured round count is exhausted; final scores readable.
    Finished,
}

/// Aggregate game-progress state for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    phase: SessionPhase,
    current_round: u8,
    max_rounds: u8,
    difficulty: Difficulty,
    scores: Scores,
    /// Player gesture scored in the previous round; the opponent strategy
    /// adapts to this, never to the gesture being scored right now.
    last_observed_gesture: Option<Gesture>,
}

impl SessionState {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            phase: SessionPhase::Idle,
            current_round: 0,
            max_rounds: config.clamped_rounds(),
            difficulty: config.difficulty,
            scores: Scores::default(),
            last_observed_gesture: None,
        }
    }

    // ========================
    // Read accessors
    // ========================

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    pub fn max_rounds(&self) -> u8 {
        self.max_rounds
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn last_observed_gesture(&self) -> Option<Gesture> {
        self.last_observed_gesture
    }

    // ========================
    // Lifecycle operations
    // ========================

    /// Begin a fresh game with the given configuration. Zeroes all
    /// progress; the opponent starts with no memory of the player.
    pub(crate) fn activate(&mut self, config: SessionConfig) {
        self.max_rounds = config.clamped_rounds();
        self.difficulty = config.difficulty;
        self.current_round = 0;
        self.scores = Scores::default();
        self.last_observed_gesture = None;
        self.phase = SessionPhase::Running;
    }

    /// Early termination: back to Idle, tallies left readable.
    pub(crate) fn deactivate(&mut self) {
        self.phase = SessionPhase::Idle;
    }

    /// Back to Idle with progress zeroed; configuration is preserved.
    pub(crate) fn reset_progress(&mut self) {
        self.phase = SessionPhase::Idle;
        self.current_round = 0;
        self.scores = Scores::default();
        self.last_observed_gesture = None;
    }

    /// Record one scored round: bump the matching tally, remember the
    /// player's gesture for the next round's strategy, advance the round
    /// counter, and flip to Finished when the last round is consumed.
    ///
    /// Returns the 1-based index of the consumed round.
    pub(crate) fn record_round(&mut self, player: Gesture, outcome: Outcome) -> u8 {
        debug_assert!(self.is_running(), "record_round outside Running phase");

        match outcome {
            Outcome::Win => self.scores.win += 1,
            Outcome::Lose => self.scores.lose += 1,
            Outcome::Draw => self.scores.draw += 1,
        }
        self.last_observed_gesture = Some(player);
        self.current_round += 1;

        if self.current_round >= self.max_rounds {
            self.phase = SessionPhase::Finished;
        }

        self.current_round
    }
}
