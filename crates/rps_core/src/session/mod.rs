//! Game Session
//!
//! Top-level stateful object spanning Idle -> Running -> Finished across a
//! configured number of rounds. Owns the session state, the round
//! history, the latest-gesture cache written by the classifier path, and
//! a seeded RNG for the opponent strategy.
//!
//! The session never schedules anything itself: an external driver calls
//! `tick()` on a fixed cadence (conventionally `ROUND_INTERVAL` after a
//! `WARMUP_DELAY`) and forwards detector frames through `observe_hand`.

pub mod state;

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::engine::round::play_round;
use crate::error::{GameError, Result};
use crate::models::{
    Difficulty, Gesture, Hand, Outcome, RoundResult, Scores, SessionSummary, TickResult,
};

pub use state::{SessionPhase, SessionState};

/// Cadence the external scheduler is expected to use between ticks.
pub const ROUND_INTERVAL: Duration = Duration::from_secs(3);
/// Delay before the first tick, giving the player time to pose.
pub const WARMUP_DELAY: Duration = Duration::from_secs(1);

/// Valid round-count range; configs outside it are clamped.
pub const MIN_ROUNDS: u8 = 1;
pub const MAX_ROUNDS: u8 = 10;
pub const DEFAULT_MAX_ROUNDS: u8 = 5;

/// Per-game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub max_rounds: u8,
    pub difficulty: Difficulty,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_rounds: DEFAULT_MAX_ROUNDS, difficulty: Difficulty::default() }
    }
}

impl SessionConfig {
    /// Round count clamped to the supported [1,10] range.
    pub fn clamped_rounds(&self) -> u8 {
        self.max_rounds.clamp(MIN_ROUNDS, MAX_ROUNDS)
    }
}

/// One interactive rock-paper-scissors session.
pub struct GameSession {
    state: SessionState,
    rng: ChaCha8Rng,
    /// Latest classified gesture, overwritten on every detection frame and
    /// read by the next tick. Survives stop/reset: the detector keeps
    /// running regardless of the game lifecycle.
    latest_gesture: Option<Gesture>,
    history: Vec<RoundResult>,
    /// Most recent consumed-or-skipped tick, for presentation layers that
    /// poll instead of handling `tick()` return values.
    last_tick: Option<TickResult>,
}

impl GameSession {
    /// Create an idle session with a non-deterministic RNG.
    pub fn new(config: SessionConfig) -> Self {
        Self::from_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Create an idle session with a seeded RNG. Same seed + same gesture
    /// frames = same opponent choices and outcomes.
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::from_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(config: SessionConfig, rng: ChaCha8Rng) -> Self {
        Self {
            state: SessionState::new(config),
            rng,
            latest_gesture: None,
            history: Vec::new(),
            last_tick: None,
        }
    }

    // ========================
    // Lifecycle
    // ========================

    /// Begin a fresh game. Allowed from Idle or Finished; fails with
    /// `AlreadyRunning` while a game is in progress.
    pub fn start(&mut self, config: SessionConfig) -> Result<()> {
        if self.state.is_running() {
            return Err(GameError::AlreadyRunning);
        }

        self.history.clear();
        self.last_tick = None;
        self.state.activate(config);
        log::info!(
            "session started: {} rounds, difficulty {}",
            self.state.max_rounds(),
            self.state.difficulty()
        );
        Ok(())
    }

    /// Begin another game with the current configuration (Finished ->
    /// Running, the "play again" path).
    pub fn restart(&mut self) -> Result<()> {
        let config =
            SessionConfig { max_rounds: self.state.max_rounds(), difficulty: self.state.difficulty() };
        self.start(config)
    }

    /// Early termination: Running -> Idle. Idempotent; ticks after a stop
    /// are no-ops, so a scheduler that fires once more does no harm.
    pub fn stop(&mut self) {
        if self.state.is_running() {
            self.state.deactivate();
            log::info!("session stopped after {} rounds", self.state.current_round());
        }
    }

    /// Any state -> Idle with progress zeroed and history cleared.
    /// Difficulty and round count are preserved.
    pub fn reset(&mut self) {
        self.state.reset_progress();
        self.history.clear();
        self.last_tick = None;
        log::info!("session reset");
    }

    // ========================
    // Gesture intake
    // ========================

    /// Classify a detector frame and cache the result. Called once per
    /// detection frame; malformed hands leave the cache untouched.
    pub fn observe_hand(&mut self, hand: &Hand) -> Result<Gesture> {
        let gesture = classify(hand)?;
        self.latest_gesture = Some(gesture);
        Ok(gesture)
    }

    /// Cache a pre-classified gesture (for hosts running the classifier
    /// elsewhere, and for test drivers).
    pub fn observe_gesture(&mut self, gesture: Gesture) {
        self.latest_gesture = Some(gesture);
    }

    // ========================
    // Tick entry point
    // ========================

    /// Play one round if a game is running. The external scheduler calls
    /// this on a fixed cadence; all completion detection is synchronous.
    pub fn tick(&mut self) -> TickResult {
        if self.state.phase() == SessionPhase::Finished {
            return TickResult::Finished(self.summary());
        }

        let result = play_round(&mut self.state, self.latest_gesture, &mut self.rng);

        if matches!(result, TickResult::Round(_) | TickResult::Skipped) {
            self.last_tick = Some(result);
        }

        if let TickResult::Round(round) = result {
            self.history.push(round);
            if self.state.phase() == SessionPhase::Finished {
                let scores = self.state.scores();
                log::info!(
                    "session finished {}-{}-{} ({})",
                    scores.win,
                    scores.lose,
                    scores.draw,
                    scores.session_outcome()
                );
            }
        }

        result
    }

    // ========================
    // Read accessors
    // ========================

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn scores(&self) -> Scores {
        self.state.scores()
    }

    pub fn current_round(&self) -> u8 {
        self.state.current_round()
    }

    pub fn max_rounds(&self) -> u8 {
        self.state.max_rounds()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty()
    }

    pub fn latest_gesture(&self) -> Option<Gesture> {
        self.latest_gesture
    }

    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// The most recent played-or-skipped tick, if any this game.
    pub fn last_tick(&self) -> Option<TickResult> {
        self.last_tick
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Session-level outcome, available once the game has finished.
    pub fn final_outcome(&self) -> Option<Outcome> {
        match self.state.phase() {
            SessionPhase::Finished => Some(self.state.scores().session_outcome()),
            _ => None,
        }
    }

    /// Aggregate snapshot for the result screen.
    pub fn summary(&self) -> SessionSummary {
        let scores = self.state.scores();
        SessionSummary {
            scores,
            rounds_played: self.state.current_round(),
            outcome: scores.session_outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::test_fixtures::hand_with_fingers;

    fn test_config() -> SessionConfig {
        SessionConfig { max_rounds: 3, difficulty: Difficulty::Easy }
    }

    fn started_session(seed: u64) -> GameSession {
        let mut session = GameSession::with_seed(test_config(), seed);
        session.start(test_config()).expect("session start");
        session
    }

    #[test]
    fn new_session_is_idle() {
        let session = GameSession::with_seed(test_config(), 1);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(!session.is_running());
        assert_eq!(session.final_outcome(), None);
    }

    #[test]
    fn start_twice_fails_with_already_running() {
        let mut session = started_session(1);
        assert_eq!(session.start(test_config()), Err(GameError::AlreadyRunning));
    }

    #[test]
    fn tick_without_gesture_skips() {
        let mut session = started_session(1);
        assert_eq!(session.tick(), TickResult::Skipped);
        assert_eq!(session.current_round(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn idle_session_ignores_ticks() {
        let mut session = GameSession::with_seed(test_config(), 1);
        session.observe_gesture(Gesture::Rock);
        assert_eq!(session.tick(), TickResult::Idle);
        assert_eq!(session.current_round(), 0);
    }

    #[test]
    fn full_game_reaches_finished_with_consistent_scores() {
        let mut session = started_session(42);
        session.observe_gesture(Gesture::Rock);

        for _ in 0..3 {
            assert!(session.tick().is_round());
        }

        assert_eq!(session.phase(), SessionPhase::Finished);
        assert_eq!(session.scores().total(), 3);
        assert_eq!(session.current_round(), 3);
        assert_eq!(session.history().len(), 3);
        assert!(session.final_outcome().is_some());

        // A stray tick after full time reports the final aggregate.
        match session.tick() {
            TickResult::Finished(summary) => {
                assert_eq!(summary.rounds_played, 3);
                assert_eq!(summary.scores, session.scores());
            }
            other => panic!("expected Finished, got {:?}", other),
        }
    }

    #[test]
    fn same_seed_and_frames_reproduce_the_same_game() {
        let frames = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

        let run = |seed: u64| {
            let mut session = started_session(seed);
            for &g in &frames {
                session.observe_gesture(g);
                session.tick();
            }
            session.history().to_vec()
        };

        assert_eq!(run(7), run(7));
        // Sanity: the history is fully populated.
        assert_eq!(run(7).len(), 3);
    }

    #[test]
    fn stop_is_idempotent_and_freezes_progress() {
        let mut session = started_session(1);
        session.observe_gesture(Gesture::Paper);
        session.tick();

        session.stop();
        assert_eq!(session.phase(), SessionPhase::Idle);
        session.stop();
        assert_eq!(session.phase(), SessionPhase::Idle);

        let before = session.scores();
        assert_eq!(session.tick(), TickResult::Idle);
        assert_eq!(session.scores(), before);
        assert_eq!(session.current_round(), 1);
    }

    #[test]
    fn reset_clears_progress_but_keeps_configuration() {
        let mut session = GameSession::with_seed(
            SessionConfig { max_rounds: 7, difficulty: Difficulty::Hard },
            1,
        );
        session
            .start(SessionConfig { max_rounds: 7, difficulty: Difficulty::Hard })
            .expect("session start");
        session.observe_gesture(Gesture::Rock);
        session.tick();

        session.reset();

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.scores(), Scores::default());
        assert_eq!(session.current_round(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.max_rounds(), 7);
        assert_eq!(session.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn restart_from_finished_replays_with_same_configuration() {
        let mut session = started_session(5);
        session.observe_gesture(Gesture::Rock);
        for _ in 0..3 {
            session.tick();
        }
        assert_eq!(session.phase(), SessionPhase::Finished);

        session.restart().expect("restart from finished");
        assert!(session.is_running());
        assert_eq!(session.current_round(), 0);
        assert_eq!(session.max_rounds(), 3);
        assert!(session.history().is_empty());
    }

    #[test]
    fn observe_hand_classifies_and_caches() {
        let mut session = started_session(1);

        let scissors = hand_with_fingers([false, true, true, false, false]);
        assert_eq!(session.observe_hand(&scissors).unwrap(), Gesture::Scissors);
        assert_eq!(session.latest_gesture(), Some(Gesture::Scissors));

        // Malformed frames are rejected and leave the cache untouched.
        let malformed = Hand::new(vec![crate::models::Landmark::new(0.5, 0.5); 20]);
        assert!(session.observe_hand(&malformed).is_err());
        assert_eq!(session.latest_gesture(), Some(Gesture::Scissors));
    }

    #[test]
    fn unrecognized_cache_skips_round() {
        let mut session = started_session(1);
        session.observe_gesture(Gesture::Unrecognized);
        assert_eq!(session.tick(), TickResult::Skipped);
        assert_eq!(session.current_round(), 0);
    }

    #[test]
    fn last_tick_tracks_played_and_skipped_rounds() {
        let mut session = started_session(1);
        assert_eq!(session.last_tick(), None);

        session.tick();
        assert_eq!(session.last_tick(), Some(TickResult::Skipped));

        session.observe_gesture(Gesture::Rock);
        let played = session.tick();
        assert_eq!(session.last_tick(), Some(played));

        session.reset();
        assert_eq!(session.last_tick(), None);
    }
}
