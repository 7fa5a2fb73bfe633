//! JSON API
//!
//! String-in/string-out boundary for host environments that integrate the
//! core through a serialization layer rather than linking against the Rust
//! types directly. Two surfaces:
//!
//! - `classify_json`: one detector frame -> gesture.
//! - `simulate_session_json`: a seeded session driven by a script of
//!   per-tick gesture frames -> round-by-round results and final scores.
//!   Same request string = same response string.

use serde::{Deserialize, Serialize};

use crate::classifier::{classify, extended_count, finger_states};
use crate::models::{Gesture, Hand, Landmark, Outcome, RoundResult, Scores};
use crate::session::{GameSession, SessionConfig, SessionPhase, DEFAULT_MAX_ROUNDS};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub schema_version: u8,
    pub landmarks: Vec<Landmark>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub schema_version: u8,
    pub gesture: Gesture,
    pub extended_count: u8,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub schema_version: u8,
    pub seed: u64,
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u8,
    #[serde(default)]
    pub difficulty: crate::models::Difficulty,
    /// Latest-gesture cache content at each scheduler tick; `null` means
    /// no recognizable hand was in frame.
    pub frames: Vec<Option<Gesture>>,
}

fn default_max_rounds() -> u8 {
    DEFAULT_MAX_ROUNDS
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub schema_version: u8,
    pub rounds: Vec<RoundResult>,
    pub scores: Scores,
    pub rounds_played: u8,
    /// Session-level outcome; present only when the game finished within
    /// the supplied frames.
    pub outcome: Option<Outcome>,
    pub finished: bool,
}

fn check_schema_version(found: u8) -> Result<(), String> {
    if found != SCHEMA_VERSION {
        return Err(format!(
            "unsupported schema_version: expected {}, got {}",
            SCHEMA_VERSION, found
        ));
    }
    Ok(())
}

/// Classify one frame of landmarks.
pub fn classify_json(request_json: &str) -> Result<String, String> {
    let request: ClassifyRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("invalid classify request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let hand = Hand::new(request.landmarks);
    let flags = finger_states(&hand).map_err(|e| e.to_string())?;
    let gesture = classify(&hand).map_err(|e| e.to_string())?;

    let response = ClassifyResponse {
        schema_version: SCHEMA_VERSION,
        gesture,
        extended_count: extended_count(flags) as u8,
    };
    serde_json::to_string(&response).map_err(|e| format!("serialization error: {}", e))
}

/// Run a full seeded session from scripted gesture frames.
pub fn simulate_session_json(request_json: &str) -> Result<String, String> {
    let request: SessionRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("invalid session request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let config =
        SessionConfig { max_rounds: request.max_rounds, difficulty: request.difficulty };
    let mut session = GameSession::with_seed(config, request.seed);
    session.start(config).map_err(|e| e.to_string())?;

    for frame in request.frames {
        // A null frame leaves the cache as-is: like the live detector
        // path, the cached gesture persists until overwritten.
        if let Some(gesture) = frame {
            session.observe_gesture(gesture);
        }
        session.tick();
        if session.phase() == SessionPhase::Finished {
            break;
        }
    }

    let finished = session.phase() == SessionPhase::Finished;
    let response = SessionResponse {
        schema_version: SCHEMA_VERSION,
        rounds: session.history().to_vec(),
        scores: session.scores(),
        rounds_played: session.current_round(),
        outcome: session.final_outcome(),
        finished,
    };
    serde_json::to_string(&response).map_err(|e| format!("serialization error: {}", e))
}
