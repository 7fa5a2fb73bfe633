//! # rps_core - Gesture-Driven Rock-Paper-Scissors Game Core
//!
//! This library infers the player's hand gesture from tracked hand
//! landmarks and plays timed rounds against a computer opponent whose
//! strategy varies by difficulty.
//!
//! ## Features
//! - Pure 21-landmark gesture classification (rock / scissors / paper)
//! - Difficulty-tiered opponent with injectable, seedable randomness
//!   (same seed = same game)
//! - Round-based session state machine (Idle -> Running -> Finished)
//!   driven by an external scheduler tick
//! - JSON API for easy integration with camera/UI hosts
//!
//! Camera acquisition, the landmark detector itself, and all rendering
//! are external collaborators; this crate only consumes their output.

pub mod api;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod models;
pub mod session;

// Re-export main API functions
pub use api::{classify_json, simulate_session_json};
pub use error::{GameError, Result};

// Re-export the classifier entry points
pub use classifier::{classify, finger_states, FingerFlags};

// Re-export core model types
pub use models::{
    Difficulty, Finger, Gesture, Hand, Landmark, Outcome, RoundResult, Scores, SessionSummary,
    TickResult, HAND_LANDMARK_COUNT,
};

// Re-export engine entry points
pub use engine::{choose_opponent_gesture, judge, play_round};

// Re-export session types
pub use session::{
    GameSession, SessionConfig, SessionPhase, SessionState, DEFAULT_MAX_ROUNDS, MAX_ROUNDS,
    MIN_ROUNDS, ROUND_INTERVAL, WARMUP_DELAY,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scripted_request(seed: u64) -> String {
        json!({
            "schema_version": 1,
            "seed": seed,
            "max_rounds": 5,
            "difficulty": "hard",
            "frames": ["rock", "rock", "paper", null, "scissors", "paper", "rock"]
        })
        .to_string()
    }

    #[test]
    fn test_basic_session_simulation() {
        let result = simulate_session_json(&scripted_request(42));
        assert!(result.is_ok(), "simulation should succeed");

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["finished"], true);
        assert_eq!(parsed["rounds_played"], 5);
        assert!(parsed["scores"]["win"].is_number());
        assert!(parsed["scores"]["lose"].is_number());
        assert!(parsed["scores"]["draw"].is_number());
    }

    #[test]
    fn test_determinism() {
        let request = scripted_request(999);

        let result1 = simulate_session_json(&request).unwrap();
        let result2 = simulate_session_json(&request).unwrap();

        assert_eq!(result1, result2, "Same seed should produce same result");
    }

    #[test]
    fn test_seed_changes_the_game() {
        // Different seeds may coincide on a short script, so compare a
        // batch: at least one of several seeds must diverge from seed 0.
        let baseline = simulate_session_json(&scripted_request(0)).unwrap();
        let diverged =
            (1..10).any(|seed| simulate_session_json(&scripted_request(seed)).unwrap() != baseline);
        assert!(diverged, "opponent play should depend on the seed");
    }

    #[test]
    fn test_classify_frame_end_to_end() {
        // Open palm: every fingertip above its base knuckle.
        let mut landmarks: Vec<serde_json::Value> =
            (0..21).map(|_| json!({"x": 0.5, "y": 0.6})).collect();
        for tip in [4, 8, 12, 16, 20] {
            landmarks[tip] = json!({"x": 0.5, "y": 0.2});
        }
        let request = json!({ "schema_version": 1, "landmarks": landmarks }).to_string();

        let response = classify_json(&request).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["gesture"], "paper");
        assert_eq!(parsed["extended_count"], 5);
    }
}
