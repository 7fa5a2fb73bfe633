//! Core data model: hands on the input side, gestures in the middle,
//! round results on the output side.

pub mod gesture;
pub mod hand;
pub mod round;

pub use gesture::{Difficulty, Gesture, Outcome};
pub use hand::{Finger, Hand, Landmark, HAND_LANDMARK_COUNT};
pub use round::{RoundResult, Scores, SessionSummary, TickResult};
