//! Round engine: opponent strategy, outcome judging, and the per-tick
//! round orchestration that mutates session state.

pub mod judge;
pub mod round;
pub mod strategy;

pub use judge::judge;
pub use round::play_round;
pub use strategy::choose_opponent_gesture;
