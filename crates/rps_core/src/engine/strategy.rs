//! Opponent Strategy
//!
//! Chooses the computer's gesture for a round. Two-stage draw: a
//! counter-play roll against the difficulty's probability, then a uniform
//! pick when the roll (or a missing/unrecognized previous gesture) falls
//! through. The previous gesture is always the one scored in the prior
//! round; the opponent never sees the gesture being scored this tick.

use rand::Rng;

use crate::models::{Difficulty, Gesture};

/// Choose the opponent's gesture.
///
/// Draws the counter-play roll unconditionally so the number of samples
/// consumed per call is the same for every difficulty, which keeps seeded
/// sequences comparable across tiers.
pub fn choose_opponent_gesture(
    difficulty: Difficulty,
    last_player_gesture: Option<Gesture>,
    rng: &mut impl Rng,
) -> Gesture {
    let roll = rng.gen::<f32>();

    if let Some(counter) = last_player_gesture.and_then(|g| g.counter()) {
        if roll < difficulty.counter_play_probability() {
            return counter;
        }
    }

    Gesture::REAL[rng.gen_range(0..Gesture::REAL.len())]
}
