//! Outcome Judge
//!
//! Pure win/lose/draw judgment from the player's perspective. Callers
//! guarantee both gestures are recognized; unrecognized frames are
//! filtered upstream into skipped rounds and never reach the judge.

use crate::models::{Gesture, Outcome};

pub fn judge(player: Gesture, opponent: Gesture) -> Outcome {
    debug_assert!(player.is_recognized(), "judge requires a recognized player gesture");
    debug_assert!(opponent.is_recognized(), "judge requires a recognized opponent gesture");

    if player == opponent {
        Outcome::Draw
    } else if player.beats(opponent) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
