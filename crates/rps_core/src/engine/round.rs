//! Round Engine
//!
//! Orchestrates one scheduler tick: read the cached gesture, draw the
//! opponent's choice, judge the exchange, and advance the session state.
//! A round is only consumed when the player produced a recognizable
//! gesture; everything else leaves every counter untouched.

use rand::Rng;

use crate::engine::judge::judge;
use crate::engine::strategy::choose_opponent_gesture;
use crate::models::{Gesture, RoundResult, TickResult};
use crate::session::state::SessionState;

/// Play one round against the session state.
///
/// A call outside the Running phase is a no-op (`TickResult::Idle`), not
/// an error: a stray tick after stop/finish has nothing to do.
pub fn play_round(
    state: &mut SessionState,
    latest_gesture: Option<Gesture>,
    rng: &mut impl Rng,
) -> TickResult {
    if !state.is_running() {
        return TickResult::Idle;
    }

    let player = match latest_gesture {
        Some(g) if g.is_recognized() => g,
        _ => {
            log::debug!("tick skipped: no recognizable gesture cached");
            return TickResult::Skipped;
        }
    };

    // The strategy adapts to the gesture scored in the previous round;
    // it must be drawn before this round's gesture enters the state.
    let opponent =
        choose_opponent_gesture(state.difficulty(), state.last_observed_gesture(), rng);
    let outcome = judge(player, opponent);
    let round = state.record_round(player, outcome);

    log::debug!(
        "round {}/{}: {} vs {} -> {}",
        round,
        state.max_rounds(),
        player,
        opponent,
        outcome
    );

    TickResult::Round(RoundResult { round, player, opponent, outcome })
}
