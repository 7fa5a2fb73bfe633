//! Round Result Data Structures
//!
//! Output side of the pipeline: everything a presentation layer needs to
//! render a tick. `TickResult` is what the scheduler-driven tick entry
//! point returns; `RoundResult` rows accumulate in the session history.

use serde::{Deserialize, Serialize};

use super::gesture::{Gesture, Outcome};

/// Cumulative score tallies from the player's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub win: u8,
    pub lose: u8,
    pub draw: u8,
}

impl Scores {
    /// Rounds consumed so far. Equals `current_round` while running.
    pub fn total(&self) -> u8 {
        self.win + self.lose + self.draw
    }

    /// Session-level outcome: wins against losses, draws are irrelevant.
    pub fn session_outcome(&self) -> Outcome {
        if self.win > self.lose {
            Outcome::Win
        } else if self.win == self.lose {
            Outcome::Draw
        } else {
            Outcome::Lose
        }
    }
}

/// One scored exchange. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based index of the consumed round.
    pub round: u8,
    pub player: Gesture,
    pub opponent: Gesture,
    pub outcome: Outcome,
}

/// Final aggregate returned once the configured rounds are exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub scores: Scores,
    pub rounds_played: u8,
    /// Session-level outcome (win if more round wins than losses).
    pub outcome: Outcome,
}

/// Result of a single scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Session not running; nothing to do.
    Idle,
    /// No recognizable gesture was cached; no round consumed.
    Skipped,
    /// A round was played and scored.
    Round(RoundResult),
    /// Session already finished; final aggregate for the result screen.
    Finished(SessionSummary),
}

impl TickResult {
    pub fn is_round(&self) -> bool {
        matches!(self, TickResult::Round(_))
    }

    pub fn round(&self) -> Option<&RoundResult> {
        match self {
            TickResult::Round(r) => Some(r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_total_sums_all_tallies() {
        let scores = Scores { win: 2, lose: 1, draw: 3 };
        assert_eq!(scores.total(), 6);
        assert_eq!(Scores::default().total(), 0);
    }

    #[test]
    fn session_outcome_compares_wins_to_losses() {
        assert_eq!(Scores { win: 2, lose: 1, draw: 0 }.session_outcome(), Outcome::Win);
        assert_eq!(Scores { win: 1, lose: 1, draw: 5 }.session_outcome(), Outcome::Draw);
        assert_eq!(Scores { win: 0, lose: 3, draw: 0 }.session_outcome(), Outcome::Lose);
        // Draw count never tips the balance.
        assert_eq!(Scores { win: 0, lose: 0, draw: 9 }.session_outcome(), Outcome::Draw);
    }

    #[test]
    fn tick_result_round_accessor() {
        let result = RoundResult {
            round: 1,
            player: Gesture::Rock,
            opponent: Gesture::Scissors,
            outcome: Outcome::Win,
        };
        assert!(TickResult::Round(result).is_round());
        assert_eq!(TickResult::Round(result).round(), Some(&result));
        assert_eq!(TickResult::Skipped.round(), None);
        assert!(!TickResult::Idle.is_round());
    }
}
