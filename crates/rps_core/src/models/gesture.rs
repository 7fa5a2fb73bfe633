//! Gesture, Outcome and Difficulty Types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete classification of a hand pose.
///
/// Produced fresh per detection frame; never mutated, only replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Rock,
    Scissors,
    Paper,
    /// Pose that matched none of the three shapes (e.g. three fingers up).
    Unrecognized,
}

impl Gesture {
    /// The three playable gestures, in canonical order.
    pub const REAL: [Gesture; 3] = [Gesture::Rock, Gesture::Scissors, Gesture::Paper];

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Gesture::Unrecognized)
    }

    /// Whether this gesture defeats `other` under the canonical cycle:
    /// rock > scissors > paper > rock. Unrecognized defeats nothing.
    pub fn beats(&self, other: Gesture) -> bool {
        matches!(
            (self, other),
            (Gesture::Rock, Gesture::Scissors)
                | (Gesture::Scissors, Gesture::Paper)
                | (Gesture::Paper, Gesture::Rock)
        )
    }

    /// The gesture that defeats this one. `None` for Unrecognized.
    pub fn counter(&self) -> Option<Gesture> {
        match self {
            Gesture::Rock => Some(Gesture::Paper),
            Gesture::Paper => Some(Gesture::Scissors),
            Gesture::Scissors => Some(Gesture::Rock),
            Gesture::Unrecognized => None,
        }
    }

    /// Emoji used by presentation layers for this gesture.
    pub fn emoji(&self) -> &'static str {
        match self {
            Gesture::Rock => "\u{270A}",
            Gesture::Scissors => "\u{270C}\u{FE0F}",
            Gesture::Paper => "\u{270B}",
            Gesture::Unrecognized => "-",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gesture::Rock => "rock",
            Gesture::Scissors => "scissors",
            Gesture::Paper => "paper",
            Gesture::Unrecognized => "unrecognized",
        };
        write!(f, "{}", name)
    }
}

/// Result of one round from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        };
        write!(f, "{}", name)
    }
}

/// Opponent difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Fully random opponent.
    Easy,
    /// Counters the player's previous gesture 20% of the time.
    #[default]
    Medium,
    /// Counters the player's previous gesture 40% of the time.
    Hard,
}

impl Difficulty {
    /// Probability that the opponent deliberately counters the player's
    /// previous gesture instead of choosing uniformly at random.
    pub fn counter_play_probability(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.0,
            Difficulty::Medium => 0.2,
            Difficulty::Hard => 0.4,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}
