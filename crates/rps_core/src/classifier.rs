//! Gesture Classifier
//!
//! Maps a single hand's 21 landmarks to a discrete gesture. Pure and
//! per-frame: no smoothing or temporal filtering is applied here, callers
//! own any debouncing.
//!
//! A finger counts as extended when its fingertip sits above its base
//! knuckle in the image (`tip.y < base.y`, top-left origin). The thumb
//! reuses the same vertical rule even though its extension axis is more
//! horizontal; the rock/paper thresholds are calibrated around that.

use crate::error::{GameError, Result};
use crate::models::hand::{Finger, Hand, HAND_LANDMARK_COUNT};
use crate::models::Gesture;

/// Extension state of the five fingers, thumb first.
pub type FingerFlags = [bool; 5];

/// Per-finger extension flags for a hand.
///
/// Fails on malformed input (landmark count other than 21); after that
/// check every finger's tip and base index is in bounds.
pub fn finger_states(hand: &Hand) -> Result<FingerFlags> {
    if !hand.is_well_formed() {
        return Err(GameError::InvalidLandmarkCount {
            expected: HAND_LANDMARK_COUNT,
            found: hand.len(),
        });
    }

    let mut flags = [false; 5];
    for (slot, finger) in Finger::ALL.iter().enumerate() {
        let tip = &hand.landmarks()[finger.tip()];
        let base = &hand.landmarks()[finger.base()];
        flags[slot] = tip.y < base.y;
    }
    Ok(flags)
}

/// Number of extended fingers in a flag set.
pub fn extended_count(flags: FingerFlags) -> usize {
    flags.iter().filter(|&&up| up).count()
}

fn classify_flags(flags: FingerFlags) -> Gesture {
    let [_thumb, index, middle, ring, pinky] = flags;
    let count = extended_count(flags);

    // Priority order matters: a closed fist with one stray finger is still
    // rock, and only the exact index+middle pair reads as scissors.
    if count <= 1 {
        Gesture::Rock
    } else if count == 2 && index && middle && !ring && !pinky {
        Gesture::Scissors
    } else if count >= 4 {
        Gesture::Paper
    } else {
        Gesture::Unrecognized
    }
}

/// Classify a hand pose into rock / scissors / paper / unrecognized.
///
/// Fails only on malformed input; every well-formed hand classifies to
/// some gesture.
pub fn classify(hand: &Hand) -> Result<Gesture> {
    Ok(classify_flags(finger_states(hand)?))
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use crate::models::hand::{Finger, Hand, Landmark, HAND_LANDMARK_COUNT};

    /// Build a well-formed hand whose fingers are extended per `flags`
    /// (thumb first). Non-finger landmarks sit at mid-frame.
    pub fn hand_with_fingers(flags: [bool; 5]) -> Hand {
        let mut landmarks = vec![Landmark::new(0.5, 0.5); HAND_LANDMARK_COUNT];
        for (slot, finger) in Finger::ALL.iter().enumerate() {
            landmarks[finger.base()] = Landmark::new(0.5, 0.5);
            let tip_y = if flags[slot] { 0.3 } else { 0.7 };
            landmarks[finger.tip()] = Landmark::new(0.5, tip_y);
        }
        Hand::new(landmarks)
    }
}
