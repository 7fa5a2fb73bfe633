//! Hand Landmark Data Structures
//!
//! Input side of the pipeline: the external detector produces one `Hand`
//! per detection frame as 21 tracked points in the standard skeletal
//! topology (wrist = 0, fingertips = 4/8/12/16/20, base knuckles =
//! 2/5/9/13/17). Coordinates are normalized to the image, origin top-left,
//! so smaller `y` means higher in frame.

use serde::{Deserialize, Serialize};

/// Number of landmarks in a well-formed hand.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// A single tracked point on the hand, normalized to [0,1]x[0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Depth estimate from the detector. Carried for wire compatibility;
    /// the classifier does not use it.
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// The five fingers, each mapped to its fingertip and base-knuckle
/// landmark indices in the 21-point model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] =
        [Finger::Thumb, Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Fingertip landmark index.
    pub fn tip(&self) -> usize {
        match self {
            Finger::Thumb => 4,
            Finger::Index => 8,
            Finger::Middle => 12,
            Finger::Ring => 16,
            Finger::Pinky => 20,
        }
    }

    /// Base-knuckle landmark index the tip is compared against.
    /// The thumb uses its second joint (2); the others use the MCP joint.
    pub fn base(&self) -> usize {
        match self {
            Finger::Thumb => 2,
            Finger::Index => 5,
            Finger::Middle => 9,
            Finger::Ring => 13,
            Finger::Pinky => 17,
        }
    }
}

/// One detected hand: an ordered sequence of landmarks.
///
/// Construction is unchecked so that malformed detector output can flow to
/// the classifier and be rejected there with a typed error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    landmarks: Vec<Landmark>,
}

impl Hand {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Whether the hand carries the full 21-point skeleton.
    pub fn is_well_formed(&self) -> bool {
        self.landmarks.len() == HAND_LANDMARK_COUNT
    }

    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }
}

impl From<Vec<Landmark>> for Hand {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finger_indices_match_skeleton_convention() {
        let tips: Vec<usize> = Finger::ALL.iter().map(|f| f.tip()).collect();
        let bases: Vec<usize> = Finger::ALL.iter().map(|f| f.base()).collect();

        assert_eq!(tips, vec![4, 8, 12, 16, 20]);
        assert_eq!(bases, vec![2, 5, 9, 13, 17]);

        // Every referenced index fits inside the 21-point model.
        for f in Finger::ALL {
            assert!(f.tip() < HAND_LANDMARK_COUNT);
            assert!(f.base() < HAND_LANDMARK_COUNT);
        }
    }

    #[test]
    fn well_formed_requires_exactly_21_points() {
        let short = Hand::new(vec![Landmark::new(0.5, 0.5); 20]);
        let full = Hand::new(vec![Landmark::new(0.5, 0.5); 21]);
        let long = Hand::new(vec![Landmark::new(0.5, 0.5); 22]);

        assert!(!short.is_well_formed());
        assert!(full.is_well_formed());
        assert!(!long.is_well_formed());
    }

    #[test]
    fn landmark_z_defaults_to_zero_when_absent() {
        let lm: Landmark = serde_json::from_str(r#"{"x":0.3,"y":0.7}"#).unwrap();
        assert_eq!(lm.z, 0.0);
        assert_eq!(lm.x, 0.3);
        assert_eq!(lm.y, 0.7);
    }
}
