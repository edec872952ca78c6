//! Finger-state extraction from hand landmarks.
//!
//! Works on the common 21-point hand skeleton layout: wrist at index 0,
//! then four joints per finger, thumb through pinky, tips at 4, 8, 12,
//! 16, 20.

use serde::{Deserialize, Serialize};

use super::classify::FingerPattern;

/// Number of landmarks in one hand skeleton
pub const LANDMARK_COUNT: usize = 21;

const THUMB_IP: usize = 3;
const THUMB_TIP: usize = 4;
const INDEX_PIP: usize = 6;
const INDEX_TIP: usize = 8;
const MIDDLE_PIP: usize = 10;
const MIDDLE_TIP: usize = 12;
const RING_PIP: usize = 14;
const RING_TIP: usize = 16;
const PINKY_PIP: usize = 18;
const PINKY_TIP: usize = 20;

/// A single hand landmark in normalized image coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
}

/// Which hand the detector attributed the landmarks to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

/// Derive which fingers are extended from the landmark geometry.
///
/// Image y grows downward, so a finger is extended when its tip sits
/// above (smaller y than) its PIP joint. The thumb folds sideways
/// instead of curling, and the x-comparison that means "extended" flips
/// with handedness; that asymmetry must be kept in sync with the
/// upstream detector's mirroring.
pub fn finger_pattern(
    landmarks: &[HandLandmark; LANDMARK_COUNT],
    handedness: Handedness,
) -> FingerPattern {
    let thumb = match handedness {
        Handedness::Right => landmarks[THUMB_TIP].x < landmarks[THUMB_IP].x,
        Handedness::Left => landmarks[THUMB_TIP].x > landmarks[THUMB_IP].x,
    };

    FingerPattern {
        thumb,
        index: landmarks[INDEX_TIP].y < landmarks[INDEX_PIP].y,
        middle: landmarks[MIDDLE_TIP].y < landmarks[MIDDLE_PIP].y,
        ring: landmarks[RING_TIP].y < landmarks[RING_PIP].y,
        pinky: landmarks[PINKY_TIP].y < landmarks[PINKY_PIP].y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Skeleton with every joint at the same point: nothing extended for
    /// a right hand (tip.x == ip.x fails the strict comparison).
    fn flat_hand() -> [HandLandmark; LANDMARK_COUNT] {
        [HandLandmark { x: 0.5, y: 0.5 }; LANDMARK_COUNT]
    }

    #[test]
    fn test_flat_hand_has_no_extended_fingers() {
        let pattern = finger_pattern(&flat_hand(), Handedness::Right);
        assert_eq!(pattern, FingerPattern::default());
    }

    #[test]
    fn test_fingers_extend_upward() {
        let mut hand = flat_hand();
        hand[INDEX_TIP].y = 0.2;
        hand[MIDDLE_TIP].y = 0.2;
        let pattern = finger_pattern(&hand, Handedness::Right);
        assert!(pattern.index);
        assert!(pattern.middle);
        assert!(!pattern.ring);
        assert!(!pattern.pinky);
    }

    #[test]
    fn test_curled_finger_is_flexed() {
        let mut hand = flat_hand();
        hand[RING_TIP].y = 0.8; // tip below the PIP joint
        let pattern = finger_pattern(&hand, Handedness::Right);
        assert!(!pattern.ring);
    }

    #[test]
    fn test_thumb_mirrors_with_handedness() {
        let mut hand = flat_hand();
        hand[THUMB_TIP].x = 0.3; // tip left of the IP joint

        let right = finger_pattern(&hand, Handedness::Right);
        let left = finger_pattern(&hand, Handedness::Left);
        assert!(right.thumb);
        assert!(!left.thumb);

        hand[THUMB_TIP].x = 0.7; // tip right of the IP joint
        let right = finger_pattern(&hand, Handedness::Right);
        let left = finger_pattern(&hand, Handedness::Left);
        assert!(!right.thumb);
        assert!(left.thumb);
    }

    #[test]
    fn test_thumb_ignores_y_axis() {
        let mut hand = flat_hand();
        hand[THUMB_TIP].y = 0.1; // raised, but not spread sideways
        let pattern = finger_pattern(&hand, Handedness::Right);
        assert!(!pattern.thumb);
    }
}
