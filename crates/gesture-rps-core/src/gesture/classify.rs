//! Gesture classification from finger states.

use serde::{Deserialize, Serialize};

use crate::types::{Choice, Gesture};

/// Extended/flexed state of the five fingers, thumb first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingerPattern {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerPattern {
    /// Number of extended fingers
    pub fn extended_count(&self) -> u32 {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|&&up| up)
            .count() as u32
    }
}

/// Classify one frame's finger states into a gesture reading.
///
/// Total over all 32 patterns. A visible hand never classifies to
/// [`Gesture::NoHand`]; that case is decided upstream by the detector.
/// The thumb does not distinguish scissors from a two-finger point, so
/// its state is ignored on that branch.
pub fn classify(pattern: FingerPattern) -> Gesture {
    let extended = pattern.extended_count();
    if extended <= 1 {
        Gesture::Choice(Choice::Rock)
    } else if extended >= 4 {
        Gesture::Choice(Choice::Paper)
    } else if pattern.index && pattern.middle && !pattern.ring && !pattern.pinky {
        Gesture::Choice(Choice::Scissors)
    } else {
        Gesture::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_from_mask(mask: u32) -> FingerPattern {
        FingerPattern {
            thumb: mask & 0b00001 != 0,
            index: mask & 0b00010 != 0,
            middle: mask & 0b00100 != 0,
            ring: mask & 0b01000 != 0,
            pinky: mask & 0b10000 != 0,
        }
    }

    #[test]
    fn test_classify_is_total_over_all_patterns() {
        // Scissors is exactly index+middle (mask 0b00110), thumb free
        // (mask 0b00111); everything else falls to the count rules.
        for mask in 0u32..32 {
            let expected = match mask {
                m if m.count_ones() <= 1 => Gesture::Choice(Choice::Rock),
                m if m.count_ones() >= 4 => Gesture::Choice(Choice::Paper),
                0b00110 | 0b00111 => Gesture::Choice(Choice::Scissors),
                _ => Gesture::Unknown,
            };
            assert_eq!(
                classify(pattern_from_mask(mask)),
                expected,
                "pattern mask {mask:#07b}"
            );
        }
    }

    #[test]
    fn test_fist_is_rock() {
        assert_eq!(
            classify(FingerPattern::default()),
            Gesture::Choice(Choice::Rock)
        );
    }

    #[test]
    fn test_thumb_only_is_rock() {
        let pattern = FingerPattern {
            thumb: true,
            ..FingerPattern::default()
        };
        assert_eq!(classify(pattern), Gesture::Choice(Choice::Rock));
    }

    #[test]
    fn test_open_palm_is_paper() {
        let pattern = FingerPattern {
            thumb: true,
            index: true,
            middle: true,
            ring: true,
            pinky: true,
        };
        assert_eq!(classify(pattern), Gesture::Choice(Choice::Paper));
    }

    #[test]
    fn test_four_fingers_without_thumb_is_paper() {
        let pattern = FingerPattern {
            thumb: false,
            index: true,
            middle: true,
            ring: true,
            pinky: true,
        };
        assert_eq!(classify(pattern), Gesture::Choice(Choice::Paper));
    }

    #[test]
    fn test_peace_sign_is_scissors_regardless_of_thumb() {
        let peace = FingerPattern {
            index: true,
            middle: true,
            ..FingerPattern::default()
        };
        assert_eq!(classify(peace), Gesture::Choice(Choice::Scissors));

        let with_thumb = FingerPattern {
            thumb: true,
            ..peace
        };
        assert_eq!(classify(with_thumb), Gesture::Choice(Choice::Scissors));
    }

    #[test]
    fn test_ambiguous_shapes_are_unknown() {
        // "call me": thumb + pinky
        let call_me = FingerPattern {
            thumb: true,
            pinky: true,
            ..FingerPattern::default()
        };
        assert_eq!(classify(call_me), Gesture::Unknown);

        // middle + ring, scissors-adjacent but wrong fingers
        let wrong_pair = FingerPattern {
            middle: true,
            ring: true,
            ..FingerPattern::default()
        };
        assert_eq!(classify(wrong_pair), Gesture::Unknown);

        // three fingers up, not a scissors shape
        let three_up = FingerPattern {
            index: true,
            middle: true,
            ring: true,
            ..FingerPattern::default()
        };
        assert_eq!(classify(three_up), Gesture::Unknown);
    }

    #[test]
    fn test_extended_count() {
        assert_eq!(FingerPattern::default().extended_count(), 0);
        let pattern = FingerPattern {
            index: true,
            ring: true,
            ..FingerPattern::default()
        };
        assert_eq!(pattern.extended_count(), 2);
    }
}
