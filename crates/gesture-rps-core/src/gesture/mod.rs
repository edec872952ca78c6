//! Per-frame gesture classification and display stabilization.

mod classify;
mod landmarks;
mod voter;

pub use classify::{classify, FingerPattern};
pub use landmarks::{finger_pattern, HandLandmark, Handedness, LANDMARK_COUNT};
pub use voter::{StabilityVoter, DEFAULT_WINDOW};
