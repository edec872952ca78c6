//! Gesture RPS Core Library
//!
//! This crate turns a noisy per-frame hand-gesture classification stream
//! into fair, round-based rock-paper-scissors against a bot opponent:
//! gesture classification, display stabilization, and the round state
//! machine that locks, judges, and releases each round.

pub mod config;
pub mod gesture;
pub mod round;
pub mod types;

pub use config::{ConfigError, MatchConfig};
pub use gesture::{classify, finger_pattern, FingerPattern, HandLandmark, Handedness, StabilityVoter};
pub use round::{
    judge, BotPicker, FixedPicker, RandomPicker, RoundMachine, RoundResult, RoundState, Scoreboard,
    Snapshot,
};
pub use types::{Choice, Gesture, RoundId, Verdict};
