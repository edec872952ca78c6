//! Tunable constants for a match.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors from invalid match constants, raised at construction time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ready_frames must be at least 1")]
    ZeroReadyFrames,

    #[error("release_frames must be at least 1")]
    ZeroReleaseFrames,

    #[error("vote_window must hold at least one reading")]
    ZeroVoteWindow,
}

/// Stability and timing constants for the round lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Consecutive identical frames required to lock a choice
    pub ready_frames: u32,
    /// Consecutive frames without a valid choice required to end a round
    pub release_frames: u32,
    /// Time between locking and judgment
    pub countdown: Duration,
    /// Minimum time the result stays on screen
    pub show_result: Duration,
    /// Readings kept by the display voter
    pub vote_window: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ready_frames: 6,
            release_frames: 6,
            countdown: Duration::from_millis(2500),
            show_result: Duration::from_secs(2),
            vote_window: 8,
        }
    }
}

impl MatchConfig {
    /// Reject constants that would break the round lifecycle.
    ///
    /// Durations are unsigned by construction; a zero countdown or show
    /// time is legal and simply fires the corresponding transition on the
    /// next tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ready_frames == 0 {
            return Err(ConfigError::ZeroReadyFrames);
        }
        if self.release_frames == 0 {
            return Err(ConfigError::ZeroReleaseFrames);
        }
        if self.vote_window == 0 {
            return Err(ConfigError::ZeroVoteWindow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(MatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_ready_frames_rejected() {
        let config = MatchConfig {
            ready_frames: 0,
            ..MatchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroReadyFrames));
    }

    #[test]
    fn test_zero_release_frames_rejected() {
        let config = MatchConfig {
            release_frames: 0,
            ..MatchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroReleaseFrames));
    }

    #[test]
    fn test_zero_vote_window_rejected() {
        let config = MatchConfig {
            vote_window: 0,
            ..MatchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroVoteWindow));
    }

    #[test]
    fn test_zero_durations_allowed() {
        let config = MatchConfig {
            countdown: Duration::ZERO,
            show_result: Duration::ZERO,
            ..MatchConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
