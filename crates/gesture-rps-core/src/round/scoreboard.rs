//! Match scorekeeping.

use serde::{Deserialize, Serialize};

use crate::types::Verdict;

/// Win counters for the ongoing match
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub bot_wins: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one completed round's outcome. Draws touch neither counter.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::PlayerWins => self.player_wins += 1,
            Verdict::BotWins => self.bot_wins += 1,
            Verdict::Draw => {}
        }
    }

    /// Zero both counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
