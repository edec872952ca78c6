//! Shared domain types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A playable hand shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All playable choices
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Check if this choice beats the other
    pub fn beats(&self, other: &Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }

    /// String representation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One frame's classification reading
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    /// A recognizable choice was shown
    Choice(Choice),
    /// A hand was visible but its finger pattern matched no defined gesture
    Unknown,
    /// No hand detected this frame
    NoHand,
}

impl Gesture {
    /// The valid choice carried by this reading, if any
    pub fn choice(&self) -> Option<Choice> {
        match self {
            Gesture::Choice(choice) => Some(*choice),
            _ => None,
        }
    }

    /// String representation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Choice(choice) => choice.as_str(),
            Gesture::Unknown => "Unknown",
            Gesture::NoHand => "No hand",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Choice> for Gesture {
    fn from(choice: Choice) -> Self {
        Gesture::Choice(choice)
    }
}

/// Outcome of a completed round, relative to the player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    PlayerWins,
    BotWins,
    Draw,
}

impl Verdict {
    /// String representation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::PlayerWins => "You win",
            Verdict::BotWins => "Bot wins",
            Verdict::Draw => "Draw",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
