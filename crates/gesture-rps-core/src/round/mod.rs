//! Round lifecycle: debouncing, locking, judging, scoring.

mod bot;
mod judge;
mod machine;
mod scoreboard;

pub use bot::{BotPicker, FixedPicker, RandomPicker};
pub use judge::judge;
pub use machine::{RoundMachine, RoundResult, RoundState, Snapshot};
pub use scoreboard::Scoreboard;
