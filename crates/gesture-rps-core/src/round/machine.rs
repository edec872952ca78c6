//! The round state machine.
//!
//! Converts the per-frame classification stream into whole rounds:
//! debounce a stable gesture into a locked choice, count down, judge
//! exactly once, show the result, then release back to idle once the
//! hand has visibly left the pose.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{ConfigError, MatchConfig};
use crate::round::bot::BotPicker;
use crate::round::judge::judge;
use crate::round::scoreboard::Scoreboard;
use crate::types::{Choice, Gesture, RoundId, Verdict};

/// Lifecycle phase of the current round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for a stable gesture to lock
    Idle,
    /// Choice locked, counting down to judgment
    Countdown,
    /// Result on display, waiting for the timer and the hand release
    Show,
}

/// One-shot event emitted on exactly the tick the countdown elapses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: RoundId,
    pub player: Choice,
    pub bot: Choice,
    pub verdict: Verdict,
}

/// Read-only view of the machine for presenters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: RoundState,
    pub candidate: Option<Choice>,
    pub candidate_streak: u32,
    pub locked: Option<Choice>,
    pub bot: Option<Choice>,
    pub verdict: Option<Verdict>,
    /// Time left before judgment; set only in [`RoundState::Countdown`]
    pub countdown_remaining: Option<Duration>,
    /// Time left on the result display; set only in [`RoundState::Show`]
    pub result_remaining: Option<Duration>,
    pub scoreboard: Scoreboard,
}

/// Per-round bookkeeping, owned exclusively by the machine
#[derive(Clone, Debug, Default)]
struct RoundContext {
    /// Last distinct valid choice seen while debouncing
    candidate: Option<Choice>,
    /// Consecutive ticks the candidate repeated; 0 only when unset
    candidate_streak: u32,
    /// Player choice frozen at round start
    locked: Option<Choice>,
    /// Bot choice drawn at round start
    bot: Option<Choice>,
    round_id: Option<RoundId>,
    verdict: Option<Verdict>,
    countdown_deadline: Option<Instant>,
    result_deadline: Option<Instant>,
    /// Consecutive ticks without a valid choice during Show
    release_streak: u32,
}

/// Debounce-lock-judge-release state machine over classified frames.
///
/// Strictly serialized: one `tick` per classified frame, mutations only
/// through `tick` and `reset_scores`. The one-shot [`RoundResult`] is
/// the return value of the boundary-crossing tick, so duplicate
/// delivery is unrepresentable.
pub struct RoundMachine<P> {
    config: MatchConfig,
    picker: P,
    state: RoundState,
    ctx: RoundContext,
    scoreboard: Scoreboard,
}

impl<P: BotPicker> RoundMachine<P> {
    /// Build a machine. Invalid constants are rejected here, before the
    /// first tick.
    pub fn new(config: MatchConfig, picker: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            picker,
            state: RoundState::Idle,
            ctx: RoundContext::default(),
            scoreboard: Scoreboard::new(),
        })
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Zero the scoreboard. Round state is untouched; a round in flight
    /// finishes normally.
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
        debug!("scoreboard reset");
    }

    /// Advance one frame.
    ///
    /// Returns `Some` on exactly the tick where the countdown elapses
    /// and the round is judged, `None` on every other tick.
    pub fn tick(&mut self, reading: Gesture, now: Instant) -> Option<RoundResult> {
        match self.state {
            RoundState::Idle => {
                self.tick_idle(reading, now);
                None
            }
            RoundState::Countdown => self.tick_countdown(now),
            RoundState::Show => {
                self.tick_show(reading, now);
                None
            }
        }
    }

    /// Read-only view for presenters; `now` is only used to compute the
    /// remaining-time fields.
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        let remaining = |deadline: Option<Instant>| {
            deadline.map(|d| d.saturating_duration_since(now))
        };
        Snapshot {
            state: self.state,
            candidate: self.ctx.candidate,
            candidate_streak: self.ctx.candidate_streak,
            locked: self.ctx.locked,
            bot: self.ctx.bot,
            verdict: self.ctx.verdict,
            countdown_remaining: match self.state {
                RoundState::Countdown => remaining(self.ctx.countdown_deadline),
                _ => None,
            },
            result_remaining: match self.state {
                RoundState::Show => remaining(self.ctx.result_deadline),
                _ => None,
            },
            scoreboard: self.scoreboard,
        }
    }

    /// Idle: debounce the raw stream until one choice holds long enough
    /// to lock.
    fn tick_idle(&mut self, reading: Gesture, now: Instant) {
        let Some(choice) = reading.choice() else {
            // any gap or ambiguous frame restarts the debounce from scratch
            self.ctx.candidate = None;
            self.ctx.candidate_streak = 0;
            return;
        };

        if self.ctx.candidate == Some(choice) {
            self.ctx.candidate_streak += 1;
        } else {
            self.ctx.candidate = Some(choice);
            self.ctx.candidate_streak = 1;
        }

        if self.ctx.candidate_streak >= self.config.ready_frames {
            let bot = self.picker.pick();
            let round_id = RoundId::new();
            self.ctx.locked = Some(choice);
            self.ctx.bot = Some(bot);
            self.ctx.round_id = Some(round_id);
            self.ctx.countdown_deadline = Some(now + self.config.countdown);
            self.ctx.release_streak = 0;
            self.state = RoundState::Countdown;
            debug!(round = %round_id, locked = %choice, "choice locked, countdown started");
        }
    }

    /// Countdown: the locked pair is frozen; input is ignored for game
    /// logic. Judges on exactly the tick the deadline is crossed.
    fn tick_countdown(&mut self, now: Instant) -> Option<RoundResult> {
        let deadline = self
            .ctx
            .countdown_deadline
            .expect("countdown state without a deadline");
        if now < deadline {
            return None;
        }

        let player = self
            .ctx
            .locked
            .expect("countdown state without a locked choice");
        let bot = self.ctx.bot.expect("countdown state without a bot choice");
        let round = self
            .ctx
            .round_id
            .expect("countdown state without a round id");

        let verdict = judge(player, bot);
        self.ctx.verdict = Some(verdict);
        self.scoreboard.record(verdict);
        self.ctx.result_deadline = Some(now + self.config.show_result);
        self.state = RoundState::Show;
        info!(round = %round, player = %player, bot = %bot, verdict = %verdict, "round judged");

        Some(RoundResult {
            round,
            player,
            bot,
            verdict,
        })
    }

    /// Show: keep the result up until the timer has elapsed AND the
    /// player has stopped showing a recognizable gesture. Both gates
    /// are required so a held pose cannot roll into the next round.
    fn tick_show(&mut self, reading: Gesture, now: Instant) {
        if reading.choice().is_some() {
            self.ctx.release_streak = 0;
        } else {
            self.ctx.release_streak += 1;
        }

        let deadline = self
            .ctx
            .result_deadline
            .expect("show state without a deadline");
        if now >= deadline && self.ctx.release_streak >= self.config.release_frames {
            debug!("hand released, round closed");
            self.ctx = RoundContext::default();
            self.state = RoundState::Idle;
        }
    }
}
