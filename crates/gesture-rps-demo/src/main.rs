//! Gesture RPS Demo
//!
//! Self-contained demo match on a scripted input stream: a producer task
//! plays back per-frame hand detections over a bounded channel (standing
//! in for the camera + hand detector), and the consumer loop classifies
//! each frame, ticks the round machine, and renders HUD lines.

use std::time::{Duration, Instant};

use gesture_rps_core::{
    classify, FingerPattern, Gesture, MatchConfig, RandomPicker, RoundMachine, RoundResult,
    StabilityVoter, Verdict,
};
use tokio::sync::mpsc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Events the application feeds into the tick loop alongside frames
enum FeedEvent {
    /// One camera frame's detection; `None` when no hand was found
    Frame(Option<FingerPattern>),
    /// Zero the scoreboard (the `R` key in a windowed build)
    ResetScores,
    /// End the match (the `Q` key in a windowed build)
    Quit,
}

/// Roughly camera frame rate
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

const FIST: FingerPattern = FingerPattern {
    thumb: false,
    index: false,
    middle: false,
    ring: false,
    pinky: false,
};

const PEACE: FingerPattern = FingerPattern {
    thumb: false,
    index: true,
    middle: true,
    ring: false,
    pinky: false,
};

/// Half-curled shape that matches no defined gesture
const HALF_OPEN: FingerPattern = FingerPattern {
    thumb: true,
    index: true,
    middle: false,
    ring: true,
    pinky: false,
};

fn push_frames(feed: &mut Vec<FeedEvent>, pattern: Option<FingerPattern>, count: usize) {
    for _ in 0..count {
        feed.push(FeedEvent::Frame(pattern));
    }
}

/// Pre-recorded match: flickery warm-up, a rock round, a scissors round,
/// then a scoreboard reset and quit.
///
/// Frame counts assume the default constants: 6 frames to lock, a 2.5 s
/// countdown and 2.0 s result display at ~30 fps, 6 frames to release.
fn script() -> Vec<FeedEvent> {
    let mut feed = Vec::new();

    // jittery start; the debounce must ride through this without locking
    push_frames(&mut feed, Some(FIST), 3);
    push_frames(&mut feed, Some(HALF_OPEN), 1);
    push_frames(&mut feed, None, 2);

    // round 1: steady fist locks rock, held through the countdown
    push_frames(&mut feed, Some(FIST), 90);
    // hand away: the result display runs out, then the release gate opens
    push_frames(&mut feed, None, 75);

    // round 2: peace sign locks scissors
    push_frames(&mut feed, Some(PEACE), 90);
    push_frames(&mut feed, None, 75);

    feed.push(FeedEvent::ResetScores);
    feed.push(FeedEvent::Quit);
    feed
}

/// Audio cue the result display would trigger
fn cue_for(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::PlayerWins => "win",
        Verdict::BotWins => "lose",
        Verdict::Draw => "draw",
    }
}

fn placeholder<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

/// One HUD line per frame, in the shape the windowed build paints over
/// the video feed.
fn hud_line(
    machine: &RoundMachine<RandomPicker>,
    voter: &StabilityVoter,
    now: Instant,
) -> String {
    let snap = machine.snapshot(now);
    let mut line = format!(
        "Reading: {} | Locked: {} | Bot: {} | Score you {} x {} bot",
        placeholder(voter.current_estimate()),
        placeholder(snap.locked),
        placeholder(snap.bot),
        snap.scoreboard.player_wins,
        snap.scoreboard.bot_wins,
    );
    if let Some(remaining) = snap.countdown_remaining {
        line.push_str(&format!(" | Show your gesture! {:.1}s", remaining.as_secs_f32()));
    }
    if let Some(verdict) = snap.verdict {
        line.push_str(&format!(" | {}", verdict));
    }
    line
}

fn on_result(result: &RoundResult) {
    let json = serde_json::to_string(result).expect("round result serializes");
    info!(cue = cue_for(result.verdict), %json, "round complete");
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Bounded feed: the producer stands in for the capture/detection
    // thread and may never outrun the tick loop by more than a few frames.
    let (tx, mut rx) = mpsc::channel::<FeedEvent>(8);

    tokio::spawn(async move {
        for event in script() {
            if tx.send(event).await.is_err() {
                break;
            }
            tokio::time::sleep(FRAME_INTERVAL).await;
        }
    });

    let config = MatchConfig::default();
    let mut voter = StabilityVoter::new(config.vote_window).expect("default window is valid");
    let mut machine =
        RoundMachine::new(config, RandomPicker::new()).expect("default config is valid");

    info!("match started (Q: quit | R: reset score)");

    let mut last_line = String::new();
    while let Some(event) = rx.recv().await {
        match event {
            FeedEvent::Frame(pattern) => {
                let reading = match pattern {
                    Some(pattern) => classify(pattern),
                    None => Gesture::NoHand,
                };
                let now = Instant::now();
                voter.observe(reading);
                if let Some(result) = machine.tick(reading, now) {
                    on_result(&result);
                }
                let line = hud_line(&machine, &voter, now);
                if line != last_line {
                    info!("{line}");
                    last_line = line;
                }
            }
            FeedEvent::ResetScores => {
                machine.reset_scores();
                info!("scoreboard reset");
            }
            FeedEvent::Quit => break,
        }
    }

    let board = machine.scoreboard();
    info!(
        player_wins = board.player_wins,
        bot_wins = board.bot_wins,
        "match over"
    );
}
