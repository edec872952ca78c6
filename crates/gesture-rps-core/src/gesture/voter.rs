//! Display-only stabilization of the raw classification stream.

use std::collections::VecDeque;

use crate::config::ConfigError;
use crate::types::Gesture;

/// Default number of recent readings kept for the on-screen estimate
pub const DEFAULT_WINDOW: usize = 8;

/// Majority vote over a sliding window of recent readings.
///
/// Purely cosmetic: gives the HUD a stable "current reading" while the
/// round machine debounces the raw stream on its own. Never consulted
/// for the round outcome and shares no state with the machine.
#[derive(Clone, Debug)]
pub struct StabilityVoter {
    window: VecDeque<Gesture>,
    capacity: usize,
}

impl StabilityVoter {
    /// Voter holding the last `capacity` readings
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroVoteWindow);
        }
        Ok(Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Record one raw reading, evicting the oldest once the window is full
    pub fn observe(&mut self, reading: Gesture) {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(reading);
    }

    /// Most frequent reading in the window.
    ///
    /// Ties go to the reading whose first occurrence comes earliest in
    /// insertion order, so the estimate is deterministic. `None` while
    /// the window is empty ("no reading" placeholder).
    pub fn current_estimate(&self) -> Option<Gesture> {
        let mut best: Option<(Gesture, usize)> = None;
        for &candidate in &self.window {
            let count = self.window.iter().filter(|&&g| g == candidate).count();
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((candidate, count)),
            }
        }
        best.map(|(gesture, _)| gesture)
    }

    /// Number of readings currently held
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// True before the first observation
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

impl Default for StabilityVoter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW).expect("default window is non-zero")
    }
}
