//! Restartable interval timers driven by simulation time.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{ARRIVAL_WINDOW_MAX_SECS, ARRIVAL_WINDOW_MIN_SECS};

/// Duration bounds for a timed window. Equal bounds mean a fixed duration;
/// otherwise each reset rolls a fresh duration in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl WindowBounds {
    /// Fixed-duration bounds.
    pub fn fixed(secs: f64) -> Self {
        Self {
            min_secs: secs,
            max_secs: secs,
        }
    }
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self {
            min_secs: ARRIVAL_WINDOW_MIN_SECS,
            max_secs: ARRIVAL_WINDOW_MAX_SECS,
        }
    }
}

/// A restartable interval timer. Not running until the first `reset`;
/// each reset re-rolls the duration from the bounds and arms a deadline
/// in absolute simulation seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedWindow {
    pub bounds: WindowBounds,
    /// Absolute deadline in simulation seconds. `None` until first reset.
    pub deadline_secs: Option<f64>,
}

impl TimedWindow {
    pub fn new(bounds: WindowBounds) -> Self {
        Self {
            bounds,
            deadline_secs: None,
        }
    }

    /// Restart the interval: roll a duration in `[min, max]` and arm the
    /// deadline relative to `now`.
    pub fn reset(&mut self, now: f64, rng: &mut ChaCha8Rng) {
        let duration = rng.gen_range(self.bounds.min_secs..=self.bounds.max_secs);
        self.deadline_secs = Some(now + duration);
    }

    /// Whether the armed deadline has elapsed. Never expires before the
    /// first reset.
    pub fn is_expired(&self, now: f64) -> bool {
        self.deadline_secs.is_some_and(|deadline| now >= deadline)
    }

    /// Seconds until expiry (zero once expired or before the first reset).
    pub fn remaining_secs(&self, now: f64) -> f64 {
        self.deadline_secs
            .map_or(0.0, |deadline| (deadline - now).max(0.0))
    }
}
