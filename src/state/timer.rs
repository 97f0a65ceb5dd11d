//! Timer entity and its per-tick state transition

use chrono::{DateTime, Utc};
use tokio::time::Instant;

/// Result of observing a timer at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Still counting down, with the remaining milliseconds
    Running(i64),
    /// Crossed below zero during this observation; fires the notification
    Expired,
    /// Already expired on an earlier observation and not reset since
    Finished,
}

/// A named countdown with a fixed duration and a mutable start epoch
#[derive(Debug, Clone)]
pub struct Timer {
    name: String,
    duration_minutes: f64,
    duration_ms: i64,
    start_time: Instant,
    started_at: DateTime<Utc>,
    remaining_ms: i64,
    paused: bool,
}

impl Timer {
    /// Create a running timer. Inputs are validated by the store.
    pub(crate) fn new(name: String, duration_minutes: f64, now: Instant) -> Self {
        let duration_ms = minutes_to_millis(duration_minutes);
        Self {
            name,
            duration_minutes,
            duration_ms,
            start_time: now,
            started_at: Utc::now(),
            remaining_ms: duration_ms,
            paused: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    /// Wall-clock time of the current countdown epoch
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Remaining milliseconds as of the last observation; may be negative
    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    /// Whether the timer has expired and is waiting for a reset
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Recompute the remaining time without touching the paused flag
    pub fn recompute(&mut self, now: Instant) -> i64 {
        let elapsed = now.saturating_duration_since(self.start_time).as_millis();
        let elapsed = i64::try_from(elapsed).unwrap_or(i64::MAX);
        self.remaining_ms = self.duration_ms.saturating_sub(elapsed);
        self.remaining_ms
    }

    /// Recompute and apply the expiry transition.
    ///
    /// The first observation below zero marks the timer paused and reports
    /// `Expired`; later ones report `Finished` until a reset.
    pub fn observe(&mut self, now: Instant) -> Observation {
        let remaining = self.recompute(now);
        if remaining >= 0 {
            Observation::Running(remaining)
        } else if self.paused {
            Observation::Finished
        } else {
            self.paused = true;
            Observation::Expired
        }
    }

    /// Start a fresh countdown epoch
    pub fn reset(&mut self, now: Instant) {
        self.start_time = now;
        self.started_at = Utc::now();
        self.remaining_ms = self.duration_ms;
        self.paused = false;
    }
}

pub(crate) fn minutes_to_millis(minutes: f64) -> i64 {
    (minutes * 60_000.0).round() as i64
}
