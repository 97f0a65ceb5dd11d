//! Timer store: the single owner of timer state

use tokio::time::Instant;

use super::timer::{minutes_to_millis, Timer};
use crate::error::TimerError;

/// Ordered set of active timers keyed by name
#[derive(Debug, Default)]
pub struct TimerStore {
    timers: Vec<Timer>,
}

impl TimerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { timers: Vec::new() }
    }

    /// Append a new running timer.
    ///
    /// The name is trimmed and must be non-empty and unused; the duration
    /// must be a finite, positive number of minutes.
    pub fn add(
        &mut self,
        name: &str,
        duration_minutes: f64,
        now: Instant,
    ) -> Result<&Timer, TimerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TimerError::EmptyName);
        }
        if !duration_minutes.is_finite()
            || duration_minutes <= 0.0
            || minutes_to_millis(duration_minutes) <= 0
        {
            return Err(TimerError::InvalidDuration(duration_minutes));
        }
        if self.get(name).is_some() {
            return Err(TimerError::DuplicateName(name.to_string()));
        }

        self.timers
            .push(Timer::new(name.to_string(), duration_minutes, now));
        Ok(&self.timers[self.timers.len() - 1])
    }

    /// Restart the named timer. Returns false if no timer matched.
    pub fn reset_one(&mut self, name: &str, now: Instant) -> bool {
        match self.get_mut(name) {
            Some(timer) => {
                timer.reset(now);
                true
            }
            None => false,
        }
    }

    /// Restart every timer, returning how many were reset
    pub fn reset_all(&mut self, now: Instant) -> usize {
        for timer in &mut self.timers {
            timer.reset(now);
        }
        self.timers.len()
    }

    /// Remove the named timer. Returns false if no timer matched.
    pub fn delete(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.timers.len();
        self.timers.retain(|timer| timer.name() != name);
        self.timers.len() != before
    }

    /// Current timers in insertion order
    pub fn list(&self) -> &[Timer] {
        &self.timers
    }

    pub fn get(&self, name: &str) -> Option<&Timer> {
        let name = name.trim();
        self.timers.iter().find(|timer| timer.name() == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Timer> {
        let name = name.trim();
        self.timers.iter_mut().find(|timer| timer.name() == name)
    }

    pub(crate) fn timers_mut(&mut self) -> impl Iterator<Item = &mut Timer> {
        self.timers.iter_mut()
    }

    /// Whether at least one timer is still counting down
    pub fn any_running(&self) -> bool {
        self.timers.iter().any(|timer| !timer.is_paused())
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
