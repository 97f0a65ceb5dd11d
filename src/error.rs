//! Error types for timer operations

use thiserror::Error;

/// Errors raised by the timer store and the state wrapped around it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimerError {
    /// The timer name was empty or only whitespace.
    #[error("timer name must not be empty")]
    EmptyName,

    /// The duration was zero, negative or not a finite number.
    #[error("timer length must be a positive number of minutes, got {0}")]
    InvalidDuration(f64),

    /// Another active timer already uses this name.
    #[error("a timer named \"{0}\" already exists")]
    DuplicateName(String),

    /// The store mutex was poisoned by a panicking holder.
    #[error("failed to lock timer store: {0}")]
    Lock(String),
}

impl TimerError {
    /// Whether the error stems from user input rather than internal state
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, TimerError::Lock(_))
    }
}

/// Errors surfaced while presenting an expiry notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The prompt went away without an answer.
    #[error("notification was closed without an answer")]
    Closed,

    /// The host could not present the notification at all.
    #[error("notification host unavailable: {0}")]
    Unavailable(String),
}
