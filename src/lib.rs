//! Timers - named countdown timers with expiry notifications
//!
//! This library provides the timer store, the one-second refresh loop that
//! detects expiry, and the render and notification boundaries a host UI
//! plugs into. The binary hosts it behind a small local HTTP surface.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod notify;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::{Config, TimerSettings};
pub use display::{millis_to_hms, DisplayItem, Renderable};
pub use error::{NotifyError, TimerError};
pub use notify::{Notification, Notifier, PromptBoard, RESET_ACTION};
pub use state::{AppState, Timer, TimerStore};
pub use utils::signals::shutdown_signal;
