//! Background tasks module
//!
//! This module contains the refresh cycle, the self-rescheduling tick and
//! the task that re-renders the timer list on change.

pub mod refresh;
pub mod render;

// Re-export main functions
pub use refresh::{refresh_cycle, RefreshCycle, TICK_INTERVAL};
pub use render::render_task;
