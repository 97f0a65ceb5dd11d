//! State management module
//!
//! This module contains the timer entity, the store that owns all timers and
//! the shared application state wrapped around it.

pub mod app_state;
pub mod store;
pub mod timer;

// Re-export main types
pub use app_state::AppState;
pub use store::TimerStore;
pub use timer::{Observation, Timer};
