//! Refresh cycle and the self-rescheduling tick

use std::{sync::atomic::Ordering, time::Duration};

use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::{
    display::DisplayItem,
    state::{timer::Observation, AppState, TimerStore},
};

/// Delay between one refresh and the next while any timer runs
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Everything one refresh cycle produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshCycle {
    /// Display rows in store order
    pub items: Vec<DisplayItem>,
    /// Timers that crossed below zero during this cycle
    pub expired: Vec<String>,
    /// Whether another tick should be scheduled
    pub any_running: bool,
}

/// Recompute every timer at `now` and apply expiry transitions
pub fn refresh_cycle(store: &mut TimerStore, now: Instant) -> RefreshCycle {
    let mut cycle = RefreshCycle::default();

    for timer in store.timers_mut() {
        match timer.observe(now) {
            Observation::Running(remaining_ms) => {
                cycle.items.push(DisplayItem::running(timer.name(), remaining_ms));
            }
            Observation::Expired => {
                cycle.expired.push(timer.name().to_string());
                cycle.items.push(DisplayItem::finished(timer.name()));
            }
            Observation::Finished => {
                cycle.items.push(DisplayItem::finished(timer.name()));
            }
        }
    }

    cycle.any_running = store.any_running();
    cycle
}

/// Schedule a single refresh signal one tick from now.
///
/// At most one tick is pending at a time. The chain continues only while
/// each refresh finds a running timer and schedules the next one.
pub(crate) fn schedule_tick(state: &AppState) {
    if state.tick_pending.swap(true, Ordering::AcqRel) {
        return;
    }

    debug!("Next refresh scheduled in {:?}", TICK_INTERVAL);
    let state = state.clone();
    tokio::spawn(async move {
        sleep(TICK_INTERVAL).await;
        state.tick_pending.store(false, Ordering::Release);
        state.request_refresh();
    });
}
