//! Application state: the timer store plus its change signal and notifier

use std::{
    sync::{atomic::AtomicBool, Arc, Mutex, MutexGuard},
    time::Instant as StdInstant,
};
use tokio::{sync::watch, time::Instant};
use tracing::{debug, info, warn};

use super::{Timer, TimerStore};
use crate::{
    config::TimerSettings,
    display::{DisplayItem, Renderable},
    error::TimerError,
    notify::{Notification, Notifier, RESET_ACTION},
    tasks::refresh::{refresh_cycle, schedule_tick},
};

/// Explicitly owned handle to the timer store.
///
/// Clones share the same store, change signal and notifier.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<TimerStore>>,
    settings: TimerSettings,
    notifier: Arc<dyn Notifier>,
    /// Generation counter bumped whenever the displayed list is stale
    refresh_tx: Arc<watch::Sender<u64>>,
    /// Set while a tick is scheduled but has not fired yet
    pub(crate) tick_pending: Arc<AtomicBool>,
    start_time: StdInstant,
}

impl AppState {
    /// Create an empty store using the given settings and notification host
    pub fn new(settings: TimerSettings, notifier: Arc<dyn Notifier>) -> Self {
        let (refresh_tx, _) = watch::channel(0);

        Self {
            store: Arc::new(Mutex::new(TimerStore::new())),
            settings,
            notifier,
            refresh_tx: Arc::new(refresh_tx),
            tick_pending: Arc::new(AtomicBool::new(false)),
            start_time: StdInstant::now(),
        }
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    fn store(&self) -> Result<MutexGuard<'_, TimerStore>, TimerError> {
        self.store
            .lock()
            .map_err(|e| TimerError::Lock(e.to_string()))
    }

    /// Add a timer, falling back to the configured default length
    pub fn add_timer(&self, name: &str, duration_minutes: Option<f64>) -> Result<Timer, TimerError> {
        let minutes =
            duration_minutes.unwrap_or(self.settings.default_duration_minutes as f64);

        let timer = self.store()?.add(name, minutes, Instant::now())?.clone();
        info!("Added timer \"{}\" for {} minutes", timer.name(), minutes);
        self.request_refresh();
        Ok(timer)
    }

    /// Restart the named timer. Unknown names are a logged no-op.
    pub fn reset_timer(&self, name: &str) -> Result<bool, TimerError> {
        let found = self.restart(name)?;
        if !found {
            warn!("Reset requested for unknown timer \"{}\"", name);
        }
        Ok(found)
    }

    fn restart(&self, name: &str) -> Result<bool, TimerError> {
        let found = self.store()?.reset_one(name, Instant::now());
        if found {
            info!("Reset timer \"{}\"", name);
            self.request_refresh();
        }
        Ok(found)
    }

    /// Restart every timer with a single refresh signal
    pub fn reset_all(&self) -> Result<usize, TimerError> {
        let count = self.store()?.reset_all(Instant::now());
        info!("Reset all {} timers", count);
        self.request_refresh();
        Ok(count)
    }

    /// Remove the named timer. Unknown names are a logged no-op.
    pub fn delete_timer(&self, name: &str) -> Result<bool, TimerError> {
        let found = self.store()?.delete(name);
        if found {
            info!("Deleted timer \"{}\"", name);
        } else {
            warn!("Delete requested for unknown timer \"{}\"", name);
        }
        self.request_refresh();
        Ok(found)
    }

    /// Snapshot of the current timers in display order
    pub fn list(&self) -> Result<Vec<Timer>, TimerError> {
        Ok(self.store()?.list().to_vec())
    }

    /// Tell the render side that its list is stale
    pub fn request_refresh(&self) {
        self.refresh_tx
            .send_modify(|generation| *generation = generation.wrapping_add(1));
    }

    /// Whether a tick is currently scheduled
    pub fn tick_pending(&self) -> bool {
        self.tick_pending.load(std::sync::atomic::Ordering::Acquire)
    }

    /// Present the expiry notification without waiting for the answer
    fn announce_expiry(&self, name: String) {
        info!("Timer \"{}\" finished", name);
        let answer = self
            .notifier
            .notify(Notification::finished(&name, self.settings.modal_notification));

        let state = self.clone();
        tokio::spawn(async move {
            match answer.await {
                Ok(Some(action)) if action == RESET_ACTION => match state.restart(&name) {
                    Ok(true) => {}
                    Ok(false) => debug!("Timer \"{}\" was deleted before its reset was chosen", name),
                    Err(e) => warn!("Failed to reset timer \"{}\" from notification: {}", name, e),
                },
                Ok(_) => debug!("Notification for \"{}\" dismissed", name),
                Err(e) => warn!("Notification for \"{}\" failed: {}", name, e),
            }
        });
    }

    /// Calculate uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

impl Renderable for AppState {
    /// Run one refresh cycle and return the rows to display.
    ///
    /// Expiry notifications are dispatched after the store lock is
    /// released, and the next tick is scheduled while any timer runs.
    fn list_display_items(&self) -> Result<Vec<DisplayItem>, TimerError> {
        let cycle = refresh_cycle(&mut *self.store()?, Instant::now());

        for name in cycle.expired {
            self.announce_expiry(name);
        }
        if cycle.any_running {
            schedule_tick(self);
        }
        Ok(cycle.items)
    }

    fn subscribe_changes(&self) -> watch::Receiver<u64> {
        self.refresh_tx.subscribe()
    }
}
