//! Render boundary: display items and remaining-time formatting

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::TimerError;

/// Secondary label shown once a timer has expired
pub const FINISHED_LABEL: &str = "Finished";

/// One row of the timer list as the host UI shows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub primary_label: String,
    pub secondary_label: String,
    pub tooltip: String,
}

impl DisplayItem {
    /// Row for a timer that is still counting down
    pub fn running(name: &str, remaining_ms: i64) -> Self {
        Self {
            primary_label: name.to_string(),
            secondary_label: format!("{} Remaining", millis_to_hms(remaining_ms)),
            tooltip: format!("{} timer", name),
        }
    }

    /// Row for a timer that has expired and awaits a reset
    pub fn finished(name: &str) -> Self {
        Self {
            primary_label: name.to_string(),
            secondary_label: FINISHED_LABEL.to_string(),
            tooltip: format!("{} {}", name, FINISHED_LABEL),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.secondary_label == FINISHED_LABEL
    }
}

/// Anything the host UI can render as a list of timers.
///
/// `subscribe_changes` hands out a receiver that is marked changed whenever
/// the rendered list is stale and should be queried again.
pub trait Renderable {
    fn list_display_items(&self) -> Result<Vec<DisplayItem>, TimerError>;

    fn subscribe_changes(&self) -> watch::Receiver<u64>;
}

/// Format milliseconds as `HH:MM:SS`.
///
/// Hours wrap at 24, there is no day field. Negative input clamps to zero.
pub fn millis_to_hms(ms: i64) -> String {
    let ms = ms.max(0);
    let seconds = (ms / 1000) % 60;
    let minutes = (ms / 60_000) % 60;
    let hours = (ms / 3_600_000) % 24;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
