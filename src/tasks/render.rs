//! Render task: re-queries the timer list whenever it goes stale

use tracing::{debug, error, info};

use crate::display::Renderable;

/// Background task standing in for the host tree view.
///
/// Each change signal triggers one `list_display_items` query, which in turn
/// recomputes remaining times, fires expiry notifications and schedules the
/// next tick while any timer runs.
pub async fn render_task<R: Renderable>(view: R) {
    info!("Starting render task");

    let mut changes = view.subscribe_changes();

    while changes.changed().await.is_ok() {
        match view.list_display_items() {
            Ok(items) => debug!("Rendered {} timers", items.len()),
            Err(e) => error!("Failed to render timers: {}", e),
        }
    }

    info!("Change signal closed, render task stopping");
}
