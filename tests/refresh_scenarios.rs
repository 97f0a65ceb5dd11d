//! Timer lifecycle scenarios driven through the render boundary with a
//! paused clock.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use futures::future::{self, BoxFuture, FutureExt};
use timers::{
    tasks::render_task, AppState, Notification, Notifier, NotifyError, PromptBoard, Renderable,
    TimerSettings, RESET_ACTION,
};

// ============================================================================
// Helpers
// ============================================================================

/// Notifier that records every request and never gets an answer
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<Notification>>,
}

impl Recorder {
    fn messages(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for Recorder {
    fn notify(&self, notification: Notification) -> BoxFuture<'static, Result<Option<String>, NotifyError>> {
        self.seen.lock().unwrap().push(notification);
        future::pending().boxed()
    }
}

fn recorded_state() -> (AppState, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let state = AppState::new(TimerSettings::default(), recorder.clone());
    (state, recorder)
}

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test(start_paused = true)]
async fn stand_up_counts_down_then_finishes_once() {
    let (state, recorder) = recorded_state();
    state.add_timer("Stand Up", Some(2.0)).unwrap();

    let items = state.list_display_items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].primary_label, "Stand Up");
    assert_eq!(items[0].secondary_label, "00:02:00 Remaining");
    assert_eq!(items[0].tooltip, "Stand Up timer");

    tokio::time::advance(secs(125)).await;
    let items = state.list_display_items().unwrap();
    assert_eq!(items[0].secondary_label, "Finished");
    assert_eq!(items[0].tooltip, "Stand Up Finished");

    let timers = state.list().unwrap();
    assert!(timers[0].is_paused());
    assert!(timers[0].remaining_ms() < 0);
    assert_eq!(recorder.messages(), vec!["Timer \"Stand Up\" Finished.".to_string()]);

    tokio::time::advance(secs(10)).await;
    state.list_display_items().unwrap();
    assert_eq!(recorder.messages().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn remaining_strictly_decreases_between_ticks() {
    let (state, _recorder) = recorded_state();
    state.add_timer("Tea", Some(1.0)).unwrap();

    let mut last = i64::MAX;
    for _ in 0..60 {
        state.list_display_items().unwrap();
        let remaining = state.list().unwrap()[0].remaining_ms();
        assert!(remaining < last);
        last = remaining;
        tokio::time::advance(secs(1)).await;
    }
    assert!(!state.list().unwrap()[0].is_paused());
}

#[tokio::test(start_paused = true)]
async fn short_timer_finishes_while_long_one_keeps_ticking() {
    let (state, recorder) = recorded_state();
    state.add_timer("A", Some(1.0)).unwrap();
    state.add_timer("B", Some(5.0)).unwrap();

    tokio::time::advance(secs(61)).await;
    let items = state.list_display_items().unwrap();

    assert!(items[0].is_finished());
    assert_eq!(items[1].secondary_label, "00:03:59 Remaining");

    let timers = state.list().unwrap();
    assert!(timers[0].is_paused());
    assert!(!timers[1].is_paused());
    assert_eq!(recorder.messages().len(), 1);

    // B is unpaused, so the loop keeps rescheduling
    assert!(state.tick_pending());
}

#[tokio::test(start_paused = true)]
async fn reset_all_restores_finished_timers() {
    let (state, _recorder) = recorded_state();
    state.add_timer("A", Some(1.0)).unwrap();
    state.add_timer("B", Some(5.0)).unwrap();

    tokio::time::advance(secs(301)).await;
    state.list_display_items().unwrap();
    assert!(state.list().unwrap().iter().all(|t| t.is_paused()));

    assert_eq!(state.reset_all().unwrap(), 2);
    let items = state.list_display_items().unwrap();
    assert_eq!(items[0].secondary_label, "00:01:00 Remaining");
    assert_eq!(items[1].secondary_label, "00:05:00 Remaining");
    assert!(state.list().unwrap().iter().all(|t| !t.is_paused()));
}

#[tokio::test(start_paused = true)]
async fn reset_one_round_trip() {
    let (state, _recorder) = recorded_state();
    state.add_timer("Tea", Some(3.0)).unwrap();

    tokio::time::advance(secs(200)).await;
    state.list_display_items().unwrap();
    assert!(state.list().unwrap()[0].is_paused());

    assert!(state.reset_timer("Tea").unwrap());
    state.list_display_items().unwrap();
    let timer = &state.list().unwrap()[0];
    assert!(!timer.is_paused());
    assert_eq!(timer.remaining_ms(), 180_000);
}

#[tokio::test(start_paused = true)]
async fn no_tick_when_everything_is_finished() {
    let (state, _recorder) = recorded_state();
    state.add_timer("A", Some(1.0)).unwrap();

    tokio::time::advance(secs(90)).await;
    state.list_display_items().unwrap();
    assert!(!state.tick_pending());
}

#[tokio::test(start_paused = true)]
async fn render_task_detects_expiry_without_queries() {
    let (state, recorder) = recorded_state();
    tokio::spawn(render_task(state.clone()));
    tokio::task::yield_now().await;

    state.add_timer("A", Some(1.0)).unwrap();

    // The paused clock auto-advances through the one-second tick chain
    tokio::time::sleep(secs(62)).await;

    assert_eq!(recorder.messages(), vec!["Timer \"A\" Finished.".to_string()]);
    assert!(state.list().unwrap()[0].is_paused());
    assert!(!state.tick_pending());
}

#[tokio::test(start_paused = true)]
async fn prompt_reset_after_delete_is_a_noop() {
    let prompts = PromptBoard::new();
    let state = AppState::new(TimerSettings::default(), Arc::new(prompts.clone()));
    state.add_timer("A", Some(1.0)).unwrap();

    tokio::time::advance(secs(61)).await;
    state.list_display_items().unwrap();
    let pending = prompts.pending();
    assert_eq!(pending.len(), 1);

    state.delete_timer("A").unwrap();
    assert!(prompts.answer(pending[0].id, Some(RESET_ACTION.to_string())));
    tokio::task::yield_now().await;

    assert!(state.list().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn prompt_reset_restarts_the_timer() {
    let prompts = PromptBoard::new();
    let state = AppState::new(TimerSettings::default(), Arc::new(prompts.clone()));
    state.add_timer("A", Some(1.0)).unwrap();

    tokio::time::advance(secs(61)).await;
    state.list_display_items().unwrap();
    let id = prompts.pending()[0].id;

    tokio::time::advance(secs(30)).await;
    assert!(prompts.answer(id, Some(RESET_ACTION.to_string())));
    tokio::task::yield_now().await;

    let items = state.list_display_items().unwrap();
    assert_eq!(items[0].secondary_label, "00:01:00 Remaining");
    assert!(!state.list().unwrap()[0].is_paused());
}
