//! HTTP API module
//!
//! This module exposes the user input, render and notification boundaries
//! of the timer core over HTTP.

pub mod handlers;
pub mod responses;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{notify::PromptBoard, state::AppState};
use handlers::*;

/// State shared by all handlers
#[derive(Clone)]
pub struct HostState {
    pub timers: AppState,
    pub prompts: PromptBoard,
}

/// Create the HTTP router with all endpoints
pub fn create_router(timers: AppState, prompts: PromptBoard) -> Router {
    Router::new()
        .route("/timers", get(list_timers_handler).post(add_timer_handler))
        .route("/timers/:name", delete(delete_timer_handler))
        .route("/timers/:name/reset", post(reset_timer_handler))
        .route("/reset-all", post(reset_all_handler))
        .route("/notifications", get(notifications_handler))
        .route("/notifications/:id/reset", post(notification_reset_handler))
        .route("/notifications/:id/dismiss", post(notification_dismiss_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(HostState { timers, prompts })
}
