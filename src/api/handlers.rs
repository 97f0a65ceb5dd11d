//! HTTP endpoint handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use tracing::{error, info};

use super::{
    responses::{AddTimerRequest, ApiResponse, HealthResponse, NotificationsResponse, TimersResponse},
    HostState,
};
use crate::{display::Renderable, error::TimerError, notify::RESET_ACTION};

/// Error half of every fallible handler
pub type ApiError = (StatusCode, Json<ApiResponse>);

fn timer_error(e: TimerError) -> ApiError {
    if e.is_invalid_input() {
        (StatusCode::BAD_REQUEST, Json(ApiResponse::error(e.to_string())))
    } else {
        error!("Timer store failure: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("internal error".to_string())),
        )
    }
}

/// Handle GET /timers - Refresh and return the timer list
pub async fn list_timers_handler(State(host): State<HostState>) -> Result<Json<TimersResponse>, ApiError> {
    let items = host.timers.list_display_items().map_err(timer_error)?;
    Ok(Json(TimersResponse {
        timestamp: Utc::now(),
        items,
    }))
}

/// Handle POST /timers - Add a new timer
pub async fn add_timer_handler(
    State(host): State<HostState>,
    payload: Result<Json<AddTimerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(rejection.body_text())),
        )
    })?;

    let timer = host
        .timers
        .add_timer(&request.name, request.duration_minutes)
        .map_err(timer_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(format!(
            "Timer \"{}\" started for {} minutes",
            timer.name(),
            timer.duration_minutes()
        ))),
    ))
}

/// Handle POST /timers/:name/reset - Restart one timer
pub async fn reset_timer_handler(
    State(host): State<HostState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let found = host.timers.reset_timer(&name).map_err(timer_error)?;
    Ok(Json(if found {
        ApiResponse::ok(format!("Timer \"{}\" reset", name))
    } else {
        ApiResponse::unchanged(format!("No timer named \"{}\"", name))
    }))
}

/// Handle POST /reset-all - Restart every timer
pub async fn reset_all_handler(State(host): State<HostState>) -> Result<Json<ApiResponse>, ApiError> {
    let count = host.timers.reset_all().map_err(timer_error)?;
    Ok(Json(ApiResponse::ok(format!("Reset {} timers", count))))
}

/// Handle DELETE /timers/:name - Remove one timer
pub async fn delete_timer_handler(
    State(host): State<HostState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let found = host.timers.delete_timer(&name).map_err(timer_error)?;
    Ok(Json(if found {
        ApiResponse::ok(format!("Timer \"{}\" deleted", name))
    } else {
        ApiResponse::unchanged(format!("No timer named \"{}\"", name))
    }))
}

/// Handle GET /notifications - List unanswered expiry prompts
pub async fn notifications_handler(State(host): State<HostState>) -> Json<NotificationsResponse> {
    Json(NotificationsResponse {
        timestamp: Utc::now(),
        pending: host.prompts.pending(),
    })
}

/// Handle POST /notifications/:id/reset - Choose "Reset Timer" on a prompt
pub async fn notification_reset_handler(
    State(host): State<HostState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse>, ApiError> {
    answer_prompt(&host, id, Some(RESET_ACTION.to_string()))
}

/// Handle POST /notifications/:id/dismiss - Close a prompt without action
pub async fn notification_dismiss_handler(
    State(host): State<HostState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse>, ApiError> {
    answer_prompt(&host, id, None)
}

fn answer_prompt(host: &HostState, id: u64, selection: Option<String>) -> Result<Json<ApiResponse>, ApiError> {
    let label = selection.clone().unwrap_or_else(|| "dismiss".to_string());
    if host.prompts.answer(id, selection) {
        info!("Prompt {} answered: {}", id, label);
        Ok(Json(ApiResponse::ok(format!("Prompt {} answered: {}", id, label))))
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("No pending prompt with id {}", id))),
        ))
    }
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(host): State<HostState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(host.timers.get_uptime()))
}
