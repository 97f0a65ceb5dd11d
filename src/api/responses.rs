//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{display::DisplayItem, notify::PendingPrompt};

/// Body of POST /timers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTimerRequest {
    pub name: String,
    /// Falls back to the configured default length when absent
    #[serde(default)]
    pub duration_minutes: Option<f64>,
}

/// API response structure for mutation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: &str, message: String) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
        }
    }

    /// The request changed timer state
    pub fn ok(message: String) -> Self {
        Self::new("ok", message)
    }

    /// The request named something that does not exist; nothing changed
    pub fn unchanged(message: String) -> Self {
        Self::new("unchanged", message)
    }

    /// Create an error response
    pub fn error(message: String) -> Self {
        Self::new("error", message)
    }
}

/// Current timer rows as the sidebar would render them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimersResponse {
    pub timestamp: DateTime<Utc>,
    pub items: Vec<DisplayItem>,
}

/// Expiry prompts still waiting for an answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsResponse {
    pub timestamp: DateTime<Utc>,
    pub pending: Vec<PendingPrompt>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}
