//! Notification boundary
//!
//! The core asks the host to present a one-shot expiry notification and
//! receives the user's selection at some later, indeterminate time.

pub mod prompt_board;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

pub use prompt_board::{PendingPrompt, PromptBoard};

/// Label of the single action offered on an expiry notification
pub const RESET_ACTION: &str = "Reset Timer";

/// Outcome of a presented notification: the selected action label, if any
pub type Selection = Option<String>;

/// Request to present a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub modal: bool,
    pub action: String,
}

impl Notification {
    /// Expiry notification for the named timer
    pub fn finished(timer_name: &str, modal: bool) -> Self {
        Self {
            message: format!("Timer \"{}\" Finished.", timer_name),
            modal,
            action: RESET_ACTION.to_string(),
        }
    }
}

/// Host capability that presents notifications.
///
/// Presentation must not block the caller: the returned future resolves
/// once the user answers, which may be much later or never.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification) -> BoxFuture<'static, Result<Selection, NotifyError>>;
}
