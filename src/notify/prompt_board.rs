//! Pending notification prompts answered through the HTTP surface

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use futures::future::{self, BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use super::{Notification, Notifier, Selection};
use crate::error::NotifyError;

/// A prompt waiting for the user's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPrompt {
    pub id: u64,
    pub message: String,
    pub modal: bool,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
struct OpenPrompt {
    prompt: PendingPrompt,
    responder: oneshot::Sender<Selection>,
}

#[derive(Debug, Default)]
struct Board {
    next_id: u64,
    open: Vec<OpenPrompt>,
}

/// Notifier that logs each notification and keeps it open until answered
#[derive(Debug, Clone, Default)]
pub struct PromptBoard {
    board: Arc<Mutex<Board>>,
}

impl PromptBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompts still waiting for an answer, oldest first
    pub fn pending(&self) -> Vec<PendingPrompt> {
        match self.board.lock() {
            Ok(board) => board.open.iter().map(|open| open.prompt.clone()).collect(),
            Err(e) => {
                warn!("Failed to lock prompt board: {}", e);
                Vec::new()
            }
        }
    }

    /// Answer a prompt. Returns false if no prompt has this id.
    pub fn answer(&self, id: u64, selection: Selection) -> bool {
        let open = {
            let mut board = match self.board.lock() {
                Ok(board) => board,
                Err(e) => {
                    warn!("Failed to lock prompt board: {}", e);
                    return false;
                }
            };
            match board.open.iter().position(|open| open.prompt.id == id) {
                Some(index) => board.open.remove(index),
                None => return false,
            }
        };

        debug!("Prompt {} answered with {:?}", id, selection);
        if open.responder.send(selection).is_err() {
            debug!("Prompt {} answered after its waiter went away", id);
        }
        true
    }
}

impl Notifier for PromptBoard {
    fn notify(&self, notification: Notification) -> BoxFuture<'static, Result<Selection, NotifyError>> {
        let (tx, rx) = oneshot::channel();

        let id = {
            let mut board = match self.board.lock() {
                Ok(board) => board,
                Err(e) => {
                    let error = NotifyError::Unavailable(e.to_string());
                    return future::ready(Err(error)).boxed();
                }
            };
            board.next_id += 1;
            let id = board.next_id;
            board.open.push(OpenPrompt {
                prompt: PendingPrompt {
                    id,
                    message: notification.message.clone(),
                    modal: notification.modal,
                    action: notification.action.clone(),
                    created_at: Utc::now(),
                },
                responder: tx,
            });
            id
        };

        info!("{} (prompt {}, modal={})", notification.message, id, notification.modal);
        async move { rx.await.map_err(|_| NotifyError::Closed) }.boxed()
    }
}
