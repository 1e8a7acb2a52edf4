//! Transient notification queue
//!
//! A process-wide queue of toast-style messages. Every pushed message
//! auto-dismisses after a fixed delay via a per-message timer task;
//! dismissal (manual or timed) is idempotent, so dismissing an
//! already-removed id is a no-op.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::validation::validate_required;

/// A transient notification message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub created_at: DateTime<Utc>,
}

/// Severity variant of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// Input for pushing a notification
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushToastInput {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub variant: ToastVariant,
}

struct CenterInner {
    queue: RwLock<Vec<Toast>>,
    timers: Mutex<HashMap<Uuid, AbortHandle>>,
    dismiss_after: Duration,
}

/// Process-wide notification queue handle
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<CenterInner>,
}

impl NotificationCenter {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            inner: Arc::new(CenterInner {
                queue: RwLock::new(Vec::new()),
                timers: Mutex::new(HashMap::new()),
                dismiss_after,
            }),
        }
    }

    /// Current queue snapshot, newest first
    pub async fn list(&self) -> Vec<Toast> {
        self.inner.queue.read().await.clone()
    }

    /// Push a message and schedule its auto-dismiss
    pub async fn push(&self, input: PushToastInput) -> AppResult<Toast> {
        validate_required(&input.title).map_err(|e| AppError::validation("title", e))?;

        let toast = Toast {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            variant: input.variant,
            created_at: Utc::now(),
        };

        self.inner.queue.write().await.insert(0, toast.clone());
        self.schedule_dismiss(toast.id);

        Ok(toast)
    }

    /// Remove a message. Dismissing an unknown or already-dismissed id is
    /// a no-op.
    pub async fn dismiss(&self, id: Uuid) {
        if let Some(handle) = self.take_timer(id) {
            handle.abort();
        }
        self.inner.queue.write().await.retain(|t| t.id != id);
    }

    fn schedule_dismiss(&self, id: Uuid) {
        let center = self.clone();
        let delay = self.inner.dismiss_after;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            center.take_timer(id);
            center.inner.queue.write().await.retain(|t| t.id != id);
        });

        if let Ok(mut timers) = self.inner.timers.lock() {
            timers.insert(id, task.abort_handle());
        }
    }

    fn take_timer(&self, id: Uuid) -> Option<AbortHandle> {
        self.inner.timers.lock().ok().and_then(|mut t| t.remove(&id))
    }
}
