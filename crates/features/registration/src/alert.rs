//! The single transient alert shown above the form.

use crate::view::FormView;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    /// CSS-style class suffix (`alert-success`, `alert-error`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug)]
struct Shown {
    id: AlertId,
    dismiss: JoinHandle<()>,
}

/// Keeps at most one alert on screen.
///
/// Showing an alert removes the previous one and cancels its timer. Each alert
/// removes itself after the configured duration unless it has been replaced.
#[derive(Debug)]
pub struct AlertBoard {
    current: Arc<Mutex<Option<Shown>>>,
    next_id: AtomicU64,
    duration: Duration,
}

impl AlertBoard {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self { current: Arc::default(), next_id: AtomicU64::new(1), duration }
    }

    /// Shows `message`, replacing any alert already on screen. Must run inside a
    /// tokio runtime.
    pub fn show<V: FormView>(
        &self,
        view: &Arc<V>,
        kind: AlertKind,
        message: impl Into<String>,
    ) -> AlertId {
        let id = AlertId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let alert = Alert { id, kind, message: message.into() };

        let mut current = self.current.lock();
        if let Some(previous) = current.take() {
            previous.dismiss.abort();
            view.remove_alert(previous.id);
        }
        view.show_alert(&alert);
        trace!(id = id.0, kind = kind.as_str(), "Alert shown");

        let slot = Arc::clone(&self.current);
        let view = Arc::clone(view);
        let duration = self.duration;
        let dismiss = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let expired = {
                let mut slot = slot.lock();
                let is_current = slot.as_ref().is_some_and(|shown| shown.id == id);
                if is_current {
                    slot.take();
                }
                is_current
            };
            if expired {
                view.remove_alert(id);
                trace!(id = id.0, "Alert dismissed");
            }
        });
        *current = Some(Shown { id, dismiss });

        id
    }

    /// The alert currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<AlertId> {
        self.current.lock().as_ref().map(|shown| shown.id)
    }
}
