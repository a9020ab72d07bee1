//! "Notify me" sign-ups for courses that have not launched.

use crate::error::ShowcaseError;
use landing_domain::constants::NOTIFICATIONS_KEY;
use landing_domain::notification::NotificationRequest;
use landing_storage::{Storage, StorageError};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub const NOTIFY_CONFIRMATION: &str = "Thank you! We'll notify you when this course becomes available.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

/// The prompt shown before asking for an address.
#[must_use]
pub fn notify_prompt(course_title: &str) -> String {
    format!("Enter your email to be notified when \"{course_title}\" becomes available:")
}

/// Result of a notify-me interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The prompt was dismissed or left blank.
    Cancelled,
    /// The address did not look like an email.
    Invalid,
    Subscribed(NotificationRequest),
}

/// Forwards sign-ups to whoever sends the launch emails.
pub trait NotificationGateway: Send + Sync + 'static {
    fn forward(&self, request: &NotificationRequest) -> impl Future<Output = ()> + Send;
}

/// Only logs the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotificationGateway;

impl NotificationGateway for LoggingNotificationGateway {
    async fn forward(&self, request: &NotificationRequest) {
        info!(course = %request.course_title, email = %request.email, "Notification request stored");
    }
}

/// The append-only sign-up list in the local store.
///
/// Appends through one log, and its clones, run one at a time.
#[derive(Debug, Clone)]
pub struct NotificationLog {
    storage: Storage,
    appends: Arc<Mutex<()>>,
}

impl NotificationLog {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage, appends: Arc::new(Mutex::new(())) }
    }

    /// Every stored request. A malformed list reads as empty.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Storage`] if the store cannot be read.
    pub async fn list(&self) -> Result<Vec<NotificationRequest>, ShowcaseError> {
        match self.storage.load_json::<Vec<NotificationRequest>, _>(NOTIFICATIONS_KEY).await {
            Ok(list) => Ok(list.unwrap_or_default()),
            Err(StorageError::Malformed { source, .. }) => {
                warn!(error = %source, key = NOTIFICATIONS_KEY, "Discarding malformed notification list");
                Ok(Vec::new())
            },
            Err(err) => Err(err.into()),
        }
    }

    /// Appends `request`. Duplicates are kept.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Storage`] if the list cannot be read or written.
    pub async fn append(&self, request: NotificationRequest) -> Result<(), ShowcaseError> {
        let _append = self.appends.lock().await;
        let mut list = self.list().await?;
        list.push(request);
        self.storage.save_json(NOTIFICATIONS_KEY, &list).await?;
        Ok(())
    }
}
