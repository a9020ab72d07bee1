//! The controllers and channels shared with every component.

use crate::bridge::{DesktopForm, DesktopPage, UpdateReceiver};
use landing::features::registration::{RegistrationFlow, SimulatedGateway};
use landing::features::showcase::PageController;
use landing::features::showcase::notify::LoggingNotificationGateway;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;

pub type Registration = RegistrationFlow<DesktopForm, SimulatedGateway>;
pub type Page = PageController<DesktopPage, LoggingNotificationGateway>;

/// Handed to the Dioxus tree as context.
///
/// Controller calls are spawned on the tokio runtime that built them, since their
/// timers must outlive the component that triggered them.
#[derive(Debug, Clone)]
pub struct Services {
    runtime: Handle,
    registration: Arc<Registration>,
    page: Arc<Page>,
    pub form: Arc<DesktopForm>,
    pub page_view: Arc<DesktopPage>,
    updates: Arc<Mutex<Option<UpdateReceiver>>>,
}

impl Services {
    #[must_use]
    pub fn new(
        runtime: Handle,
        registration: Registration,
        page: Page,
        form: Arc<DesktopForm>,
        page_view: Arc<DesktopPage>,
        updates: UpdateReceiver,
    ) -> Self {
        Self {
            runtime,
            registration: Arc::new(registration),
            page: Arc::new(page),
            form,
            page_view,
            updates: Arc::new(Mutex::new(Some(updates))),
        }
    }

    /// Date shown under the early-bird timer.
    #[must_use]
    pub fn deadline_label(&self) -> String {
        self.page.deadline_label()
    }

    /// The update stream. Only the first caller gets it.
    #[must_use]
    pub fn take_updates(&self) -> Option<UpdateReceiver> {
        self.updates.lock().take()
    }

    /// Runs `action` against the registration flow.
    pub fn with_form<F, Fut>(&self, action: F)
    where
        F: FnOnce(Arc<Registration>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let registration = Arc::clone(&self.registration);
        self.runtime.spawn(async move { action(registration).await });
    }

    /// Runs `action` against the page controller.
    pub fn with_page<F, Fut>(&self, action: F)
    where
        F: FnOnce(Arc<Page>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let page = Arc::clone(&self.page);
        self.runtime.spawn(async move { action(page).await });
    }
}
