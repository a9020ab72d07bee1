//! Facade crate for the course landing page.
//! Re-exports the shared modules and composes the two page slices over one set of stores.
//! Keep this crate thin: it should wire other crates together, not implement page logic.
//!
//! ## Usage
//! - Load a [`SiteConfig`](domain::config::SiteConfig) with [`kernel::config::load_config`].
//! - Call [`init`] to open the stores and the event bus.
//! - Build the form and page controllers with [`Platform::registration`] and
//!   [`Platform::page`], each over its own view.

mod error;

pub use crate::error::{BootstrapError, BootstrapErrorExt};

use landing_domain::config::SiteConfig;
use landing_events::EventBus;
use landing_registration::{FormView, RegistrationFlow, SimulatedGateway};
use landing_showcase::notify::LoggingNotificationGateway;
use landing_showcase::{PageContext, PageController, PageLoad, PageView};
use landing_storage::Storage;
use std::sync::Arc;
use tracing::info;

pub use landing_domain as domain;
pub use landing_events as events;
pub use landing_kernel as kernel;
pub use landing_logger as logger;
pub use landing_storage as storage;

/// The two page slices.
pub mod features {
    pub use landing_registration as registration;
    pub use landing_showcase as showcase;

    /// Slices compiled into this build.
    pub const ENABLED: &[&str] = &["registration", "showcase"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Stores and bus shared by both slices for one run of the site.
#[derive(Debug, Clone)]
pub struct Platform {
    pub config: SiteConfig,
    /// Persistent store under `storage.data_dir`.
    pub local: Storage,
    /// In-memory store that ends with the process.
    pub session: Storage,
    pub events: EventBus,
}

/// Opens the local store and creates the session store and event bus.
///
/// # Errors
/// Returns [`BootstrapError::Storage`] if the data directory cannot be created or read.
pub async fn init(config: SiteConfig) -> Result<Platform, BootstrapError> {
    let local = Storage::builder()
        .root(&config.storage.data_dir)
        .connect()
        .await
        .context("Failed to open the local store")?;

    info!(
        data_dir = %config.storage.data_dir.display(),
        features = ?features::ENABLED,
        "Platform initialized"
    );

    Ok(Platform { config, local, session: Storage::memory(), events: EventBus::new() })
}

impl Platform {
    /// The registration form controller, submitting through [`SimulatedGateway`].
    #[must_use]
    pub fn registration<V: FormView>(&self, view: Arc<V>) -> RegistrationFlow<V, SimulatedGateway> {
        let registration = &self.config.registration;
        RegistrationFlow::new(
            view,
            SimulatedGateway::new(registration.submit_delay()),
            registration.clone(),
        )
    }

    /// Runs the page-load sequence for `view`.
    ///
    /// # Errors
    /// Returns [`BootstrapError::Page`] if the page cannot load its preferences or
    /// record the referral.
    pub async fn page<V: PageView>(
        &self,
        view: Arc<V>,
        load: PageLoad,
    ) -> Result<PageController<V, LoggingNotificationGateway>, BootstrapError> {
        let context = PageContext::new(
            self.local.clone(),
            self.session.clone(),
            self.events.clone(),
            self.config.showcase.clone(),
        );
        PageController::load(view, context, LoggingNotificationGateway, load)
            .await
            .context("Page failed to load")
    }
}
