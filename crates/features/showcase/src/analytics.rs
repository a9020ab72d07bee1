use crate::error::ShowcaseError;
use landing_domain::analytics::AnalyticsEvent;
use landing_events::{EventBus, Subscription};
use tracing::info;

/// Logs analytics events and fans them out on the event bus. Nothing leaves the process.
#[derive(Debug, Clone)]
pub struct Analytics {
    bus: EventBus,
}

impl Analytics {
    #[must_use]
    pub const fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    /// Records `event`; returns how many subscribers received it.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Events`] if analytics events are bound to a watch channel.
    pub fn track(&self, event: AnalyticsEvent) -> Result<usize, ShowcaseError> {
        info!(event = %event.name, parameters = ?event.parameters, "Event tracked");
        Ok(self.bus.publish(event)?)
    }

    /// Listens to every event tracked from now on.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Events`] if analytics events are bound to a watch channel.
    pub fn subscribe(&self) -> Result<Subscription<AnalyticsEvent>, ShowcaseError> {
        Ok(self.bus.subscribe()?)
    }
}
