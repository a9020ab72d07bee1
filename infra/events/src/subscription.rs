use crate::bus::Event;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

/// A live listener on a broadcast channel.
///
/// The listener exists exactly as long as this value; there is no separate
/// registration to clean up.
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: broadcast::Receiver<Arc<T>>,
}

impl<T: Event> Subscription<T> {
    pub(crate) const fn new(receiver: broadcast::Receiver<Arc<T>>) -> Self {
        Self { receiver }
    }

    /// Waits for the next event. Returns `None` once the channel is closed.
    ///
    /// A lagging listener skips to the oldest retained event and logs how many it lost.
    pub async fn next(&mut self) -> Option<Arc<T>> {
        let mut skipped = 0u64;
        loop {
            match self.receiver.recv().await {
                Ok(event) => {
                    if skipped > 0 {
                        warn!(event = std::any::type_name::<T>(), skipped, "Subscriber lagged");
                    }
                    return Some(event);
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    skipped = skipped.saturating_add(n);
                    debug!(event = std::any::type_name::<T>(), skipped = n, "Skipping lost events");
                },
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Returns an already-delivered event without waiting.
    pub fn try_next(&mut self) -> Option<Arc<T>> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(_)) => {},
                Err(_) => return None,
            }
        }
    }

    /// Stops listening. Equivalent to dropping the subscription.
    pub fn unsubscribe(self) {
        debug!(event = std::any::type_name::<T>(), "Subscription released");
    }
}

/// A listener on a latest-value channel.
#[derive(Debug)]
pub struct WatchSubscription<T> {
    receiver: watch::Receiver<Arc<T>>,
}

impl<T: Event> WatchSubscription<T> {
    pub(crate) const fn new(receiver: watch::Receiver<Arc<T>>) -> Self {
        Self { receiver }
    }

    /// The value currently held by the channel.
    #[must_use]
    pub fn current(&self) -> Arc<T> {
        self.receiver.borrow().clone()
    }

    /// Waits until the value changes, then returns it. `None` once the channel is closed.
    pub async fn changed(&mut self) -> Option<Arc<T>> {
        match self.receiver.changed().await {
            Ok(()) => Some(self.receiver.borrow_and_update().clone()),
            Err(_) => None,
        }
    }

    pub fn unsubscribe(self) {
        debug!(event = std::any::type_name::<T>(), "Watch subscription released");
    }
}
