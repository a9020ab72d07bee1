use crate::error::EventBusError;
use crate::subscription::{Subscription, WatchSubscription};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{trace, warn};

/// Page events are rare; a small buffer is plenty.
const DEFAULT_CAPACITY: usize = 64;

/// The delivery semantics bound to an event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Every subscriber receives every event.
    Broadcast { capacity: usize },
    /// Subscribers only observe the latest value.
    Watch,
}

/// Marker trait for types that can travel over the [`EventBus`].
pub trait Event: Any + Send + Sync + 'static {}
impl<T: Any + Send + Sync + 'static> Event for T {}

#[derive(Debug)]
struct Channel {
    kind: ChannelKind,
    sender: Box<dyn Any + Send + Sync>,
}

impl Channel {
    fn broadcast<T: Event>(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel::<Arc<T>>(capacity);
        Self { kind: ChannelKind::Broadcast { capacity }, sender: Box::new(tx) }
    }

    fn watch<T: Event>(initial: Arc<T>) -> Self {
        let (tx, _) = watch::channel::<Arc<T>>(initial);
        Self { kind: ChannelKind::Watch, sender: Box::new(tx) }
    }

    fn broadcast_sender<T: Event>(&self) -> Result<broadcast::Sender<Arc<T>>, EventBusError> {
        self.expect_kind::<T>(matches!(self.kind, ChannelKind::Broadcast { .. }), "Broadcast")?;
        self.sender.downcast_ref::<broadcast::Sender<Arc<T>>>().cloned().ok_or_else(mismatch::<T>)
    }

    fn watch_sender<T: Event>(&self) -> Result<watch::Sender<Arc<T>>, EventBusError> {
        self.expect_kind::<T>(self.kind == ChannelKind::Watch, "Watch")?;
        self.sender.downcast_ref::<watch::Sender<Arc<T>>>().cloned().ok_or_else(mismatch::<T>)
    }

    fn expect_kind<T: Event>(&self, ok: bool, expected: &str) -> Result<(), EventBusError> {
        if ok {
            return Ok(());
        }
        Err(EventBusError::ChannelKindMismatch {
            message: format!(
                "Expected {expected} but found {:?} for {}",
                self.kind,
                std::any::type_name::<T>()
            )
            .into(),
            context: None,
        })
    }
}

fn mismatch<T: Event>() -> EventBusError {
    EventBusError::TypeMismatch {
        message: std::any::type_name::<T>().into(),
        context: Some("Unexpected event type".into()),
    }
}

/// A cloneable handle to the shared channel registry.
///
/// Each event type is bound to one channel kind on first use; mixing kinds for the
/// same type is an error.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    channels: Arc<RwLock<FxHashMap<TypeId, Channel>>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to broadcast events of type `T`.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if `T` is bound to a watch channel.
    pub fn subscribe<T: Event>(&self) -> Result<Subscription<T>, EventBusError> {
        self.subscribe_with_capacity(DEFAULT_CAPACITY)
    }

    /// Subscribes with an explicit buffer size. The first caller fixes the capacity.
    ///
    /// # Errors
    /// Returns [`EventBusError::InvalidCapacity`] for zero, or
    /// [`EventBusError::ChannelKindMismatch`] if `T` is bound to a watch channel.
    pub fn subscribe_with_capacity<T: Event>(
        &self,
        capacity: usize,
    ) -> Result<Subscription<T>, EventBusError> {
        if capacity == 0 {
            return Err(EventBusError::InvalidCapacity {
                message: "capacity must be >= 1".into(),
                context: Some(std::any::type_name::<T>().into()),
            });
        }
        let sender = self.broadcast_sender::<T>(capacity)?;
        Ok(Subscription::new(sender.subscribe()))
    }

    /// Publishes an event to all current subscribers and returns how many received it.
    ///
    /// Publishing with no subscribers is not an error; the event is dropped.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if `T` is bound to a watch channel.
    pub fn publish<T: Event>(&self, event: T) -> Result<usize, EventBusError> {
        let sender = self.broadcast_sender::<T>(DEFAULT_CAPACITY)?;
        let delivered = sender.send(Arc::new(event)).unwrap_or(0);
        trace!(event = std::any::type_name::<T>(), delivered, "Event published");
        Ok(delivered)
    }

    /// Subscribes to the latest value of `T`, seeding the channel with `initial` if it
    /// does not exist yet.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if `T` is bound to a broadcast channel.
    pub fn watch<T: Event>(&self, initial: T) -> Result<WatchSubscription<T>, EventBusError> {
        let sender = self.watch_sender(Arc::new(initial))?;
        Ok(WatchSubscription::new(sender.subscribe()))
    }

    /// Replaces the latest value of `T`, notifying watchers.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if `T` is bound to a broadcast channel.
    pub fn publish_latest<T: Event>(&self, value: T) -> Result<(), EventBusError> {
        let value = Arc::new(value);
        let sender = self.watch_sender(Arc::clone(&value))?;
        sender.send_replace(value);
        trace!(event = std::any::type_name::<T>(), "Latest value replaced");
        Ok(())
    }

    /// The latest value of `T`, if a watch channel exists for it.
    #[must_use]
    pub fn latest<T: Event>(&self) -> Option<Arc<T>> {
        let channels = self.channels.read();
        let sender = channels.get(&TypeId::of::<T>())?.watch_sender::<T>().ok()?;
        drop(channels);
        let value = sender.borrow().clone();
        Some(value)
    }

    /// Drops every channel; live subscriptions observe closure.
    ///
    /// Returns the number of channels closed.
    #[must_use]
    pub fn shutdown(&self) -> usize {
        let mut channels = self.channels.write();
        let count = channels.len();
        channels.clear();
        count
    }

    fn broadcast_sender<T: Event>(
        &self,
        capacity: usize,
    ) -> Result<broadcast::Sender<Arc<T>>, EventBusError> {
        let id = TypeId::of::<T>();
        if let Some(channel) = self.channels.read().get(&id) {
            warn_on_capacity::<T>(channel.kind, capacity);
            return channel.broadcast_sender::<T>();
        }

        let mut channels = self.channels.write();
        let channel = channels.entry(id).or_insert_with(|| {
            trace!(event = std::any::type_name::<T>(), capacity, "Creating broadcast channel");
            Channel::broadcast::<T>(capacity)
        });
        channel.broadcast_sender::<T>()
    }

    fn watch_sender<T: Event>(
        &self,
        initial: Arc<T>,
    ) -> Result<watch::Sender<Arc<T>>, EventBusError> {
        let id = TypeId::of::<T>();
        if let Some(channel) = self.channels.read().get(&id) {
            return channel.watch_sender::<T>();
        }

        let mut channels = self.channels.write();
        let channel = channels.entry(id).or_insert_with(|| {
            trace!(event = std::any::type_name::<T>(), "Creating watch channel");
            Channel::watch(initial)
        });
        channel.watch_sender::<T>()
    }
}

fn warn_on_capacity<T: Event>(existing: ChannelKind, requested: usize) {
    if let ChannelKind::Broadcast { capacity } = existing
        && capacity != requested
        && requested != DEFAULT_CAPACITY
    {
        warn!(
            event = std::any::type_name::<T>(),
            existing = capacity,
            requested,
            "Broadcast channel already created with a different capacity"
        );
    }
}
