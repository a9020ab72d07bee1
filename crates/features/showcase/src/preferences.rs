use crate::error::ShowcaseError;
use landing_domain::constants::PREFERENCES_KEY;
use landing_domain::currency::{Currency, UserPreferences};
use landing_events::{EventBus, WatchSubscription};
use landing_storage::{Storage, StorageError};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// The visitor's preferences, mirrored in the local store and on the event bus.
///
/// Reads come from memory. Every mutation is written through to the store and
/// published as the latest [`UserPreferences`] value. Saves are serialized, and memory
/// only changes once the store has accepted the new value.
#[derive(Debug)]
pub struct PreferencesStore {
    storage: Storage,
    bus: EventBus,
    current: RwLock<UserPreferences>,
    saves: Mutex<()>,
}

impl PreferencesStore {
    /// Loads the saved preferences, falling back to defaults when nothing usable is stored.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Storage`] if the store cannot be read, or
    /// [`ShowcaseError::Events`] if the bus already binds preferences to another channel kind.
    pub async fn open(storage: Storage, bus: EventBus) -> Result<Self, ShowcaseError> {
        let current = load(&storage).await?;
        bus.publish_latest(current.clone())?;
        Ok(Self { storage, bus, current: RwLock::new(current), saves: Mutex::new(()) })
    }

    #[must_use]
    pub fn get(&self) -> UserPreferences {
        self.current.read().clone()
    }

    #[must_use]
    pub fn currency(&self) -> Currency {
        self.current.read().currency
    }

    /// Changes the currency in memory only; nothing is persisted until the next save.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Events`] if the change cannot be published.
    pub fn assume_currency(&self, currency: Currency) -> Result<(), ShowcaseError> {
        let snapshot = {
            let mut current = self.current.write();
            current.currency = currency;
            current.clone()
        };
        self.bus.publish_latest(snapshot)?;
        Ok(())
    }

    /// Selects `currency` and persists the preferences.
    ///
    /// A failed write leaves the previous preferences in place.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Storage`] if the write fails, or
    /// [`ShowcaseError::Events`] if the change cannot be published.
    pub async fn set_currency(&self, currency: Currency) -> Result<UserPreferences, ShowcaseError> {
        let _save = self.saves.lock().await;
        let mut snapshot = self.get();
        snapshot.currency = currency;
        self.storage.save_json(PREFERENCES_KEY, &snapshot).await?;
        self.current.write().clone_from(&snapshot);
        self.bus.publish_latest(snapshot.clone())?;
        debug!(currency = %currency, "Currency preference saved");
        Ok(snapshot)
    }

    /// Watches preference changes.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Events`] if preferences are bound to a broadcast channel.
    pub fn watch(&self) -> Result<WatchSubscription<UserPreferences>, ShowcaseError> {
        Ok(self.bus.watch(self.get())?)
    }
}

async fn load(storage: &Storage) -> Result<UserPreferences, ShowcaseError> {
    match storage.load_json::<UserPreferences, _>(PREFERENCES_KEY).await {
        Ok(saved) => Ok(saved.unwrap_or_default()),
        Err(StorageError::Malformed { source, .. }) => {
            warn!(error = %source, key = PREFERENCES_KEY, "Discarding malformed preferences");
            Ok(UserPreferences::default())
        },
        Err(err) => Err(err.into()),
    }
}
