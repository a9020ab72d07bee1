//! The [`Storage`] handle and its two persistence modes.
//!
//! `Memory` keeps values in a process-local map and plays the role of browser
//! session storage. `Disk` keeps one file per key under a root directory and plays
//! the role of local storage; every write goes through an atomic temp-file swap.

use crate::builder::StorageBuilder;
use crate::error::{StorageError, StorageErrorExt};
use crate::key::StorageKey;
use crate::maintenance;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub(crate) const VALUE_SUFFIX: &str = "val";
pub(crate) const TMP_MARKER: &str = ".landingtmp.";

/// Where a [`Storage`] keeps its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Lives as long as the process (session storage).
    Memory,
    /// Survives restarts (local storage).
    Disk,
}

#[derive(Debug)]
pub(crate) enum Backend {
    Memory(RwLock<FxHashMap<StorageKey, String>>),
    Disk { root: PathBuf, tmp_counter: AtomicU64, stale_after: Duration },
}

#[derive(Debug)]
pub struct StorageInner {
    pub(crate) backend: Backend,
}

/// A cheap, cloneable handle to a keyed string store.
///
/// # Example
///
/// ```rust
/// use landing_storage::{Storage, StorageError};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), StorageError> {
///     # let tmp = tempfile::tempdir().unwrap();
///     let local = Storage::builder().root(tmp.path().join("local")).connect().await?;
///     local.set("referral", "spring-launch").await?;
///     assert_eq!(local.get("referral").await?.as_deref(), Some("spring-launch"));
///
///     let session = Storage::memory();
///     assert!(session.get("referral").await?.is_none());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Storage {
    pub(crate) inner: Arc<StorageInner>,
}

impl Deref for Storage {
    type Target = StorageInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Storage {
    #[must_use = "The storage engine is not initialized until you call .connect()"]
    pub fn builder() -> StorageBuilder {
        StorageBuilder::new()
    }

    /// An empty in-memory store.
    #[must_use]
    pub fn memory() -> Self {
        Self {
            inner: Arc::new(StorageInner { backend: Backend::Memory(RwLock::default()) }),
        }
    }

    #[must_use]
    pub fn persistence(&self) -> Persistence {
        match self.inner.backend {
            Backend::Memory(_) => Persistence::Memory,
            Backend::Disk { .. } => Persistence::Disk,
        }
    }

    /// The physical directory of a disk store.
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        match &self.inner.backend {
            Backend::Memory(_) => None,
            Backend::Disk { root, .. } => Some(root),
        }
    }

    /// Reads the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for a malformed key, [`StorageError::Io`]
    /// for disk failures and [`StorageError::NotText`] if the file is not UTF-8.
    pub async fn get<K>(&self, key: K) -> Result<Option<String>, StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        let key = key.try_into()?;
        match &self.inner.backend {
            Backend::Memory(map) => Ok(map.read().get(&key).cloned()),
            Backend::Disk { root, .. } => {
                let path = value_path(root, &key);
                match fs::read(&path).await {
                    Ok(bytes) => String::from_utf8(bytes)
                        .map(Some)
                        .context(format!("Key {key}")),
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(err) => Err(StorageError::Io {
                        source: err,
                        context: Some(format!("Read failed: {}", path.display()).into()),
                    }),
                }
            },
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// On disk the value is written to a unique temporary file, synced, then renamed
    /// over the target, so readers never observe a partial value.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for a malformed key and [`StorageError::Io`]
    /// if the write or the swap fails.
    pub async fn set<K>(&self, key: K, value: impl Into<String>) -> Result<(), StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        let key = key.try_into()?;
        let value = value.into();
        match &self.inner.backend {
            Backend::Memory(map) => {
                map.write().insert(key, value);
                Ok(())
            },
            Backend::Disk { root, tmp_counter, .. } => {
                write_atomic(&value_path(root, &key), value.as_bytes(), tmp_counter).await
            },
        }
    }

    /// Removes `key`. Returns whether a value was present.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for a malformed key and [`StorageError::Io`]
    /// if the file exists but cannot be removed.
    pub async fn remove<K>(&self, key: K) -> Result<bool, StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        let key = key.try_into()?;
        match &self.inner.backend {
            Backend::Memory(map) => Ok(map.write().remove(&key).is_some()),
            Backend::Disk { root, .. } => {
                let path = value_path(root, &key);
                match fs::remove_file(&path).await {
                    Ok(()) => {
                        debug!(key = %key, "Value removed");
                        Ok(true)
                    },
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
                    Err(err) => Err(StorageError::Io {
                        source: err,
                        context: Some(format!("Failed to delete: {}", path.display()).into()),
                    }),
                }
            },
        }
    }

    /// Every key currently holding a value, sorted.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the root directory cannot be listed.
    pub async fn keys(&self) -> Result<Vec<StorageKey>, StorageError> {
        let mut keys = match &self.inner.backend {
            Backend::Memory(map) => map.read().keys().cloned().collect::<Vec<_>>(),
            Backend::Disk { root, .. } => {
                let mut keys = Vec::new();
                let mut entries = fs::read_dir(root)
                    .await
                    .context(format!("Failed to list {}", root.display()))?;
                while let Some(entry) = entries.next_entry().await.context("Failed to list")? {
                    let path = entry.path();
                    if path.extension().and_then(|ext| ext.to_str()) != Some(VALUE_SUFFIX) {
                        continue;
                    }
                    if let Some(key) = path
                        .file_stem()
                        .and_then(|stem| stem.to_str())
                        .and_then(|stem| StorageKey::try_from(stem).ok())
                    {
                        keys.push(key);
                    }
                }
                keys
            },
        };
        keys.sort();
        Ok(keys)
    }

    /// Reads and decodes a JSON value. Absent keys yield `Ok(None)`.
    ///
    /// # Errors
    /// Returns [`StorageError::Malformed`] if the stored text does not decode as `T`,
    /// in addition to the errors of [`Storage::get`].
    pub async fn load_json<T, K>(&self, key: K) -> Result<Option<T>, StorageError>
    where
        T: DeserializeOwned,
        K: TryInto<StorageKey, Error = StorageError>,
    {
        let key = key.try_into()?;
        let Some(raw) = self.get(&key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).context(format!("Key {key}"))
    }

    /// Encodes `value` as JSON and stores it.
    ///
    /// # Errors
    /// Returns [`StorageError::Malformed`] if encoding fails, in addition to the errors
    /// of [`Storage::set`].
    pub async fn save_json<T, K>(&self, key: K, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
        K: TryInto<StorageKey, Error = StorageError>,
    {
        let key = key.try_into()?;
        let raw = serde_json::to_string(value).context(format!("Key {key}"))?;
        self.set(&key, raw).await
    }

    /// Removes leftover temporary files of interrupted writes.
    pub async fn purge_tmp(&self) {
        if let Backend::Disk { root, stale_after, .. } = &self.inner.backend {
            maintenance::purge_tmp(root, *stale_after).await;
        }
    }
}

fn value_path(root: &Path, key: &StorageKey) -> PathBuf {
    root.join(format!("{key}.{VALUE_SUFFIX}"))
}

async fn write_atomic(
    target: &Path,
    data: &[u8],
    counter: &AtomicU64,
) -> Result<(), StorageError> {
    let temp = unique_tmp_path(target, counter);

    {
        let mut file = fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&temp)
            .await
            .context(format!("Temp creation failed: {}", temp.display()))?;
        file.write_all(data).await.context("Write failed")?;
        file.sync_all().await.context("Sync failed")?;
    }

    if let Err(err) = fs::rename(&temp, target).await {
        if err.kind() != std::io::ErrorKind::AlreadyExists {
            let _ = fs::remove_file(&temp).await;
            return Err(StorageError::Io {
                source: err,
                context: Some(
                    format!("Atomic swap failed: {} -> {}", temp.display(), target.display())
                        .into(),
                ),
            });
        }
        fs::remove_file(target)
            .await
            .context(format!("Failed to replace existing file: {}", target.display()))?;
        fs::rename(&temp, target)
            .await
            .context(format!("Atomic swap failed: {} -> {}", temp.display(), target.display()))?;
    }

    debug!(path = %target.display(), "Value saved atomically");
    Ok(())
}

fn unique_tmp_path(target: &Path, counter: &AtomicU64) -> PathBuf {
    let counter = counter.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("value");
    target.with_file_name(format!("{file_name}{TMP_MARKER}{counter}"))
}
