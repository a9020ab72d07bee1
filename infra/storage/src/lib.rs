//! Keyed string storage for the landing page.
//!
//! Two stores back the page state: a disk store that survives restarts (the
//! counterpart of browser local storage, holding preferences and notification
//! sign-ups) and an in-memory store scoped to the process (the counterpart of
//! session storage, holding the referral code).
//!
//! # Core Features
//!
//! - **Validated keys**: [`StorageKey`] rejects anything that is not a plain file-name token.
//! - **Atomic writes**: a unique temp file is written, synced and renamed over the target.
//! - **JSON helpers**: [`Storage::load_json`] and [`Storage::save_json`] wrap serde.
//! - **Self-healing**: stale temp files from interrupted writes are purged on connect.
//!
//! # Examples
//!
//! ```rust
//! use landing_storage::{Storage, StorageError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Prefs {
//!     currency: String,
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), StorageError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     let storage = Storage::builder().root(tmp.path()).connect().await?;
//!
//!     storage.save_json("userPreferences", &Prefs { currency: "dzd".into() }).await?;
//!     let prefs: Option<Prefs> = storage.load_json("userPreferences").await?;
//!     assert_eq!(prefs, Some(Prefs { currency: "dzd".into() }));
//!     Ok(())
//! }
//! ```

mod builder;
mod engine;
mod error;
mod key;
mod maintenance;

pub use builder::StorageBuilder;
pub use engine::{Persistence, Storage};
pub use error::{StorageError, StorageErrorExt};
pub use key::StorageKey;
