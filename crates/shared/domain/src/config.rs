use crate::constants::{REGISTRATION_COURSE, REGISTRATION_SOURCE};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// 2024-12-31T23:59:59Z
const EARLY_BIRD_DEADLINE: i64 = 1_735_689_599;

/// Top-level site configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub registration: RegistrationConfig,
    pub showcase: ShowcaseConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Registration form behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    pub submit_delay_ms: u64,
    pub alert_duration_ms: u64,
    pub course: String,
    pub source: String,
}

impl RegistrationConfig {
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    #[must_use]
    pub const fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_duration_ms)
    }
}

/// Page interaction timings and geometry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub early_bird_deadline: DateTime<Utc>,
    pub countdown_interval_secs: u64,
    pub modal_open_delay_ms: u64,
    pub modal_transition_ms: u64,
    pub highlight_ms: u64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: f64,
    pub preview_offset_px: f64,
    pub preview_width_px: f64,
    /// Overrides the detected local timezone (IANA name).
    pub timezone: Option<String>,
}

impl ShowcaseConfig {
    #[must_use]
    pub const fn countdown_interval(&self) -> Duration {
        Duration::from_secs(self.countdown_interval_secs)
    }

    #[must_use]
    pub const fn modal_open_delay(&self) -> Duration {
        Duration::from_millis(self.modal_open_delay_ms)
    }

    #[must_use]
    pub const fn modal_transition(&self) -> Duration {
        Duration::from_millis(self.modal_transition_ms)
    }

    #[must_use]
    pub const fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}

/// Where the local store keeps its files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
}

// --- Default ---

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            alert_duration_ms: 5000,
            course: REGISTRATION_COURSE.to_owned(),
            source: REGISTRATION_SOURCE.to_owned(),
        }
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            early_bird_deadline: DateTime::from_timestamp(EARLY_BIRD_DEADLINE, 0)
                .unwrap_or_default(),
            countdown_interval_secs: 60,
            modal_open_delay_ms: 10,
            modal_transition_ms: 300,
            highlight_ms: 2000,
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 50.0,
            preview_offset_px: 10.0,
            preview_width_px: 280.0,
            timezone: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None }
    }
}
