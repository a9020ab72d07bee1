use crate::constants::{PAGE_COURSE, PAGE_NAME, PAGE_VIEW};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named analytics event with string parameters. Never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub parameters: BTreeMap<String, String>,
}

impl AnalyticsEvent {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), parameters: BTreeMap::new() }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// The event tracked once per page load.
    #[must_use]
    pub fn page_view() -> Self {
        Self::new(PAGE_VIEW).with("page", PAGE_NAME).with("course", PAGE_COURSE)
    }
}
