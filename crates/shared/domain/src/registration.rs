use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw values as they sit in the form controls.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
}

impl FormValues {
    /// A copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            country: self.country.trim().to_owned(),
        }
    }
}

/// One registration attempt, built at submit time and dropped once it resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub timestamp: DateTime<Utc>,
    pub course: String,
    pub source: String,
}

impl RegistrationInput {
    /// Trims `values` and attaches the submission metadata.
    #[must_use]
    pub fn new(
        values: &FormValues,
        timestamp: DateTime<Utc>,
        course: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        let FormValues { name, email, phone, country } = values.trimmed();
        Self { name, email, phone, country, timestamp, course: course.into(), source: source.into() }
    }
}
