use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display currency for prices.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Dzd,
}

impl Currency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Dzd => "dzd",
        }
    }

    /// ISO-style code shown next to amounts.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Dzd => "DZD",
        }
    }

    /// The currency selected by the toggle switch: checked is USD.
    #[must_use]
    pub const fn from_toggle(checked: bool) -> Self {
        if checked { Self::Usd } else { Self::Dzd }
    }

    #[must_use]
    pub const fn is_toggle_checked(self) -> bool {
        matches!(self, Self::Usd)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither `usd` nor `dzd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown currency `{}`", self.0)
    }
}

impl std::error::Error for UnknownCurrency {}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usd" => Ok(Self::Usd),
            "dzd" => Ok(Self::Dzd),
            _ => Err(UnknownCurrency(s.to_owned())),
        }
    }
}

/// Per-visitor display preferences, persisted under
/// [`PREFERENCES_KEY`](crate::constants::PREFERENCES_KEY).
///
/// Missing fields fall back to their defaults, so older or partial records still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub currency: Currency,
    pub theme: String,
    pub language: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self { currency: Currency::Usd, theme: "light".to_owned(), language: "en".to_owned() }
    }
}
