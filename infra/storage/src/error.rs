use std::borrow::Cow;

/// A specialized [`StorageError`] enum of this crate.
#[landing_derive::landing_error]
pub enum StorageError {
    /// Keys must be non-empty and use only ASCII letters, digits, `_` or `-`.
    #[error("Invalid storage key{}: {message}", format_context(.context))]
    InvalidKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Storage I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// A stored value is not valid JSON for the requested type, or a value could not be encoded.
    #[error("Malformed stored value{}: {source}", format_context(.context))]
    Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Stored bytes are not UTF-8 text.
    #[error("Stored value is not text{}: {source}", format_context(.context))]
    NotText { source: std::string::FromUtf8Error, context: Option<Cow<'static, str>> },
}
