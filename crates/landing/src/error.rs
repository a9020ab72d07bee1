use landing_showcase::ShowcaseError;
use landing_storage::StorageError;
use std::borrow::Cow;

/// Failures while bringing the site up.
#[landing_derive::landing_error]
pub enum BootstrapError {
    #[error("Bootstrap storage error{}: {source}", format_context(.context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },

    #[error("Bootstrap page error{}: {source}", format_context(.context))]
    Page { source: ShowcaseError, context: Option<Cow<'static, str>> },
}
