use crate::field::Field;
use crate::gateway::GatewayError;
use std::borrow::Cow;

/// Why a registration did not go through.
///
/// The validation variants display exactly the message shown to the visitor.
#[landing_derive::landing_error]
pub enum RegistrationError {
    #[error("Please fill in your {field}.")]
    MissingField { field: Field },

    #[error("Please enter a valid email address.")]
    InvalidEmail { email: String },

    #[error("Please enter your full name (first and last name).")]
    IncompleteName { name: String },

    #[error("Registration submission failed{}: {source}", format_context(.context))]
    Submission { source: GatewayError, context: Option<Cow<'static, str>> },
}

impl RegistrationError {
    /// Whether the visitor can fix this by editing the form.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Submission { .. })
    }
}
