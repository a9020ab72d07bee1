//! # Registration Form
//!
//! The course registration slice. A presentation layer implements [`FormView`] and
//! forwards three events to a [`RegistrationFlow`]: submit, field blur and phone
//! keystrokes. The flow validates, hands valid input to a [`RegistrationGateway`] and
//! reports the outcome through a single auto-dismissing alert.
//!
//! ## Architecture
//!
//! 1.  **Validation ([`validate`]):** ordered rules, the first failure wins.
//! 2.  **Formatting ([`format_phone`]):** normalizes the phone field on every keystroke.
//! 3.  **Submission ([`gateway`]):** the outbound seam; [`SimulatedGateway`] waits and logs.
//! 4.  **Feedback ([`alert`]):** at most one alert on screen, dismissed after a delay.

pub mod alert;
mod error;
mod field;
mod flow;
pub mod gateway;
mod phone;
mod validate;
mod view;

pub use crate::alert::{Alert, AlertBoard, AlertId, AlertKind};
pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::field::Field;
pub use crate::flow::RegistrationFlow;
pub use crate::gateway::{GatewayError, RegistrationGateway, SimulatedGateway};
pub use crate::phone::format_phone;
pub use crate::validate::{inline_error, validate};
pub use crate::view::{FormView, SubmitButton};

/// Shown once the gateway accepts a registration.
pub const SUCCESS_MESSAGE: &str =
    "Thank you for registering! We will contact you within 24 hours with payment details.";
/// Shown for any gateway failure.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again or contact us directly.";
/// Submit button label while a submission is in flight.
pub const PROCESSING_LABEL: &str = "Processing...";
