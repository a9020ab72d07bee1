use crate::alert::{Alert, AlertId};
use crate::field::Field;
use landing_domain::registration::FormValues;

/// State of the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    pub label: String,
}

/// What the registration flow needs from the rendered form.
///
/// Implementations are shared with timer tasks, hence `Send + Sync + 'static`.
pub trait FormView: Send + Sync + 'static {
    /// Current raw values of the four inputs.
    fn values(&self) -> FormValues;

    fn submit_button(&self) -> SubmitButton;

    fn set_submit_button(&self, button: &SubmitButton);

    /// Replaces the phone input's text.
    fn set_phone(&self, formatted: &str);

    /// Shows or clears the inline message under `field`.
    fn set_field_error(&self, field: Field, message: Option<&str>);

    /// Inserts the alert above the form and scrolls it into view.
    fn show_alert(&self, alert: &Alert);

    /// Removes the alert if it is still on screen.
    fn remove_alert(&self, id: AlertId);

    /// Clears every input.
    fn reset(&self);
}
