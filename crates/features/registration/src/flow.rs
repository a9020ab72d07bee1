use crate::alert::{AlertBoard, AlertKind};
use crate::error::RegistrationError;
use crate::field::Field;
use crate::gateway::RegistrationGateway;
use crate::phone::format_phone;
use crate::validate::{inline_error, validate};
use crate::view::{FormView, SubmitButton};
use crate::{FAILURE_MESSAGE, PROCESSING_LABEL, SUCCESS_MESSAGE};
use landing_domain::config::RegistrationConfig;
use landing_domain::registration::RegistrationInput;
use futures::FutureExt;
use landing_kernel::clock::{Clock, SystemClock};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Drives the registration form: submit, blur validation and phone formatting.
#[derive(Debug)]
pub struct RegistrationFlow<V, G> {
    view: Arc<V>,
    gateway: G,
    clock: Arc<dyn Clock>,
    config: RegistrationConfig,
    alerts: AlertBoard,
}

impl<V: FormView, G: RegistrationGateway> RegistrationFlow<V, G> {
    #[must_use]
    pub fn new(view: Arc<V>, gateway: G, config: RegistrationConfig) -> Self {
        Self {
            view,
            gateway,
            clock: Arc::new(SystemClock),
            alerts: AlertBoard::new(config.alert_duration()),
            config,
        }
    }

    /// Replaces the clock used to timestamp submissions.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn alerts(&self) -> &AlertBoard {
        &self.alerts
    }

    /// Handles a form submission.
    ///
    /// The submit control is disabled for the whole call and restored on every exit,
    /// including unwinding. Invalid input never reaches the gateway. A gateway that
    /// panics is reported like any other submission failure.
    ///
    /// # Errors
    /// Returns the validation error shown to the visitor, or
    /// [`RegistrationError::Submission`] if the gateway failed.
    pub async fn submit(&self) -> Result<(), RegistrationError> {
        let _busy = SubmitGuard::engage(self.view.as_ref());

        let input = RegistrationInput::new(
            &self.view.values(),
            self.clock.now(),
            self.config.course.as_str(),
            self.config.source.as_str(),
        );

        if let Err(err) = validate(&input) {
            debug!(error = %err, "Registration rejected by validation");
            self.alerts.show(&self.view, AlertKind::Error, err.to_string());
            return Err(err);
        }

        let outcome = AssertUnwindSafe(self.gateway.submit(&input))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err("gateway panicked".into()));

        match outcome {
            Ok(()) => {
                info!(course = %input.course, "Registration accepted");
                self.alerts.show(&self.view, AlertKind::Success, SUCCESS_MESSAGE);
                self.view.reset();
                Ok(())
            },
            Err(source) => {
                error!(error = %source, "Registration submission failed");
                self.alerts.show(&self.view, AlertKind::Error, FAILURE_MESSAGE);
                Err(RegistrationError::Submission { source, context: None })
            },
        }
    }

    /// Re-checks `field` when it loses focus and shows or clears its inline message.
    pub fn on_blur(&self, field: Field) {
        if !matches!(field, Field::Email | Field::Name) {
            return;
        }
        let values = self.view.values();
        let value = match field {
            Field::Email => values.email,
            _ => values.name,
        };
        self.view.set_field_error(field, inline_error(field, &value));
    }

    /// Reformats the phone input after a keystroke.
    pub fn on_phone_input(&self) {
        let raw = self.view.values().phone;
        let formatted = format_phone(&raw);
        if formatted != raw {
            self.view.set_phone(&formatted);
        }
    }
}

/// Holds the submit control in its busy state until dropped.
struct SubmitGuard<'a, V: FormView> {
    view: &'a V,
    original: SubmitButton,
}

impl<'a, V: FormView> SubmitGuard<'a, V> {
    fn engage(view: &'a V) -> Self {
        let original = view.submit_button();
        view.set_submit_button(&SubmitButton { enabled: false, label: PROCESSING_LABEL.to_owned() });
        Self { view, original }
    }
}

impl<V: FormView> Drop for SubmitGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_button(&SubmitButton {
            enabled: true,
            label: self.original.label.clone(),
        });
    }
}
