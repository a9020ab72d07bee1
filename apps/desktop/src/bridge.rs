//! View implementations that turn controller calls into [`UiUpdate`] messages.
//!
//! Controllers run on the tokio runtime while Dioxus owns the window thread, so the
//! two views only record what they are told and forward it over an unbounded channel.
//! The form keeps its own copy of the input values because [`FormView::values`] must
//! answer synchronously.

use landing::domain::registration::FormValues;
use landing::features::registration::{Alert, AlertId, Field, FormView, SubmitButton};
use landing::features::showcase::PageView;
use landing::features::showcase::countdown::Remaining;
use landing::features::showcase::currency::CurrencyDisplay;
use landing::features::showcase::modal::{ModalContent, ModalId};
use landing::features::showcase::preview::{Preview, PreviewPosition};
use landing::features::showcase::reveal::SectionId;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, trace};

pub const SUBMIT_LABEL: &str = "Register Now";

/// One change for the window to render.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    Button(SubmitButton),
    Phone(String),
    FieldError(Field, Option<String>),
    ShowAlert(Alert),
    RemoveAlert(AlertId),
    ResetForm,
    ScrollToRegistration,
    ScrollToCard(usize),
    Highlight(usize, bool),
    MountModal(ModalId, ModalContent),
    ModalVisible(ModalId, bool),
    UnmountModal(ModalId),
    ShowPreview(Preview, PreviewPosition),
    HidePreview,
    Currency(CurrencyDisplay),
    Countdown(Remaining),
    HideCountdown,
    SectionReady(SectionId),
    RevealSection(SectionId),
    Notice(String),
}

pub type UpdateSender = mpsc::UnboundedSender<UiUpdate>;
pub type UpdateReceiver = mpsc::UnboundedReceiver<UiUpdate>;

#[must_use]
pub fn channel() -> (UpdateSender, UpdateReceiver) {
    mpsc::unbounded_channel()
}

fn send(updates: &UpdateSender, update: UiUpdate) {
    if updates.send(update).is_err() {
        trace!("Window closed, update dropped");
    }
}

/// The registration form as seen by the flow.
#[derive(Debug)]
pub struct DesktopForm {
    values: Mutex<FormValues>,
    button: Mutex<SubmitButton>,
    updates: UpdateSender,
}

impl DesktopForm {
    #[must_use]
    pub fn new(updates: UpdateSender) -> Self {
        Self {
            values: Mutex::default(),
            button: Mutex::new(SubmitButton { enabled: true, label: SUBMIT_LABEL.to_owned() }),
            updates,
        }
    }

    /// Records a keystroke in `field`.
    pub fn set_value(&self, field: Field, value: String) {
        let mut values = self.values.lock();
        match field {
            Field::Name => values.name = value,
            Field::Email => values.email = value,
            Field::Phone => values.phone = value,
            Field::Country => values.country = value,
        }
    }
}

impl FormView for DesktopForm {
    fn values(&self) -> FormValues {
        self.values.lock().clone()
    }

    fn submit_button(&self) -> SubmitButton {
        self.button.lock().clone()
    }

    fn set_submit_button(&self, button: &SubmitButton) {
        button.clone_into(&mut self.button.lock());
        send(&self.updates, UiUpdate::Button(button.clone()));
    }

    fn set_phone(&self, formatted: &str) {
        formatted.clone_into(&mut self.values.lock().phone);
        send(&self.updates, UiUpdate::Phone(formatted.to_owned()));
    }

    fn set_field_error(&self, field: Field, message: Option<&str>) {
        send(&self.updates, UiUpdate::FieldError(field, message.map(str::to_owned)));
    }

    fn show_alert(&self, alert: &Alert) {
        send(&self.updates, UiUpdate::ShowAlert(alert.clone()));
    }

    fn remove_alert(&self, id: AlertId) {
        send(&self.updates, UiUpdate::RemoveAlert(id));
    }

    fn reset(&self) {
        *self.values.lock() = FormValues::default();
        send(&self.updates, UiUpdate::ResetForm);
    }
}

/// The rest of the page as seen by the page controller.
///
/// There is no blocking prompt in a desktop window: the coming-soon dialog has its
/// own email input, and [`DesktopPage::answer`] stages what the visitor typed right
/// before the notify action runs.
#[derive(Debug)]
pub struct DesktopPage {
    updates: UpdateSender,
    answer: Mutex<Option<String>>,
}

impl DesktopPage {
    #[must_use]
    pub const fn new(updates: UpdateSender) -> Self {
        Self { updates, answer: Mutex::new(None) }
    }

    /// Stages the email returned by the next prompt. `None` cancels it.
    pub fn answer(&self, email: Option<String>) {
        *self.answer.lock() = email;
    }

    fn send(&self, update: UiUpdate) {
        send(&self.updates, update);
    }
}

impl PageView for DesktopPage {
    fn scroll_to_registration(&self) {
        self.send(UiUpdate::ScrollToRegistration);
    }

    fn scroll_to_card(&self, number: usize) {
        self.send(UiUpdate::ScrollToCard(number));
    }

    fn set_card_highlight(&self, number: usize, highlighted: bool) {
        self.send(UiUpdate::Highlight(number, highlighted));
    }

    fn mount_modal(&self, id: ModalId, content: &ModalContent) {
        self.send(UiUpdate::MountModal(id, content.clone()));
    }

    fn set_modal_visible(&self, id: ModalId, visible: bool) {
        self.send(UiUpdate::ModalVisible(id, visible));
    }

    fn unmount_modal(&self, id: ModalId) {
        self.send(UiUpdate::UnmountModal(id));
    }

    fn show_preview(&self, preview: &Preview, position: PreviewPosition) {
        self.send(UiUpdate::ShowPreview(preview.clone(), position));
    }

    fn hide_preview(&self) {
        self.send(UiUpdate::HidePreview);
    }

    fn apply_currency(&self, display: &CurrencyDisplay) {
        self.send(UiUpdate::Currency(*display));
    }

    fn render_countdown(&self, remaining: &Remaining) {
        self.send(UiUpdate::Countdown(*remaining));
    }

    fn hide_countdown(&self) {
        self.send(UiUpdate::HideCountdown);
    }

    fn mark_section_ready(&self, section: SectionId) {
        self.send(UiUpdate::SectionReady(section));
    }

    fn reveal_section(&self, section: SectionId) {
        self.send(UiUpdate::RevealSection(section));
    }

    fn prompt_email(&self, message: &str) -> Option<String> {
        debug!(prompt = message, "Reading staged email");
        self.answer.lock().take()
    }

    fn notify(&self, message: &str) {
        self.send(UiUpdate::Notice(message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_keeps_values_and_reports_phone() {
        let (tx, mut rx) = channel();
        let form = DesktopForm::new(tx);

        form.set_value(Field::Name, "Jane Doe".into());
        form.set_phone("+213 550 12 34 56");

        let values = form.values();
        assert_eq!(values.name, "Jane Doe");
        assert_eq!(values.phone, "+213 550 12 34 56");
        assert_eq!(rx.try_recv().unwrap(), UiUpdate::Phone("+213 550 12 34 56".into()));

        form.reset();
        assert_eq!(form.values(), FormValues::default());
        assert_eq!(rx.try_recv().unwrap(), UiUpdate::ResetForm);
    }

    #[test]
    fn staged_answer_is_consumed_once() {
        let (tx, _rx) = channel();
        let page = DesktopPage::new(tx);

        page.answer(Some("jane@example.com".into()));
        assert_eq!(page.prompt_email("Enter your email").as_deref(), Some("jane@example.com"));
        assert_eq!(page.prompt_email("Enter your email"), None);
    }

    #[test]
    fn closed_window_does_not_fail_views() {
        let (tx, rx) = channel();
        drop(rx);
        let page = DesktopPage::new(tx);
        page.hide_countdown();
    }
}
