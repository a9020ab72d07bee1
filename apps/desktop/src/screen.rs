//! Everything the window renders, folded from [`UiUpdate`] messages.

use crate::bridge::{SUBMIT_LABEL, UiUpdate};
use landing::domain::currency::Currency;
use landing::domain::registration::FormValues;
use landing::features::registration::{Alert, Field, SubmitButton};
use landing::features::showcase::countdown::Remaining;
use landing::features::showcase::currency::CurrencyDisplay;
use landing::features::showcase::modal::{ModalContent, ModalId};
use landing::features::showcase::preview::{Preview, PreviewPosition};
use landing::features::showcase::reveal::SectionId;

/// A scroll the window has to perform after applying an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Registration,
    Card(usize),
    Alert,
}

impl Scroll {
    /// Element id of the scroll target.
    #[must_use]
    pub fn target(self) -> String {
        match self {
            Self::Registration => "register".to_owned(),
            Self::Card(number) => format!("course-card-{number}"),
            Self::Alert => "form-alert".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSlot {
    pub id: ModalId,
    pub content: ModalContent,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub values: FormValues,
    pub button: SubmitButton,
    pub field_errors: Vec<(Field, String)>,
    pub alert: Option<Alert>,
    /// The open modal plus any still fading out.
    pub modals: Vec<ModalSlot>,
    pub preview: Option<(Preview, PreviewPosition)>,
    pub currency: CurrencyDisplay,
    pub countdown: Option<Remaining>,
    pub countdown_hidden: bool,
    pub highlighted: Vec<usize>,
    pub ready: Vec<SectionId>,
    pub revealed: Vec<SectionId>,
    pub notice: Option<String>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            values: FormValues::default(),
            button: SubmitButton { enabled: true, label: SUBMIT_LABEL.to_owned() },
            field_errors: Vec::new(),
            alert: None,
            modals: Vec::new(),
            preview: None,
            currency: CurrencyDisplay::for_currency(Currency::default()),
            countdown: None,
            countdown_hidden: false,
            highlighted: Vec::new(),
            ready: Vec::new(),
            revealed: Vec::new(),
            notice: None,
        }
    }
}

impl Screen {
    /// Folds one update into the screen and returns the scroll it requests.
    pub fn apply(&mut self, update: UiUpdate) -> Option<Scroll> {
        match update {
            UiUpdate::Button(button) => self.button = button,
            UiUpdate::Phone(phone) => self.values.phone = phone,
            UiUpdate::FieldError(field, message) => {
                self.field_errors.retain(|(f, _)| *f != field);
                if let Some(message) = message {
                    self.field_errors.push((field, message));
                }
            },
            UiUpdate::ShowAlert(alert) => {
                self.alert = Some(alert);
                return Some(Scroll::Alert);
            },
            UiUpdate::RemoveAlert(id) => {
                if self.alert.as_ref().is_some_and(|alert| alert.id == id) {
                    self.alert = None;
                }
            },
            UiUpdate::ResetForm => {
                self.values = FormValues::default();
                self.field_errors.clear();
            },
            UiUpdate::ScrollToRegistration => return Some(Scroll::Registration),
            UiUpdate::ScrollToCard(number) => return Some(Scroll::Card(number)),
            UiUpdate::Highlight(number, on) => {
                self.highlighted.retain(|n| *n != number);
                if on {
                    self.highlighted.push(number);
                }
            },
            UiUpdate::MountModal(id, content) => {
                self.modals.push(ModalSlot { id, content, visible: false });
            },
            UiUpdate::ModalVisible(id, visible) => {
                if let Some(slot) = self.modals.iter_mut().find(|slot| slot.id == id) {
                    slot.visible = visible;
                }
            },
            UiUpdate::UnmountModal(id) => self.modals.retain(|slot| slot.id != id),
            UiUpdate::ShowPreview(preview, position) => self.preview = Some((preview, position)),
            UiUpdate::HidePreview => self.preview = None,
            UiUpdate::Currency(display) => self.currency = display,
            UiUpdate::Countdown(remaining) => {
                self.countdown = Some(remaining);
                self.countdown_hidden = false;
            },
            UiUpdate::HideCountdown => self.countdown_hidden = true,
            UiUpdate::SectionReady(section) => {
                if !self.ready.contains(&section) {
                    self.ready.push(section);
                }
            },
            UiUpdate::RevealSection(section) => {
                if !self.revealed.contains(&section) {
                    self.revealed.push(section);
                }
            },
            UiUpdate::Notice(message) => self.notice = Some(message),
        }
        None
    }

    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.iter().find(|(f, _)| *f == field).map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub fn is_highlighted(&self, number: usize) -> bool {
        self.highlighted.contains(&number)
    }

    /// CSS classes of a page section.
    #[must_use]
    pub fn section_class(&self, section: SectionId) -> &'static str {
        if self.revealed.contains(&section) {
            "section fade-in visible"
        } else if self.ready.contains(&section) {
            "section fade-in"
        } else {
            "section"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::DesktopPage;
    use landing::domain::course::ComparisonTable;
    use landing::features::showcase::modal::ModalHost;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn field_errors_replace_and_clear() {
        let mut screen = Screen::default();
        screen.apply(UiUpdate::FieldError(Field::Email, Some("bad".into())));
        screen.apply(UiUpdate::FieldError(Field::Email, Some("worse".into())));
        assert_eq!(screen.field_error(Field::Email), Some("worse"));

        screen.apply(UiUpdate::FieldError(Field::Email, None));
        assert_eq!(screen.field_error(Field::Email), None);
    }

    #[tokio::test]
    async fn modal_fades_before_unmount() {
        let (tx, mut rx) = crate::bridge::channel();
        let page = Arc::new(DesktopPage::new(tx));
        let host = ModalHost::new(Duration::from_secs(60), Duration::from_secs(60));
        let id = host.open(&page, ModalContent::Comparison(ComparisonTable::standard()));

        let mut screen = Screen::default();
        screen.apply(rx.try_recv().unwrap());
        assert_eq!(screen.modals.len(), 1);
        assert!(!screen.modals[0].visible);

        screen.apply(UiUpdate::ModalVisible(id, true));
        assert!(screen.modals[0].visible);
        screen.apply(UiUpdate::ModalVisible(id, false));
        assert_eq!(screen.modals.len(), 1);
        screen.apply(UiUpdate::UnmountModal(id));
        assert!(screen.modals.is_empty());
        host.abort_all();
    }

    #[test]
    fn scroll_requests_follow_updates() {
        let mut screen = Screen::default();
        assert_eq!(screen.apply(UiUpdate::ScrollToCard(2)), Some(Scroll::Card(2)));
        assert_eq!(Scroll::Card(2).target(), "course-card-2");
        assert_eq!(screen.apply(UiUpdate::HideCountdown), None);
        assert!(screen.countdown_hidden);
    }

    #[test]
    fn sections_move_from_ready_to_revealed() {
        let mut screen = Screen::default();
        let section = SectionId(1);
        assert_eq!(screen.section_class(section), "section");
        screen.apply(UiUpdate::SectionReady(section));
        assert_eq!(screen.section_class(section), "section fade-in");
        screen.apply(UiUpdate::RevealSection(section));
        assert_eq!(screen.section_class(section), "section fade-in visible");
    }
}
