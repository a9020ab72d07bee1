use crate::countdown::Remaining;
use crate::currency::CurrencyDisplay;
use crate::modal::{ModalContent, ModalId};
use crate::preview::{Preview, PreviewPosition};
use crate::reveal::SectionId;

/// What the page controller needs from the rendered page.
///
/// Course cards are addressed by their 1-based position. Implementations are shared
/// with timer tasks, hence `Send + Sync + 'static`.
pub trait PageView: Send + Sync + 'static {
    fn scroll_to_registration(&self);

    fn scroll_to_card(&self, number: usize);

    /// Adds or removes the pulse highlight on a card.
    fn set_card_highlight(&self, number: usize, highlighted: bool);

    /// Inserts a modal in its hidden state.
    fn mount_modal(&self, id: ModalId, content: &ModalContent);

    /// Fades a mounted modal in or out.
    fn set_modal_visible(&self, id: ModalId, visible: bool);

    fn unmount_modal(&self, id: ModalId);

    fn show_preview(&self, preview: &Preview, position: PreviewPosition);

    fn hide_preview(&self);

    /// Updates the toggle switch, its labels and the highlighted price card.
    fn apply_currency(&self, display: &CurrencyDisplay);

    fn render_countdown(&self, remaining: &Remaining);

    fn hide_countdown(&self);

    /// Puts a section in its pre-reveal state.
    fn mark_section_ready(&self, section: SectionId);

    fn reveal_section(&self, section: SectionId);

    /// Asks the visitor for an email address. `None` when the prompt is dismissed.
    fn prompt_email(&self, message: &str) -> Option<String>;

    /// Shows a blocking informational message.
    fn notify(&self, message: &str);
}
