use crate::analytics::Analytics;
use crate::card::{CardAction, ClickTarget, card_action};
use crate::countdown::{CountdownHandle, deadline_label, start_countdown};
use crate::currency::{CurrencyDisplay, detect_currency};
use crate::error::ShowcaseError;
use crate::modal::{ComingSoonModal, ModalContent, ModalHost, ModalId};
use crate::notify::{
    INVALID_EMAIL, NOTIFY_CONFIRMATION, NotificationGateway, NotificationLog, NotifyOutcome,
    notify_prompt,
};
use crate::params::UrlParams;
use crate::preferences::PreferencesStore;
use crate::preview::{Preview, Rect, position_preview};
use crate::reveal::{RevealTracker, SectionId};
use crate::view::PageView;
use fxhash::FxHashMap;
use landing_domain::analytics::AnalyticsEvent;
use landing_domain::config::ShowcaseConfig;
use landing_domain::constants::REFERRAL_KEY;
use landing_domain::course::{ComparisonTable, CourseKey, course, course_by_number};
use landing_domain::currency::{Currency, UserPreferences};
use landing_domain::notification::NotificationRequest;
use landing_events::EventBus;
use landing_kernel::clock::{Clock, SystemClock};
use landing_kernel::validation::is_valid_email;
use landing_storage::Storage;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Shared infrastructure handed to the controller at page load.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Survives restarts: preferences and notification sign-ups.
    pub local: Storage,
    /// Lives for the session: the referral code.
    pub session: Storage,
    pub bus: EventBus,
    pub config: ShowcaseConfig,
    pub clock: Arc<dyn Clock>,
}

impl PageContext {
    #[must_use]
    pub fn new(local: Storage, session: Storage, bus: EventBus, config: ShowcaseConfig) -> Self {
        Self { local, session, bus, config, clock: Arc::new(SystemClock) }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// What the page knows about itself when it loads.
#[derive(Debug, Default, Clone)]
pub struct PageLoad {
    pub params: UrlParams,
    /// The visitor's IANA timezone, if known.
    pub timezone: Option<String>,
    pub sections: Vec<SectionId>,
}

/// Per-visit state that is not persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageState {
    pub referral: Option<String>,
    pub previewing: Option<CourseKey>,
}

/// Owns the page for one visit.
///
/// Built by [`PageController::load`] and torn down by dropping it, which stops the
/// countdown and every pending highlight or modal transition.
#[derive(Debug)]
pub struct PageController<V, N> {
    view: Arc<V>,
    gateway: N,
    context: PageContext,
    preferences: PreferencesStore,
    notifications: NotificationLog,
    analytics: Analytics,
    modals: ModalHost,
    reveal: Mutex<RevealTracker>,
    highlights: Mutex<FxHashMap<usize, JoinHandle<()>>>,
    countdown: CountdownHandle,
    state: RwLock<PageState>,
}

impl<V: PageView, N: NotificationGateway> PageController<V, N> {
    /// Runs the page-load sequence: preferences, location default, section setup,
    /// countdown, currency display, URL parameters and the page view event.
    ///
    /// # Errors
    /// Returns [`ShowcaseError`] if a store cannot be read or written, or if the bus
    /// rejects a channel.
    pub async fn load(
        view: Arc<V>,
        context: PageContext,
        gateway: N,
        page: PageLoad,
    ) -> Result<Self, ShowcaseError> {
        let config = &context.config;
        let preferences = PreferencesStore::open(context.local.clone(), context.bus.clone()).await?;

        let timezone = config.timezone.as_deref().or(page.timezone.as_deref());
        if let Some(currency) = timezone.and_then(detect_currency) {
            debug!(timezone = timezone.unwrap_or_default(), %currency, "Location suggests currency");
            preferences.assume_currency(currency)?;
        }

        let reveal = RevealTracker::new(config.reveal_threshold, config.reveal_bottom_margin_px);
        reveal.prepare(view.as_ref(), &page.sections);

        let countdown = start_countdown(
            Arc::clone(&view),
            Arc::clone(&context.clock),
            config.early_bird_deadline,
            config.countdown_interval(),
        );

        view.apply_currency(&CurrencyDisplay::for_currency(preferences.currency()));

        let modals = ModalHost::new(config.modal_open_delay(), config.modal_transition());
        let controller = Self {
            modals,
            notifications: NotificationLog::new(context.local.clone()),
            analytics: Analytics::new(context.bus.clone()),
            reveal: Mutex::new(reveal),
            highlights: Mutex::default(),
            state: RwLock::default(),
            view,
            gateway,
            context,
            preferences,
            countdown,
        };

        controller.apply_params(&page.params).await?;
        controller.analytics.track(AnalyticsEvent::page_view())?;

        info!("Landing page loaded");
        Ok(controller)
    }

    #[must_use]
    pub fn preferences(&self) -> UserPreferences {
        self.preferences.get()
    }

    #[must_use]
    pub const fn preference_store(&self) -> &PreferencesStore {
        &self.preferences
    }

    #[must_use]
    pub const fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    #[must_use]
    pub const fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    #[must_use]
    pub fn state(&self) -> PageState {
        self.state.read().clone()
    }

    #[must_use]
    pub fn countdown_running(&self) -> bool {
        self.countdown.is_running()
    }

    #[must_use]
    pub fn deadline_label(&self) -> String {
        deadline_label(self.context.config.early_bird_deadline)
    }

    #[must_use]
    pub fn open_modal(&self) -> Option<(ModalId, ModalContent)> {
        self.modals.current()
    }

    /// Handles a click on course card `number`.
    pub fn on_card_click(&self, number: usize, target: ClickTarget) -> CardAction {
        let action = card_action(number, target);
        match action {
            CardAction::ScrollToRegistration => self.view.scroll_to_registration(),
            CardAction::OpenComingSoon(key) => {
                let content = ModalContent::ComingSoon(ComingSoonModal::for_course(course(key)));
                self.modals.open(&self.view, content);
            },
            CardAction::Ignore => {},
        }
        action
    }

    /// Shows the hover preview for an available course.
    pub fn on_card_enter(&self, number: usize, card: Rect, viewport_width: f64) {
        let Some(preview) = course_by_number(number).and_then(Preview::for_course) else {
            return;
        };
        let config = &self.context.config;
        let position =
            position_preview(card, config.preview_width_px, viewport_width, config.preview_offset_px);
        self.view.show_preview(&preview, position);
        self.state.write().previewing = CourseKey::from_number(number);
    }

    pub fn on_card_leave(&self) {
        if self.state.write().previewing.take().is_some() {
            self.view.hide_preview();
        }
    }

    /// Applies the toggle switch: checked selects USD, unchecked DZD.
    ///
    /// # Errors
    /// Returns [`ShowcaseError`] if the preference cannot be saved or published.
    pub async fn on_currency_toggle(&self, checked: bool) -> Result<Currency, ShowcaseError> {
        let currency = Currency::from_toggle(checked);
        self.preferences.set_currency(currency).await?;
        self.view.apply_currency(&CurrencyDisplay::for_currency(self.preferences.currency()));
        Ok(currency)
    }

    /// Opens the side-by-side comparison of the three parts.
    pub fn open_comparison(&self) -> ModalId {
        self.modals.open(&self.view, ModalContent::Comparison(ComparisonTable::standard()))
    }

    pub fn close_modal(&self) -> Option<ModalId> {
        self.modals.close(&self.view)
    }

    /// Clicks on the dimmed backdrop close the modal; clicks inside the dialog do not.
    pub fn on_overlay_click(&self, inside_dialog: bool) -> Option<ModalId> {
        if inside_dialog { None } else { self.close_modal() }
    }

    /// Asks for an email and records a launch notification for `key`.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Storage`] if the sign-up list cannot be updated.
    pub async fn notify_me(&self, key: CourseKey) -> Result<NotifyOutcome, ShowcaseError> {
        let title = course(key).title;
        let Some(email) = self.view.prompt_email(&notify_prompt(title)) else {
            return Ok(NotifyOutcome::Cancelled);
        };
        let email = email.trim();
        if email.is_empty() {
            return Ok(NotifyOutcome::Cancelled);
        }
        if !is_valid_email(email) {
            self.view.notify(INVALID_EMAIL);
            return Ok(NotifyOutcome::Invalid);
        }

        let request = NotificationRequest {
            course_title: title.to_owned(),
            email: email.to_owned(),
            timestamp: self.context.clock.now(),
        };
        self.notifications.append(request.clone()).await?;
        self.gateway.forward(&request).await;

        self.view.notify(NOTIFY_CONFIRMATION);
        self.close_modal();
        Ok(NotifyOutcome::Subscribed(request))
    }

    /// Feeds the visible fraction of a section to the reveal tracker.
    pub fn on_section_visible(&self, section: SectionId, visible: f64) -> bool {
        self.reveal.lock().observe(self.view.as_ref(), section, visible)
    }

    /// Same as [`PageController::on_section_visible`], from the section's bounds.
    pub fn on_section_scrolled(&self, section: SectionId, rect: Rect, viewport_height: f64) -> bool {
        self.reveal.lock().observe_rect(self.view.as_ref(), section, rect, viewport_height)
    }

    /// Scrolls to card `number` and pulses it briefly. Unknown cards are ignored.
    pub fn highlight_course(&self, number: usize) -> bool {
        if course_by_number(number).is_none() {
            debug!(number, "No course card to highlight");
            return false;
        }

        self.view.scroll_to_card(number);
        self.view.set_card_highlight(number, true);

        let view = Arc::clone(&self.view);
        let duration = self.context.config.highlight();
        let task = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            view.set_card_highlight(number, false);
        });
        if let Some(previous) = self.highlights.lock().insert(number, task) {
            previous.abort();
        }
        true
    }

    /// Records an analytics event.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Events`] if the bus rejects the event.
    pub fn track(&self, event: AnalyticsEvent) -> Result<usize, ShowcaseError> {
        self.analytics.track(event)
    }

    async fn apply_params(&self, params: &UrlParams) -> Result<(), ShowcaseError> {
        if let Some(code) = &params.referral {
            self.context.session.set(REFERRAL_KEY, code.as_str()).await?;
            self.state.write().referral = Some(code.clone());
            info!(referral = %code, "Referral tracked");
        }
        if let Some(number) = params.course_number() {
            self.highlight_course(number);
        }
        Ok(())
    }
}

impl<V, N> Drop for PageController<V, N> {
    fn drop(&mut self) {
        for (_, task) in self.highlights.lock().drain() {
            task.abort();
        }
        self.modals.abort_all();
        debug!("Landing page closed");
    }
}
