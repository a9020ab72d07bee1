use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use landing_domain::analytics::AnalyticsEvent;
use landing_domain::config::ShowcaseConfig;
use landing_domain::constants::{NOTIFICATIONS_KEY, PAGE_VIEW, PREFERENCES_KEY, REFERRAL_KEY};
use landing_domain::course::CourseKey;
use landing_domain::currency::{Currency, UserPreferences};
use landing_events::EventBus;
use landing_kernel::clock::ManualClock;
use landing_showcase::card::{CardAction, ClickTarget};
use landing_showcase::countdown::Remaining;
use landing_showcase::currency::CurrencyDisplay;
use landing_showcase::modal::{ModalContent, ModalId};
use landing_showcase::notify::{
    INVALID_EMAIL, LoggingNotificationGateway, NOTIFY_CONFIRMATION, NotifyOutcome,
};
use landing_showcase::params::UrlParams;
use landing_showcase::preview::{Preview, PreviewPosition, Rect};
use landing_showcase::reveal::SectionId;
use landing_showcase::{PageContext, PageController, PageLoad, PageView};
use landing_storage::Storage;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    ScrollToRegistration,
    ScrollToCard(usize),
    Highlight(usize, bool),
    Mount(ModalId, String),
    Visible(ModalId, bool),
    Unmount(ModalId),
    ShowPreview(&'static str, PreviewPosition),
    HidePreview,
    Currency(CurrencyDisplay),
    Countdown(Remaining),
    HideCountdown,
    Ready(SectionId),
    Reveal(SectionId),
    Notify(String),
}

#[derive(Debug, Default)]
struct RecordingView {
    events: Mutex<Vec<Event>>,
    answers: Mutex<Vec<Option<String>>>,
}

impl RecordingView {
    fn answering(answers: &[Option<&str>]) -> Arc<Self> {
        let view = Self::default();
        *view.answers.lock().unwrap() =
            answers.iter().rev().map(|a| a.map(str::to_owned)).collect();
        Arc::new(view)
    }

    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl PageView for RecordingView {
    fn scroll_to_registration(&self) {
        self.push(Event::ScrollToRegistration);
    }

    fn scroll_to_card(&self, number: usize) {
        self.push(Event::ScrollToCard(number));
    }

    fn set_card_highlight(&self, number: usize, highlighted: bool) {
        self.push(Event::Highlight(number, highlighted));
    }

    fn mount_modal(&self, id: ModalId, content: &ModalContent) {
        self.push(Event::Mount(id, content.title().to_owned()));
    }

    fn set_modal_visible(&self, id: ModalId, visible: bool) {
        self.push(Event::Visible(id, visible));
    }

    fn unmount_modal(&self, id: ModalId) {
        self.push(Event::Unmount(id));
    }

    fn show_preview(&self, preview: &Preview, position: PreviewPosition) {
        self.push(Event::ShowPreview(preview.title, position));
    }

    fn hide_preview(&self) {
        self.push(Event::HidePreview);
    }

    fn apply_currency(&self, display: &CurrencyDisplay) {
        self.push(Event::Currency(*display));
    }

    fn render_countdown(&self, remaining: &Remaining) {
        self.push(Event::Countdown(*remaining));
    }

    fn hide_countdown(&self) {
        self.push(Event::HideCountdown);
    }

    fn mark_section_ready(&self, section: SectionId) {
        self.push(Event::Ready(section));
    }

    fn reveal_section(&self, section: SectionId) {
        self.push(Event::Reveal(section));
    }

    fn prompt_email(&self, _message: &str) -> Option<String> {
        self.answers.lock().unwrap().pop().flatten()
    }

    fn notify(&self, message: &str) {
        self.push(Event::Notify(message.to_owned()));
    }
}

struct Page {
    _dir: TempDir,
    local: Storage,
    session: Storage,
    bus: EventBus,
    clock: ManualClock,
}

fn before_deadline() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 28, 23, 59, 59).unwrap()
}

async fn page() -> Page {
    let dir = tempfile::tempdir().unwrap();
    let local = Storage::builder().root(dir.path().join("local")).connect().await.unwrap();
    Page {
        _dir: dir,
        local,
        session: Storage::memory(),
        bus: EventBus::new(),
        clock: ManualClock::new(before_deadline()),
    }
}

impl Page {
    fn context(&self, config: ShowcaseConfig) -> PageContext {
        PageContext::new(self.local.clone(), self.session.clone(), self.bus.clone(), config)
            .with_clock(Arc::new(self.clock.clone()))
    }

    async fn load(
        &self,
        view: &Arc<RecordingView>,
        page: PageLoad,
    ) -> PageController<RecordingView, LoggingNotificationGateway> {
        PageController::load(
            Arc::clone(view),
            self.context(ShowcaseConfig::default()),
            LoggingNotificationGateway,
            page,
        )
        .await
        .unwrap()
    }
}

#[tokio::test(start_paused = true)]
async fn load_shows_defaults_and_tracks_page_view() {
    let page = page().await;
    let mut analytics = page.bus.subscribe::<AnalyticsEvent>().unwrap();
    let view = RecordingView::answering(&[]);

    let controller = page
        .load(&view, PageLoad { sections: vec![SectionId(0), SectionId(1)], ..PageLoad::default() })
        .await;

    let events = view.events();
    assert!(events.contains(&Event::Ready(SectionId(0))));
    assert!(events.contains(&Event::Ready(SectionId(1))));
    assert!(events.contains(&Event::Countdown(Remaining { days: 3, hours: 0, minutes: 0 })));
    assert!(events.contains(&Event::Currency(CurrencyDisplay::for_currency(Currency::Usd))));
    assert!(controller.countdown_running());
    assert_eq!(controller.deadline_label(), "Offer ends December 31, 2024");

    let event = analytics.try_next().expect("page view tracked");
    assert_eq!(event.name, PAGE_VIEW);
    assert_eq!(controller.preferences(), UserPreferences::default());
}

#[tokio::test(start_paused = true)]
async fn algerian_timezone_selects_dinar_without_saving() {
    let page = page().await;
    let view = RecordingView::answering(&[]);

    let controller = page
        .load(
            &view,
            PageLoad { timezone: Some("Africa/Algiers".into()), ..PageLoad::default() },
        )
        .await;

    assert_eq!(controller.preferences().currency, Currency::Dzd);
    assert!(view.events().contains(&Event::Currency(CurrencyDisplay::for_currency(Currency::Dzd))));
    assert!(page.local.get(PREFERENCES_KEY).await.unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn configured_timezone_overrides_detected_one() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let config = ShowcaseConfig { timezone: Some("Europe/Paris".into()), ..ShowcaseConfig::default() };

    let controller = PageController::load(
        Arc::clone(&view),
        page.context(config),
        LoggingNotificationGateway,
        PageLoad { timezone: Some("Africa/Algiers".into()), ..PageLoad::default() },
    )
    .await
    .unwrap();

    assert_eq!(controller.preferences().currency, Currency::Usd);
}

#[tokio::test(start_paused = true)]
async fn currency_toggle_persists_a_single_value() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let controller = page.load(&view, PageLoad::default()).await;

    assert_eq!(controller.on_currency_toggle(false).await.unwrap(), Currency::Dzd);
    assert_eq!(controller.on_currency_toggle(false).await.unwrap(), Currency::Dzd);

    let stored: UserPreferences = page.local.load_json(PREFERENCES_KEY).await.unwrap().unwrap();
    assert_eq!(stored.currency, Currency::Dzd);
    assert_eq!(page.local.keys().await.unwrap().len(), 1);

    let display = CurrencyDisplay::for_currency(Currency::Dzd);
    assert_eq!(view.events().last(), Some(&Event::Currency(display)));

    controller.on_currency_toggle(true).await.unwrap();
    drop(controller);

    let view = RecordingView::answering(&[]);
    let reloaded = page.load(&view, PageLoad::default()).await;
    assert_eq!(reloaded.preferences().currency, Currency::Usd);
}

#[tokio::test(start_paused = true)]
async fn failed_save_keeps_previous_currency() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let controller = page.load(&view, PageLoad::default()).await;
    let watch = controller.preference_store().watch().unwrap();
    view.clear();

    std::fs::remove_dir_all(page.local.root().unwrap()).unwrap();

    assert!(controller.on_currency_toggle(false).await.is_err());
    assert_eq!(controller.preferences().currency, Currency::Usd);
    assert_eq!(watch.current().currency, Currency::Usd);
    assert!(!view.events().iter().any(|e| matches!(e, Event::Currency(_))));
}

#[tokio::test(start_paused = true)]
async fn malformed_preferences_fall_back_to_defaults() {
    let page = page().await;
    page.local.set(PREFERENCES_KEY, "{not json").await.unwrap();
    let view = RecordingView::answering(&[]);

    let controller = page.load(&view, PageLoad::default()).await;

    assert_eq!(controller.preferences(), UserPreferences::default());
}

#[tokio::test(start_paused = true)]
async fn countdown_hides_once_deadline_passes() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let controller = page.load(&view, PageLoad::default()).await;
    view.clear();

    page.clock.advance(TimeDelta::minutes(1));
    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(
        view.events(),
        vec![Event::Countdown(Remaining { days: 2, hours: 23, minutes: 59 })]
    );

    page.clock.advance(TimeDelta::days(4));
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(view.events().last(), Some(&Event::HideCountdown));
    assert!(!controller.countdown_running());
}

#[tokio::test(start_paused = true)]
async fn expired_deadline_hides_countdown_immediately() {
    let page = page().await;
    page.clock.set(Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap());
    let view = RecordingView::answering(&[]);

    let controller = page.load(&view, PageLoad::default()).await;

    assert!(view.events().contains(&Event::HideCountdown));
    assert!(!view.events().iter().any(|e| matches!(e, Event::Countdown(_))));
    assert!(!controller.countdown_running());
}

#[tokio::test(start_paused = true)]
async fn coming_soon_modal_fades_in_and_out() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let controller = page.load(&view, PageLoad::default()).await;
    view.clear();

    let action = controller.on_card_click(2, ClickTarget::Card);
    assert_eq!(action, CardAction::OpenComingSoon(CourseKey::Part2));
    let (id, content) = controller.open_modal().expect("modal mounted");
    assert!(matches!(content, ModalContent::ComingSoon(_)));
    assert!(!view.events().contains(&Event::Visible(id, true)));

    tokio::time::sleep(Duration::from_millis(11)).await;
    assert!(view.events().contains(&Event::Visible(id, true)));

    assert_eq!(controller.on_overlay_click(true), None);
    assert_eq!(controller.on_overlay_click(false), Some(id));
    assert!(controller.open_modal().is_none());
    assert_eq!(view.events().last(), Some(&Event::Visible(id, false)));

    tokio::time::sleep(Duration::from_millis(299)).await;
    assert!(!view.events().contains(&Event::Unmount(id)));
    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(view.events().last(), Some(&Event::Unmount(id)));
}

#[tokio::test(start_paused = true)]
async fn first_card_scrolls_to_registration() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let controller = page.load(&view, PageLoad::default()).await;
    view.clear();

    assert_eq!(controller.on_card_click(1, ClickTarget::Card), CardAction::ScrollToRegistration);
    assert_eq!(controller.on_card_click(1, ClickTarget::Link), CardAction::Ignore);
    assert_eq!(view.events(), vec![Event::ScrollToRegistration]);
}

#[tokio::test(start_paused = true)]
async fn comparison_replaces_open_modal() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let controller = page.load(&view, PageLoad::default()).await;

    controller.on_card_click(3, ClickTarget::Card);
    let (first, _) = controller.open_modal().unwrap();
    let second = controller.open_comparison();

    let events = view.events();
    let unmounted = events.iter().position(|e| *e == Event::Unmount(first)).unwrap();
    let mounted = events
        .iter()
        .position(|e| *e == Event::Mount(second, "Course Comparison".into()))
        .unwrap();
    assert!(unmounted < mounted);
}

#[tokio::test(start_paused = true)]
async fn url_params_store_referral_and_highlight_course() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let controller = page
        .load(
            &view,
            PageLoad { params: UrlParams::from_query("?ref=spring&course=2"), ..PageLoad::default() },
        )
        .await;

    assert_eq!(page.session.get(REFERRAL_KEY).await.unwrap().as_deref(), Some("spring"));
    assert!(page.local.get(REFERRAL_KEY).await.unwrap().is_none());
    assert_eq!(controller.state().referral.as_deref(), Some("spring"));

    let events = view.events();
    assert!(events.contains(&Event::ScrollToCard(2)));
    assert!(events.contains(&Event::Highlight(2, true)));
    assert!(!events.contains(&Event::Highlight(2, false)));

    tokio::time::sleep(Duration::from_millis(2001)).await;
    assert!(view.events().contains(&Event::Highlight(2, false)));
}

#[tokio::test(start_paused = true)]
async fn unknown_course_param_is_ignored() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let _controller = page
        .load(&view, PageLoad { params: UrlParams::from_query("course=7"), ..PageLoad::default() })
        .await;

    assert!(!view.events().iter().any(|e| matches!(e, Event::ScrollToCard(_) | Event::Highlight(..))));
}

#[tokio::test(start_paused = true)]
async fn notify_me_handles_each_answer() {
    let page = page().await;
    let view = RecordingView::answering(&[None, Some("   "), Some("not-an-email"), Some(" ada@example.com ")]);
    let controller = page.load(&view, PageLoad::default()).await;
    controller.on_card_click(2, ClickTarget::Card);

    assert_eq!(controller.notify_me(CourseKey::Part2).await.unwrap(), NotifyOutcome::Cancelled);
    assert_eq!(controller.notify_me(CourseKey::Part2).await.unwrap(), NotifyOutcome::Cancelled);
    assert_eq!(controller.notify_me(CourseKey::Part2).await.unwrap(), NotifyOutcome::Invalid);
    assert!(view.events().contains(&Event::Notify(INVALID_EMAIL.into())));
    assert!(controller.open_modal().is_some());

    let NotifyOutcome::Subscribed(request) = controller.notify_me(CourseKey::Part2).await.unwrap()
    else {
        panic!("expected a subscription");
    };
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.timestamp, before_deadline());
    assert!(view.events().contains(&Event::Notify(NOTIFY_CONFIRMATION.into())));
    assert!(controller.open_modal().is_none());

    assert_eq!(controller.notifications().list().await.unwrap(), vec![request]);
    assert!(page.local.get(NOTIFICATIONS_KEY).await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn preview_only_for_available_courses() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let controller = page.load(&view, PageLoad::default()).await;
    view.clear();

    let card = Rect { top: 100.0, left: 900.0, width: 300.0, height: 400.0 };
    controller.on_card_enter(2, card, 1280.0);
    controller.on_card_leave();
    assert!(view.events().is_empty());

    controller.on_card_enter(1, card, 1280.0);
    assert_eq!(controller.state().previewing, Some(CourseKey::Part1));
    controller.on_card_leave();

    let events = view.events();
    assert!(matches!(events.first(), Some(Event::ShowPreview(_, position)) if (position.top - 100.0).abs() < f64::EPSILON));
    assert_eq!(events.last(), Some(&Event::HidePreview));
    assert_eq!(controller.state().previewing, None);
}

#[tokio::test(start_paused = true)]
async fn sections_reveal_once() {
    let page = page().await;
    let view = RecordingView::answering(&[]);
    let controller = page.load(&view, PageLoad::default()).await;
    view.clear();

    assert!(!controller.on_section_visible(SectionId(3), 0.05));
    assert!(controller.on_section_visible(SectionId(3), 0.2));
    assert!(!controller.on_section_visible(SectionId(3), 0.9));

    let on_screen = Rect { top: 100.0, left: 0.0, width: 800.0, height: 400.0 };
    assert!(controller.on_section_scrolled(SectionId(4), on_screen, 900.0));

    assert_eq!(view.events(), vec![Event::Reveal(SectionId(3)), Event::Reveal(SectionId(4))]);
}
