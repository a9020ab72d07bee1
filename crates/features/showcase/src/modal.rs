//! Modal dialogs and their fade-in/fade-out lifecycle.

use crate::view::PageView;
use landing_domain::course::{ComparisonTable, CourseDescriptor, CourseKey};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

pub const COMING_SOON_BADGE: &str = "Coming Soon";
pub const NOTIFY_ACTION: &str = "Notify Me When Available";
pub const COMPARISON_TITLE: &str = "Course Comparison";
pub const COMPARE_ACTION: &str = "Compare All Parts";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(u64);

/// Body of the dialog shown for a course that has not launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComingSoonModal {
    pub course: CourseKey,
    pub title: &'static str,
    pub badge: &'static str,
    pub expected_launch: &'static str,
    pub duration: &'static str,
    /// `"$119 USD / 18,000 DZD"`
    pub price: String,
    pub features: &'static [&'static str],
}

impl ComingSoonModal {
    #[must_use]
    pub fn for_course(course: &CourseDescriptor) -> Self {
        Self {
            course: course.key,
            title: course.title,
            badge: COMING_SOON_BADGE,
            expected_launch: course.dates,
            duration: course.duration,
            price: course.price.dual_label(),
            features: course.features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    ComingSoon(ComingSoonModal),
    Comparison(ComparisonTable),
}

impl ModalContent {
    #[must_use]
    pub const fn title(&self) -> &str {
        match self {
            Self::ComingSoon(modal) => modal.title,
            Self::Comparison(_) => COMPARISON_TITLE,
        }
    }
}

#[derive(Debug)]
struct Mounted {
    id: ModalId,
    content: ModalContent,
    transition: Option<JoinHandle<()>>,
}

#[derive(Debug, Default)]
struct Slots {
    open: Option<Mounted>,
    closing: Vec<(ModalId, JoinHandle<()>)>,
}

/// Hosts one open modal at a time.
///
/// A modal is mounted hidden and made visible after `open_delay`. Closing hides it
/// at once and unmounts it after `transition`. Opening while another modal is open
/// unmounts the old one immediately.
#[derive(Debug)]
pub struct ModalHost {
    slots: Arc<Mutex<Slots>>,
    next_id: AtomicU64,
    open_delay: Duration,
    transition: Duration,
}

impl ModalHost {
    #[must_use]
    pub fn new(open_delay: Duration, transition: Duration) -> Self {
        Self { slots: Arc::default(), next_id: AtomicU64::new(1), open_delay, transition }
    }

    /// Mounts `content` and schedules its fade-in. Must run inside a tokio runtime.
    pub fn open<V: PageView>(&self, view: &Arc<V>, content: ModalContent) -> ModalId {
        let id = ModalId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut slots = self.slots.lock();

        if let Some(previous) = slots.open.take() {
            if let Some(task) = previous.transition {
                task.abort();
            }
            view.unmount_modal(previous.id);
        }

        view.mount_modal(id, &content);
        debug!(modal = id.0, title = content.title(), "Modal mounted");

        let delay = self.open_delay;
        let task_view = Arc::clone(view);
        let fade_in = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task_view.set_modal_visible(id, true);
        });
        slots.open = Some(Mounted { id, content, transition: Some(fade_in) });

        id
    }

    /// Fades out the open modal and unmounts it after the transition. Returns the id
    /// of the modal being closed, if any.
    pub fn close<V: PageView>(&self, view: &Arc<V>) -> Option<ModalId> {
        let mut slots = self.slots.lock();
        let mounted = slots.open.take()?;
        if let Some(task) = mounted.transition {
            task.abort();
        }

        let id = mounted.id;
        view.set_modal_visible(id, false);

        let transition = self.transition;
        let task_view = Arc::clone(view);
        let unmount = tokio::spawn(async move {
            tokio::time::sleep(transition).await;
            task_view.unmount_modal(id);
        });
        slots.closing.retain(|(_, task)| !task.is_finished());
        slots.closing.push((id, unmount));
        debug!(modal = id.0, "Modal closing");

        Some(id)
    }

    /// Content of the open modal.
    #[must_use]
    pub fn current(&self) -> Option<(ModalId, ModalContent)> {
        self.slots.lock().open.as_ref().map(|mounted| (mounted.id, mounted.content.clone()))
    }

    /// Stops pending transitions without touching the view.
    pub fn abort_all(&self) {
        let mut slots = self.slots.lock();
        if let Some(task) = slots.open.as_mut().and_then(|mounted| mounted.transition.take()) {
            task.abort();
        }
        for (_, task) in slots.closing.drain(..) {
            task.abort();
        }
    }
}
