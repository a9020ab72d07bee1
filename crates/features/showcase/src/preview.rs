//! Hover tooltip for available course cards.

use landing_domain::course::CourseDescriptor;

const PREVIEW_FEATURES: usize = 3;
pub const PREVIEW_ACTION: &str = "Click to register →";

/// Viewport-relative box of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Fixed-position coordinates of the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPosition {
    pub top: f64,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: &'static str,
    pub duration: &'static str,
    pub dates: &'static str,
    pub features: Vec<&'static str>,
    pub action: &'static str,
}

impl Preview {
    /// The tooltip for `course`, or `None` when it is not open for registration.
    #[must_use]
    pub fn for_course(course: &CourseDescriptor) -> Option<Self> {
        course.is_available().then(|| Self {
            title: course.title,
            duration: course.duration,
            dates: course.dates,
            features: course.features.iter().take(PREVIEW_FEATURES).copied().collect(),
            action: PREVIEW_ACTION,
        })
    }
}

/// Places the tooltip `offset` pixels right of the card, aligned with its top edge.
/// If that would cross the right edge of the viewport it goes `offset` pixels left of
/// the card instead.
#[must_use]
pub fn position_preview(card: Rect, preview_width: f64, viewport_width: f64, offset: f64) -> PreviewPosition {
    let right_side = card.right() + offset;
    let left = if right_side + preview_width > viewport_width {
        card.left - preview_width - offset
    } else {
        right_side
    };
    PreviewPosition { top: card.top, left }
}
