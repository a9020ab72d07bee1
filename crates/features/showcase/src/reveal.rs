//! One-shot scroll reveal of page sections.

use crate::preview::Rect;
use crate::view::PageView;
use fxhash::FxHashSet;

/// A top-level page section, numbered in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub u32);

/// Remembers which sections have been revealed.
#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    bottom_margin: f64,
    revealed: FxHashSet<SectionId>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self { threshold, bottom_margin, revealed: FxHashSet::default() }
    }

    /// Marks every section as ready to be revealed.
    pub fn prepare<V: PageView>(&self, view: &V, sections: &[SectionId]) {
        for &section in sections {
            view.mark_section_ready(section);
        }
    }

    /// Feeds the visible fraction of `section`. Reveals it the first time the fraction
    /// reaches the threshold; returns whether this call revealed it.
    pub fn observe<V: PageView>(&mut self, view: &V, section: SectionId, visible: f64) -> bool {
        if visible < self.threshold || visible <= 0.0 || self.revealed.contains(&section) {
            return false;
        }
        self.revealed.insert(section);
        view.reveal_section(section);
        true
    }

    /// Same as [`RevealTracker::observe`] with the fraction computed from geometry.
    pub fn observe_rect<V: PageView>(
        &mut self,
        view: &V,
        section: SectionId,
        rect: Rect,
        viewport_height: f64,
    ) -> bool {
        let visible = visible_fraction(rect, viewport_height, self.bottom_margin);
        self.observe(view, section, visible)
    }

    #[must_use]
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.contains(&section)
    }
}

/// Share of `rect` inside the viewport, whose bottom edge is pulled up by `bottom_margin`.
#[must_use]
pub fn visible_fraction(rect: Rect, viewport_height: f64, bottom_margin: f64) -> f64 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    let visible_bottom = rect.bottom().min(viewport_height - bottom_margin);
    let visible_top = rect.top.max(0.0);
    ((visible_bottom - visible_top).max(0.0) / rect.height).min(1.0)
}
