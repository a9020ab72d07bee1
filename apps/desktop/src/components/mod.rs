//! The Dioxus tree.
//!
//! Components never mutate page state themselves: they forward events to the
//! controllers through [`Services`] and render the [`Screen`] those controllers
//! produce.

mod form;
mod page;

use crate::screen::{Screen, Scroll};
use crate::services::Services;
use dioxus::prelude::*;
use landing::features::showcase::preview::Rect;
use landing::features::showcase::reveal::SectionId;
use std::rc::Rc;
use tracing::debug;

pub const HERO: SectionId = SectionId(0);
pub const COURSES: SectionId = SectionId(1);
pub const PRICING: SectionId = SectionId(2);
pub const REGISTER: SectionId = SectionId(3);
/// Top-level sections in document order.
pub const SECTIONS: [SectionId; 4] = [HERO, COURSES, PRICING, REGISTER];

/// Width and height of the scrolling page area, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 860.0 }
    }
}

/// Mounted section elements, measured on every scroll.
#[derive(Clone, Default)]
struct Sections(Vec<(SectionId, Rc<MountedData>)>);

#[component]
pub fn App() -> Element {
    let services = use_context::<Services>();
    let mut screen = use_signal(Screen::default);
    let mut viewport = use_signal(Viewport::default);
    let mut root = use_signal(|| None::<Rc<MountedData>>);
    let mut sections = use_signal(Sections::default);

    let updates = services.clone();
    use_future(move || {
        let services = updates.clone();
        async move {
            let Some(mut updates) = services.take_updates() else {
                return;
            };
            while let Some(update) = updates.recv().await {
                let scroll = screen.write().apply(update);
                if let Some(scroll) = scroll {
                    scroll_into_view(scroll);
                }
            }
            debug!("Update stream closed");
        }
    });

    let measure = move |services: Services| {
        spawn(async move {
            let Some(frame) = root() else {
                return;
            };
            let Ok(bounds) = frame.get_client_rect().await else {
                return;
            };
            let size = Viewport { width: bounds.size.width, height: bounds.size.height };
            viewport.set(size);

            let elements = sections.read().0.clone();
            for (section, element) in elements {
                if screen.read().revealed.contains(&section) {
                    continue;
                }
                let Ok(rect) = element.get_client_rect().await else {
                    continue;
                };
                let rect = Rect {
                    top: rect.origin.y - bounds.origin.y,
                    left: rect.origin.x - bounds.origin.x,
                    width: rect.size.width,
                    height: rect.size.height,
                };
                services.with_page(move |page| async move {
                    page.on_section_scrolled(section, rect, size.height);
                });
            }
        });
    };

    let on_scroll = services.clone();
    let on_mount = services.clone();

    rsx! {
        div {
            class: "page",
            onmounted: move |event: MountedEvent| {
                root.set(Some(event.data()));
                measure(on_mount.clone());
            },
            onscroll: move |_| measure(on_scroll.clone()),

            for section in SECTIONS {
                div {
                    key: "{section.0}",
                    class: screen.read().section_class(section),
                    onmounted: move |event: MountedEvent| sections.write().0.push((section, event.data())),
                    {
                        match section {
                            HERO => rsx! { page::Hero { screen } },
                            COURSES => rsx! { page::Courses { screen, viewport } },
                            PRICING => rsx! { page::Pricing { screen } },
                            _ => rsx! { form::RegistrationForm { screen } },
                        }
                    }
                }
            }

            page::PreviewTooltip { screen }
            page::Modals { screen }
            page::Notice { screen }
        }
    }
}

fn scroll_into_view(scroll: Scroll) {
    let block = match scroll {
        Scroll::Card(_) => "center",
        Scroll::Registration | Scroll::Alert => "start",
    };
    let script = format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth', block: '{block}' }});",
        scroll.target()
    );
    drop(document::eval(&script));
}
