use crate::components::Viewport;
use crate::screen::{ModalSlot, Screen};
use crate::services::Services;
use dioxus::prelude::*;
use landing::domain::course::{CATALOG, CourseDescriptor, CourseKey, ComparisonTable, course};
use landing::features::showcase::card::ClickTarget;
use landing::features::showcase::currency::ToggleLabel;
use landing::features::showcase::modal::{
    COMPARE_ACTION, COMPARISON_TITLE, ComingSoonModal, ModalContent, NOTIFY_ACTION,
};
use landing::features::showcase::preview::Rect;
use std::rc::Rc;
use tracing::error;

#[component]
pub(super) fn Hero(screen: Signal<Screen>) -> Element {
    let services = use_context::<Services>();
    let first = course(CourseKey::Part1);
    let deadline = services.deadline_label();
    let countdown = {
        let screen = screen.read();
        screen.countdown.filter(|_| !screen.countdown_hidden)
    };

    rsx! {
        header { class: "hero",
            h1 { "{first.title}" }
            p { class: "hero-meta", "{first.duration} · {first.dates} · {first.level}" }
            if let Some(remaining) = countdown {
                div { class: "early-bird",
                    span { class: "early-bird-label", "Early bird pricing ends in" }
                    div { class: "countdown",
                        for (value, unit) in remaining.padded().into_iter().zip(["Days", "Hours", "Minutes"]) {
                            div { key: "{unit}", class: "countdown-cell",
                                span { class: "countdown-value", "{value}" }
                                span { class: "countdown-unit", "{unit}" }
                            }
                        }
                    }
                    span { class: "early-bird-deadline", "{deadline}" }
                }
            }
            div { class: "hero-actions",
                a { class: "btn btn-primary", href: "#register", "Register Now" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| services.with_page(|page| async move {
                        page.open_comparison();
                    }),
                    "{COMPARE_ACTION}"
                }
            }
        }
    }
}

#[component]
pub(super) fn Courses(screen: Signal<Screen>, viewport: Signal<Viewport>) -> Element {
    rsx! {
        section { class: "courses",
            h2 { "The Series" }
            div { class: "course-grid",
                for number in CATALOG.iter().map(|descriptor| descriptor.key.number()) {
                    CourseCard { key: "{number}", number, screen, viewport }
                }
            }
        }
    }
}

#[component]
fn CourseCard(number: usize, screen: Signal<Screen>, viewport: Signal<Viewport>) -> Element {
    let services = use_context::<Services>();
    let mut element = use_signal(|| None::<Rc<MountedData>>);
    let Some(descriptor) = CourseKey::from_number(number).map(course) else {
        return rsx! {};
    };
    let highlighted = screen.read().is_highlighted(number);
    let class = card_class(descriptor, highlighted);
    let status = descriptor.status.label();
    let price = descriptor.price.dual_label();

    let on_click = services.clone();
    let on_link = services.clone();
    let on_enter = services.clone();
    let on_leave = services;

    rsx! {
        div {
            id: "course-card-{number}",
            class: "{class}",
            onmounted: move |event: MountedEvent| element.set(Some(event.data())),
            onclick: move |_| on_click.with_page(move |page| async move {
                page.on_card_click(number, ClickTarget::Card);
            }),
            onmouseenter: move |_| {
                let services = on_enter.clone();
                spawn(async move {
                    let Some(card) = element() else {
                        return;
                    };
                    let Ok(bounds) = card.get_client_rect().await else {
                        return;
                    };
                    let rect = Rect {
                        top: bounds.origin.y,
                        left: bounds.origin.x,
                        width: bounds.size.width,
                        height: bounds.size.height,
                    };
                    let width = viewport().width;
                    services.with_page(move |page| async move {
                        page.on_card_enter(number, rect, width);
                    });
                });
            },
            onmouseleave: move |_| on_leave.with_page(|page| async move { page.on_card_leave() }),

            span { class: "course-status", "{status}" }
            h3 { "{descriptor.title}" }
            p { class: "course-meta", "{descriptor.duration} · {descriptor.dates}" }
            p { class: "course-price", "{price}" }
            ul {
                for feature in descriptor.features.iter() {
                    li { key: "{feature}", "{feature}" }
                }
            }
            if descriptor.is_available() {
                a {
                    class: "course-link",
                    href: "#register",
                    onclick: move |event: MouseEvent| {
                        event.stop_propagation();
                        on_link.with_page(move |page| async move {
                            page.on_card_click(number, ClickTarget::Link);
                        });
                    },
                    "Register for Part {number}"
                }
            }
        }
    }
}

fn card_class(descriptor: &CourseDescriptor, highlighted: bool) -> String {
    let mut class = String::from("course-card");
    if !descriptor.is_available() {
        class.push_str(" coming-soon");
    }
    if highlighted {
        class.push_str(" highlight");
    }
    class
}

#[component]
pub(super) fn Pricing(screen: Signal<Screen>) -> Element {
    let services = use_context::<Services>();
    let display = screen.read().currency;
    let price = course(CourseKey::Part1).price;
    let cards = [("Algeria", price.algeria_label()), ("International", price.international_label())];
    let amount = display.amount_label(price);
    let label_class = |label: ToggleLabel| {
        if display.active_label == label { "currency-label active" } else { "currency-label" }
    };

    rsx! {
        section { class: "pricing",
            h2 { "Pricing" }
            div { class: "currency-toggle",
                span { class: label_class(ToggleLabel::Dzd), "DZD" }
                label { class: "switch",
                    input {
                        r#type: "checkbox",
                        checked: display.toggle_checked,
                        onchange: move |event: FormEvent| {
                            let checked = event.checked();
                            services.with_page(move |page| async move {
                                if let Err(err) = page.on_currency_toggle(checked).await {
                                    error!(error = %err, "Currency preference not saved");
                                }
                            });
                        },
                    }
                    span { class: "slider" }
                }
                span { class: label_class(ToggleLabel::Usd), "USD" }
            }
            p { class: "price-total", "Total due: {amount}" }
            div { class: "pricing-grid",
                for (index, (region, label)) in cards.into_iter().enumerate() {
                    div {
                        key: "{region}",
                        class: if index == display.highlighted_card { "pricing-card highlighted" } else { "pricing-card" },
                        h3 { "{region}" }
                        p { class: "price", "{label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn PreviewTooltip(screen: Signal<Screen>) -> Element {
    let Some((preview, position)) = screen.read().preview.clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "course-preview",
            style: "top: {position.top}px; left: {position.left}px;",
            h4 { "{preview.title}" }
            p { "{preview.duration} · {preview.dates}" }
            ul {
                for feature in preview.features.iter() {
                    li { key: "{feature}", "{feature}" }
                }
            }
            span { class: "preview-action", "{preview.action}" }
        }
    }
}

#[component]
pub(super) fn Modals(screen: Signal<Screen>) -> Element {
    let modals = screen.read().modals.clone();
    rsx! {
        for slot in modals {
            ModalFrame { key: "{slot.id:?}", slot }
        }
    }
}

#[component]
fn ModalFrame(slot: ModalSlot) -> Element {
    let services = use_context::<Services>();
    let on_overlay = services.clone();
    let on_close = services.clone();
    let class = if slot.visible { "modal-overlay show" } else { "modal-overlay" };

    rsx! {
        div {
            class,
            onclick: move |_| on_overlay.with_page(|page| async move {
                page.on_overlay_click(false);
            }),
            div {
                class: "modal",
                onclick: move |event: MouseEvent| event.stop_propagation(),
                button {
                    class: "modal-close",
                    onclick: move |_| on_close.with_page(|page| async move {
                        page.close_modal();
                    }),
                    "×"
                }
                {
                    match slot.content {
                        ModalContent::ComingSoon(modal) => rsx! { ComingSoonBody { modal } },
                        ModalContent::Comparison(table) => rsx! { ComparisonBody { table } },
                    }
                }
            }
        }
    }
}

#[component]
fn ComingSoonBody(modal: ComingSoonModal) -> Element {
    let services = use_context::<Services>();
    let mut email = use_signal(String::new);
    let key = modal.course;

    rsx! {
        span { class: "badge", "{modal.badge}" }
        h2 { "{modal.title}" }
        p { "Expected launch: {modal.expected_launch}" }
        p { "Duration: {modal.duration}" }
        p { "Price: {modal.price}" }
        ul {
            for feature in modal.features.iter() {
                li { key: "{feature}", "{feature}" }
            }
        }
        input {
            r#type: "email",
            placeholder: "you@example.com",
            value: "{email}",
            oninput: move |event: FormEvent| email.set(event.value()),
        }
        button {
            class: "btn btn-primary",
            onclick: move |_| {
                let typed = email();
                services.page_view.answer(Some(typed));
                services.with_page(move |page| async move {
                    if let Err(err) = page.notify_me(key).await {
                        error!(error = %err, "Notification request not saved");
                    }
                });
            },
            "{NOTIFY_ACTION}"
        }
    }
}

#[component]
fn ComparisonBody(table: ComparisonTable) -> Element {
    rsx! {
        h2 { "{COMPARISON_TITLE}" }
        table { class: "comparison",
            thead {
                tr {
                    for heading in table.header {
                        th { key: "{heading}", "{heading}" }
                    }
                }
            }
            tbody {
                for row in table.rows {
                    tr { key: "{row.feature}",
                        td { "{row.feature}" }
                        for (index, cell) in row.cells.into_iter().enumerate() {
                            td { key: "{index}", "{cell}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn Notice(mut screen: Signal<Screen>) -> Element {
    let Some(message) = screen.read().notice.clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "notice",
            onclick: move |_| screen.write().notice = None,
            "{message}"
        }
    }
}
