use crate::screen::Screen;
use crate::services::Services;
use dioxus::prelude::*;
use landing::features::registration::Field;
use tracing::debug;

const COUNTRIES: [&str; 3] = ["Algeria", "France", "Other"];

#[component]
pub(super) fn RegistrationForm(screen: Signal<Screen>) -> Element {
    let services = use_context::<Services>();
    let (button, alert) = {
        let screen = screen.read();
        let alert = screen.alert.as_ref().map(|alert| {
            (format!("alert alert-{}", alert.kind.as_str()), alert.message.clone())
        });
        (screen.button.clone(), alert)
    };
    let on_submit = services.clone();

    rsx! {
        section { id: "register", class: "register",
            h2 { "Register for Part 1" }
            if let Some((class, message)) = alert {
                div { id: "form-alert", class, "{message}" }
            }
            form {
                id: "registrationForm",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    on_submit.with_form(|flow| async move {
                        if let Err(err) = flow.submit().await {
                            debug!(error = %err, "Registration not accepted");
                        }
                    });
                },
                TextInput { field: Field::Name, label: "Full name", kind: "text", screen }
                TextInput { field: Field::Email, label: "Email", kind: "email", screen }
                TextInput { field: Field::Phone, label: "Phone", kind: "tel", screen }
                CountrySelect { screen }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: !button.enabled,
                    "{button.label}"
                }
            }
        }
    }
}

#[component]
fn TextInput(field: Field, label: &'static str, kind: &'static str, mut screen: Signal<Screen>) -> Element {
    let services = use_context::<Services>();
    let value = read_value(&screen.read(), field);
    let error = screen.read().field_error(field).map(str::to_owned);
    let on_input = services.clone();
    let on_blur = services;
    let name = field.as_str();

    rsx! {
        div { class: "form-group",
            label { r#for: "{name}", "{label}" }
            input {
                id: "{name}",
                name: "{name}",
                r#type: kind,
                class: if error.is_some() { "error" } else { "" },
                value: "{value}",
                oninput: move |event: FormEvent| {
                    let value = event.value();
                    write_value(&mut screen.write(), field, value.clone());
                    on_input.form.set_value(field, value);
                    if field == Field::Phone {
                        on_input.with_form(|flow| async move { flow.on_phone_input() });
                    }
                },
                onblur: move |_| on_blur.with_form(move |flow| async move { flow.on_blur(field) }),
            }
            if let Some(error) = error {
                span { class: "error-message", "{error}" }
            }
        }
    }
}

#[component]
fn CountrySelect(mut screen: Signal<Screen>) -> Element {
    let services = use_context::<Services>();
    let selected = screen.read().values.country.clone();

    rsx! {
        div { class: "form-group",
            label { r#for: "country", "Country" }
            select {
                id: "country",
                name: "country",
                value: "{selected}",
                onchange: move |event: FormEvent| {
                    let value = event.value();
                    screen.write().values.country.clone_from(&value);
                    services.form.set_value(Field::Country, value);
                },
                option { value: "", "Select your country" }
                for country in COUNTRIES {
                    option { key: "{country}", value: "{country}", "{country}" }
                }
            }
        }
    }
}

fn read_value(screen: &Screen, field: Field) -> String {
    let values = &screen.values;
    match field {
        Field::Name => values.name.clone(),
        Field::Email => values.email.clone(),
        Field::Phone => values.phone.clone(),
        Field::Country => values.country.clone(),
    }
}

fn write_value(screen: &mut Screen, field: Field, value: String) {
    let values = &mut screen.values;
    match field {
        Field::Name => values.name = value,
        Field::Email => values.email = value,
        Field::Phone => values.phone = value,
        Field::Country => values.country = value,
    }
}
