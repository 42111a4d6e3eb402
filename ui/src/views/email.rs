use dioxus::prelude::*;

use super::forms::{field_error_text, TextField};
use crate::components::controls::BackButton;
use crate::components::{use_flow, use_flow_config, use_toasts};
use crate::core::flow::Screen;
use crate::core::{onboarding, timing};
use crate::core::validation::{EmailForm, Field, FormErrors};
use crate::t;

#[component]
pub fn EmailScreen() -> Element {
    let flow = use_flow();
    let toasts = use_toasts();
    let config = use_flow_config();
    let email = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut loading = use_signal(|| false);

    let mut submit = move || {
        if loading() {
            return;
        }
        let form = EmailForm { email: email() };
        let request = match onboarding::submit_email(&form, &config.timings) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FormErrors::default());
        loading.set(true);
        spawn(async move {
            timing::sleep_ms(request.delay_ms).await;
            loading.set(false);
            toasts.info(t!("email-sent-title"), t!("email-sent-message"));
            flow.navigate(request.target);
        });
    };

    let email_error = errors
        .read()
        .get(Field::Email)
        .map(|err| field_error_text(Field::Email, err));

    rsx! {
        section { class: "page page-email gradient-bg-alt",
            header { class: "page__header",
                BackButton { to: Screen::Signup }
            }
            h1 { class: "page__title", {t!("email-title")} }
            form {
                class: "form",
                "novalidate": "true",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit();
                },
                TextField {
                    id: "email-input",
                    label: t!("email-label"),
                    value: email,
                    kind: "email",
                    placeholder: "example@email.com",
                    disabled: loading(),
                    error: email_error,
                }
            }
            div { class: "page__footer",
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    disabled: loading(),
                    onclick: move |_| submit(),
                    if loading() {
                        {t!("email-validating")}
                    } else {
                        {t!("common-continue")}
                    }
                }
            }
        }
    }
}
