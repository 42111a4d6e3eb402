use dioxus::prelude::*;
use tracing::info;

use super::forms::{field_error_text, TextField};
use crate::components::controls::SkipButton;
use crate::components::{use_flow, use_flow_config, use_toasts};
use crate::core::flow::Screen;
use crate::core::{onboarding, timing};
use crate::core::validation::{Field, FormErrors, ProfileForm};
use crate::t;

#[component]
pub fn ProfileSetupScreen() -> Element {
    let flow = use_flow();
    let toasts = use_toasts();
    let config = use_flow_config();
    let full_name = use_signal(String::new);
    let username = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut loading = use_signal(|| false);

    let mut submit = move || {
        if loading() {
            return;
        }
        let form = ProfileForm {
            full_name: full_name(),
            username: username(),
            password: password(),
            confirm_password: confirm_password(),
        };
        let request = match onboarding::submit_profile(&form, &config.timings) {
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
            toasts.info(t!("profile-created-title"), t!("profile-created-message"));
            flow.navigate(request.target);
        });
    };

    let error_for = move |field: Field| {
        errors
            .read()
            .get(field)
            .map(|err| field_error_text(field, err))
    };

    rsx! {
        section { class: "page page-profile",
            header { class: "page__header page__header--end",
                SkipButton { to: Screen::WelcomePersonalized }
            }
            h1 { class: "page__title", {t!("profile-title")} }
            p { class: "page__subtitle", {t!("profile-subtitle")} }

            button {
                r#type: "button",
                class: "avatar-picker",
                aria_label: t!("profile-photo"),
                // No media picker is wired up; the tap is only logged.
                onclick: move |_| info!("profile photo picker requested"),
                span { class: "avatar-picker__icon", "📷" }
            }

            form {
                class: "form",
                "novalidate": "true",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit();
                },
                TextField {
                    id: "profile-full-name",
                    label: t!("profile-full-name"),
                    value: full_name,
                    placeholder: "John Doe",
                    disabled: loading(),
                    error: error_for(Field::FullName),
                }
                TextField {
                    id: "profile-username",
                    label: t!("profile-username"),
                    value: username,
                    placeholder: "johndoe",
                    disabled: loading(),
                    error: error_for(Field::Username),
                }
                TextField {
                    id: "profile-password",
                    label: t!("profile-password"),
                    value: password,
                    secret: true,
                    disabled: loading(),
                    error: error_for(Field::Password),
                }
                TextField {
                    id: "profile-confirm-password",
                    label: t!("profile-confirm-password"),
                    value: confirm_password,
                    secret: true,
                    disabled: loading(),
                    error: error_for(Field::ConfirmPassword),
                }
                p { class: "form__hint", {t!("profile-password-hint")} }
            }

            div { class: "page__footer",
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    disabled: loading(),
                    onclick: move |_| submit(),
                    if loading() {
                        {t!("profile-creating")}
                    } else {
                        {t!("common-continue")}
                    }
                }
            }
        }
    }
}
