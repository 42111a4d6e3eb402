use dioxus::prelude::*;
use tracing::info;

use crate::components::controls::{BackButton, SkipButton};
use crate::components::use_flow;
use crate::core::catalog::PREFERENCE_CATEGORIES;
use crate::core::flow::Screen;
use crate::core::selection::Selection;
use crate::i18n;
use crate::t;

#[component]
pub fn PreferencesScreen() -> Element {
    let flow = use_flow();
    let mut selected = use_signal(Selection::<&'static str>::default);

    let chips: Vec<(&'static str, &'static str, String, bool)> = PREFERENCE_CATEGORIES
        .iter()
        .map(|category| {
            (
                category.id,
                category.icon,
                i18n::tr(&category.label_key()),
                selected.read().contains(&category.id),
            )
        })
        .collect();

    rsx! {
        section { class: "page page-preferences",
            header { class: "page__header",
                BackButton { to: Screen::WelcomePersonalized }
                SkipButton { to: Screen::Location }
            }
            h1 { class: "page__title", {t!("preferences-title")} }
            p { class: "page__subtitle", {t!("preferences-subtitle")} }

            div { class: "chips",
                for (id, icon, label, active) in chips {
                    button {
                        key: "{id}",
                        r#type: "button",
                        class: if active { "chip chip--active" } else { "chip" },
                        aria_pressed: if active { "true" } else { "false" },
                        onclick: move |_| {
                            selected.write().toggle(id);
                        },
                        span { class: "chip__icon", "{icon}" }
                        span { class: "chip__label", "{label}" }
                    }
                }
            }

            div { class: "page__footer",
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: move |_| {
                        // Choices are not stored anywhere yet.
                        info!(count = selected.peek().len(), "preferences picked");
                        flow.navigate(Screen::Location);
                    },
                    {t!("common-next")}
                }
            }
        }
    }
}
