use dioxus::prelude::*;

use crate::components::use_flow;
use crate::core::catalog::FEATURED_EVENTS;
use crate::core::flow::Screen;
use crate::t;

#[component]
pub fn FinalWelcomeScreen() -> Element {
    let flow = use_flow();

    rsx! {
        section { class: "page page-final gradient-bg",
            h1 { class: "page__title", {t!("final-title")} }
            p { class: "page__subtitle", {t!("final-subtitle")} }

            div { class: "event-grid",
                for event in FEATURED_EVENTS.iter().copied() {
                    article { key: "{event.id}", class: "event-card {event.accent}",
                        div { class: "event-card__image", aria_hidden: "true", "{event.image}" }
                        h3 { class: "event-card__title", "{event.title}" }
                    }
                }
            }

            p { class: "page-final__tagline", {t!("final-tagline")} }
            div { class: "page__footer",
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: move |_| flow.navigate(Screen::MainApp),
                    {t!("final-cta")}
                }
            }
        }
    }
}
