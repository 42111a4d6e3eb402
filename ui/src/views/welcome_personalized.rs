use dioxus::prelude::*;

use crate::components::controls::SkipButton;
use crate::components::use_flow;
use crate::core::flow::Screen;
use crate::t;

#[component]
pub fn WelcomePersonalizedScreen() -> Element {
    let flow = use_flow();

    rsx! {
        section { class: "page page-welcome-personalized gradient-bg",
            header { class: "page__header page__header--end",
                SkipButton { to: Screen::Preferences }
            }
            div { class: "page-welcome-personalized__hero",
                div { class: "confetti", aria_hidden: "true", "🎉" }
                h1 { class: "page__title", {t!("welcome-personalized-title")} }
                p { class: "page__subtitle", {t!("welcome-personalized-subtitle")} }
            }
            div { class: "page__footer",
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: move |_| flow.navigate(Screen::Preferences),
                    {t!("welcome-personalized-cta")}
                }
            }
        }
    }
}
