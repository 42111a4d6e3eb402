use dioxus::prelude::*;

use crate::components::tempo_logo::{LogoSize, TempoLogo};
use crate::components::use_flow;
use crate::core::flow::Screen;
use crate::t;

#[component]
pub fn WelcomeScreen() -> Element {
    let flow = use_flow();

    rsx! {
        section { class: "page page-welcome gradient-bg",
            div { class: "page-welcome__hero",
                TempoLogo { size: LogoSize::Large, animate: true }
                h1 { class: "page__title", {t!("welcome-title")} }
                p { class: "page__subtitle", {t!("welcome-subtitle")} }
            }
            div { class: "page__footer",
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: move |_| flow.navigate(Screen::ProfileSetup),
                    {t!("welcome-setup")}
                }
                button {
                    r#type: "button",
                    class: "link-button",
                    onclick: move |_| flow.navigate(Screen::MainApp),
                    {t!("welcome-skip-ahead")}
                }
            }
        }
    }
}
