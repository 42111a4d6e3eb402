use dioxus::prelude::*;
use tracing::info;

use crate::components::tempo_logo::{LogoSize, TempoLogo};
use crate::components::use_flow;
use crate::core::flow::Screen;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SocialProvider {
    Google,
    Apple,
}

impl SocialProvider {
    fn name(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Apple => "Apple",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            SocialProvider::Google => "G",
            SocialProvider::Apple => "🍎",
        }
    }
}

#[component]
pub fn SignupScreen() -> Element {
    let flow = use_flow();

    rsx! {
        section { class: "page page-signup",
            div { class: "sheet-backdrop" }
            div { class: "sheet",
                button {
                    r#type: "button",
                    class: "sheet__close",
                    aria_label: t!("common-close"),
                    onclick: move |_| flow.navigate(Screen::GetStarted),
                    "×"
                }
                div { class: "sheet__header",
                    TempoLogo { size: LogoSize::Medium }
                    h2 { {t!("signup-title")} }
                    p { class: "sheet__subtitle", {t!("signup-subtitle")} }
                }
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: move |_| flow.navigate(Screen::Email),
                    {t!("signup-continue-email")}
                }
                div { class: "divider",
                    span { {t!("signup-socials")} }
                }
                div { class: "social-buttons",
                    for provider in [SocialProvider::Google, SocialProvider::Apple] {
                        button {
                            key: "{provider:?}",
                            r#type: "button",
                            class: "social-button",
                            aria_label: provider.name(),
                            // Social sign-in has no backend; the choice is only logged.
                            onclick: move |_| info!(provider = provider.name(), "social sign-up requested"),
                            {provider.glyph()}
                        }
                    }
                }
            }
        }
    }
}
