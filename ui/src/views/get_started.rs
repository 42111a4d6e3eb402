use dioxus::prelude::*;
use tracing::info;

use crate::components::tempo_logo::{LogoSize, TempoLogo};
use crate::components::use_flow;
use crate::core::flow::Screen;
use crate::t;

/// Jump targets offered by the debug-only quick navigation strip.
const QUICK_NAV: [Screen; 5] = [
    Screen::Splash,
    Screen::Signup,
    Screen::Email,
    Screen::Otp,
    Screen::Welcome,
];

#[component]
pub fn GetStartedScreen() -> Element {
    let flow = use_flow();

    rsx! {
        section { class: "page page-get-started gradient-bg-alt",
            div { class: "page-get-started__brand",
                TempoLogo { size: LogoSize::Medium }
                h1 { class: "page-get-started__wordmark", "tempo" }
            }
            div { class: "page-get-started__actions",
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: move |_| flow.navigate(Screen::Signup),
                    {t!("get-started-cta")}
                }
                p { class: "page-get-started__login",
                    span { {t!("get-started-have-account")} }
                    " "
                    button {
                        r#type: "button",
                        class: "link-button",
                        // TODO: route to a login screen once one exists.
                        onclick: move |_| info!("login requested; no login screen yet"),
                        {t!("get-started-login")}
                    }
                }
                if cfg!(debug_assertions) {
                    QuickNav {}
                }
            }
        }
    }
}

#[component]
fn QuickNav() -> Element {
    let flow = use_flow();

    rsx! {
        div { class: "quick-nav",
            p { class: "quick-nav__title", {t!("get-started-quick-nav")} }
            div { class: "quick-nav__buttons",
                for screen in QUICK_NAV {
                    button {
                        key: "{screen}",
                        r#type: "button",
                        class: "quick-nav__button",
                        onclick: move |_| flow.navigate(screen),
                        "{screen}"
                    }
                }
            }
        }
    }
}
