use dioxus::prelude::*;

use crate::components::tempo_logo::{LogoSize, TempoLogo};
use crate::t;

/// End of onboarding. Placeholder for the real app.
#[component]
pub fn MainAppScreen() -> Element {
    rsx! {
        section { class: "page page-main",
            TempoLogo { size: LogoSize::Small }
            h1 { class: "page__title", {t!("main-title")} }
            p { class: "page__subtitle", {t!("main-subtitle")} }
        }
    }
}
