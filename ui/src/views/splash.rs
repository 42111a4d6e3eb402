use dioxus::prelude::*;

use crate::components::tempo_logo::TempoLogo;
use crate::components::{use_flow_config, use_screen_scope};
use crate::core::flow::Screen;

#[component]
pub fn SplashScreen() -> Element {
    let timers = use_screen_scope(Screen::Splash);
    let config = use_flow_config();

    // Auto-advance; the ticket dies with this mounting.
    use_hook(move || timers.navigate_after_delay(Screen::GetStarted, config.timings.splash_ms));

    rsx! {
        section { class: "page page-splash gradient-bg",
            div { class: "page-splash__center",
                TempoLogo { animate: true }
                div { class: "page-splash__bar" }
                h1 { class: "page-splash__brand", "tempo" }
            }
        }
    }
}
