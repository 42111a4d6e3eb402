use dioxus::prelude::*;

use ui::components::AppShell;
use ui::core::config::FlowConfig;

const THEME_CSS: &str = ui::THEME_CSS;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    tracing::debug!("starting web onboarding");

    rsx! {
        document::Title { "Tempo" }
        document::Meta { name: "theme-color", content: "#0b0b12" }
        document::Style { "{THEME_CSS}" }

        AppShell { config: FlowConfig::default() }
    }
}
