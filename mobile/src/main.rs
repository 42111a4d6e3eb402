use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use ui::components::AppShell;
use ui::core::config::FlowConfig;

const THEME_CSS: &str = ui::THEME_CSS;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ui=info,tempo_mobile=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!("starting mobile onboarding");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{THEME_CSS}" }
        AppShell { config: FlowConfig::default() }
    }
}
