#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::{Path, PathBuf};

#[cfg(feature = "desktop")]
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ui::components::AppShell;
use ui::core::config::FlowConfig;

const THEME_CSS: &str = ui::THEME_CSS;

/// Optional overrides, read from the resource directory (`desktop/assets/`
/// under `cargo run`, `assets/` next to the executable in release builds).
const FLOW_CONFIG_FILE: &str = "flow.json";

#[cfg(feature = "desktop")]
fn main() {
    init_tracing();
    let resource_dir = resolve_resource_dir();
    let config = load_flow_config(&resource_dir.join(FLOW_CONFIG_FILE));

    // Phone-sized window; the shell fills it edge to edge.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Tempo – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(390.0, 844.0))
                        .with_resizable(false),
                )
                .with_resource_directory(resource_dir),
        )
        .with_context(config)
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_tracing();
    LaunchBuilder::server()
        .with_context(FlowConfig::default())
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<FlowConfig>();

    rsx! {
        // Embedded theme; no external stylesheet ships with desktop builds.
        document::Style { "{THEME_CSS}" }
        AppShell { config }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ui=info,tempo_desktop=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_flow_config(path: &Path) -> FlowConfig {
    match FlowConfig::load_or_default(path) {
        Ok(config) => {
            info!(path = %path.display(), initial = %config.initial_screen, "flow config loaded");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring flow config; using defaults");
            FlowConfig::default()
        }
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
