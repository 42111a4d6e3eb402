use dioxus::prelude::*;

use super::flow::{FlowHandle, FlowHost};
use super::locale_switcher::LocaleSwitcher;
use super::status_bar::StatusBar;
use super::toaster::{ToastHandle, Toaster};
use crate::core::config::FlowConfig;
use crate::core::flow::FlowNavigator;
use crate::core::platform::Platform;
use crate::core::toast::ToastQueue;
use crate::i18n;

pub fn use_flow_config() -> FlowConfig {
    use_context::<FlowConfig>()
}

/// Everything the shell provides to the tree below it.
#[derive(Clone, Copy, PartialEq)]
pub struct ShellContext {
    pub flow: FlowHandle,
    pub toasts: ToastHandle,
    pub language: Signal<String>,
}

/// Loads the locales and provides navigator, toasts, config and the
/// language signal as context.
pub fn use_shell_context(config: FlowConfig) -> ShellContext {
    i18n::init();

    let navigator = use_signal(|| FlowNavigator::new(config.initial_screen));
    let flow = use_context_provider(|| FlowHandle::new(navigator));
    let queue = use_signal(|| ToastQueue::new(config.timings.toast_ms));
    let toasts = use_context_provider(|| ToastHandle::new(queue));
    use_context_provider(|| config);
    let language = use_signal(i18n::current_language);
    use_context_provider(|| language);

    ShellContext {
        flow,
        toasts,
        language,
    }
}

/// Screen area of the device frame. Remounts the flow on a language change
/// so every screen re-reads its strings.
#[component]
pub fn Viewport() -> Element {
    let language = use_context::<Signal<String>>();
    let lang = language();

    rsx! {
        for lang in std::iter::once(lang) {
            div { key: "{lang}", class: "device__viewport",
                FlowHost {}
            }
        }
    }
}

/// Root of the onboarding app: frames the active screen in a phone-sized
/// device.
#[component]
pub fn AppShell(config: FlowConfig) -> Element {
    use_shell_context(config);
    let platform_class = Platform::current().css_class();

    rsx! {
        div { class: "app {platform_class}",
            div { class: "device",
                StatusBar {}
                LocaleSwitcher {}
                Viewport {}
                Toaster {}
            }
        }
    }
}
