use dioxus::prelude::*;

use crate::components::controls::SkipButton;
use crate::components::{use_flow, use_flow_config, use_toasts};
use crate::core::flow::Screen;
use crate::core::permissions::{self, PermissionKind};
use crate::t;

#[component]
pub fn LocationScreen() -> Element {
    let flow = use_flow();
    let config = use_flow_config();
    let toasts = use_toasts();
    let mut requesting = use_signal(|| false);

    let enable = move |_: MouseEvent| {
        if requesting() {
            return;
        }
        requesting.set(true);
        spawn(async move {
            let status =
                permissions::request(PermissionKind::Location, config.timings.permission_prompt_ms)
                    .await;
            requesting.set(false);
            if !status.is_granted() {
                toasts.info(t!("permission-denied-title"), t!("permission-denied-message"));
            }
            flow.navigate(Screen::Friends);
        });
    };

    rsx! {
        section { class: "page page-location gradient-bg-alt",
            header { class: "page__header page__header--end",
                SkipButton { to: Screen::Friends }
            }
            div { class: "page-location__illustration", aria_hidden: "true",
                div { class: "pin", "📍" }
                div { class: "pin__pulse" }
            }
            h1 { class: "page__title", {t!("location-title")} }
            p { class: "page__subtitle", {t!("location-subtitle")} }
            div { class: "page__footer",
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    disabled: requesting(),
                    onclick: enable,
                    if requesting() {
                        {t!("permission-requesting")}
                    } else {
                        {t!("location-enable")}
                    }
                }
            }
        }
    }
}
