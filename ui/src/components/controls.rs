//! Small navigation controls shared by most screens.

use dioxus::prelude::*;

use super::flow::use_flow;
use crate::core::flow::Screen;
use crate::t;

#[component]
pub fn BackButton(to: Screen) -> Element {
    let flow = use_flow();
    rsx! {
        button {
            r#type: "button",
            class: "back-button",
            aria_label: t!("common-back"),
            onclick: move |_| flow.navigate(to),
            "←"
        }
    }
}

#[component]
pub fn SkipButton(to: Screen) -> Element {
    let flow = use_flow();
    rsx! {
        button {
            r#type: "button",
            class: "skip-button",
            onclick: move |_| flow.navigate(to),
            {t!("common-skip")}
        }
    }
}
