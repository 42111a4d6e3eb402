use dioxus::prelude::*;

use crate::t;

/// In-app rationale shown before a system permission prompt.
#[component]
pub fn PermissionDialog(
    title: String,
    body: String,
    on_allow: EventHandler<()>,
    on_deny: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog", role: "alertdialog", aria_modal: "true",
                h2 { class: "dialog__title", "{title}" }
                p { class: "dialog__body", "{body}" }
                div { class: "dialog__actions",
                    button {
                        r#type: "button",
                        class: "dialog__button",
                        onclick: move |_| on_deny.call(()),
                        {t!("permission-deny")}
                    }
                    button {
                        r#type: "button",
                        class: "dialog__button dialog__button--primary",
                        onclick: move |_| on_allow.call(()),
                        {t!("permission-allow")}
                    }
                }
            }
        }
    }
}
