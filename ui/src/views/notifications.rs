use dioxus::prelude::*;

use crate::components::controls::SkipButton;
use crate::components::permission_dialog::PermissionDialog;
use crate::components::{use_flow, use_flow_config, use_toasts};
use crate::core::catalog::NOTIFICATION_SAMPLES;
use crate::core::flow::Screen;
use crate::core::permissions::{self, PermissionKind};
use crate::i18n;
use crate::t;

#[component]
pub fn NotificationsScreen() -> Element {
    let flow = use_flow();
    let config = use_flow_config();
    let toasts = use_toasts();
    let mut show_dialog = use_signal(|| false);
    let mut requesting = use_signal(|| false);

    let samples: Vec<(&'static str, &'static str, String)> = NOTIFICATION_SAMPLES
        .iter()
        .map(|sample| (sample.kind, sample.icon, i18n::tr(&sample.text_key())))
        .collect();

    let allow = move |_: ()| {
        show_dialog.set(false);
        requesting.set(true);
        spawn(async move {
            let status = permissions::request(
                PermissionKind::Notifications,
                config.timings.permission_prompt_ms,
            )
            .await;
            requesting.set(false);
            if !status.is_granted() {
                toasts.info(t!("permission-denied-title"), t!("permission-denied-message"));
            }
            flow.navigate(Screen::FinalWelcome);
        });
    };

    let deny = move |_: ()| {
        show_dialog.set(false);
        permissions::decline(PermissionKind::Notifications);
        flow.navigate(Screen::FinalWelcome);
    };

    rsx! {
        section { class: "page page-notifications gradient-bg-alt",
            header { class: "page__header page__header--end",
                SkipButton { to: Screen::FinalWelcome }
            }
            h1 { class: "page__title", {t!("notifications-title")} }
            p { class: "page__subtitle", {t!("notifications-subtitle")} }

            ul { class: "notification-samples",
                for (kind, icon, text) in samples {
                    li { key: "{kind}", class: "notification-sample",
                        span { class: "notification-sample__icon", aria_hidden: "true", "{icon}" }
                        span { class: "notification-sample__text", "{text}" }
                    }
                }
            }

            div { class: "page__footer",
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    disabled: requesting(),
                    onclick: move |_| show_dialog.set(true),
                    if requesting() {
                        {t!("permission-requesting")}
                    } else {
                        {t!("notifications-enable")}
                    }
                }
            }

            if show_dialog() {
                PermissionDialog {
                    title: t!("notifications-dialog-title"),
                    body: t!("notifications-dialog-body"),
                    on_allow: allow,
                    on_deny: deny,
                }
            }
        }
    }
}
