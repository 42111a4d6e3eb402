use dioxus::prelude::*;
use tracing::info;

use crate::components::controls::SkipButton;
use crate::components::use_flow;
use crate::core::catalog::PHOTO_PROMPTS;
use crate::core::flow::Screen;
use crate::i18n;
use crate::t;

#[component]
pub fn PhotoCaptureScreen() -> Element {
    let flow = use_flow();

    let prompts: Vec<(&'static str, &'static str, String)> = PHOTO_PROMPTS
        .iter()
        .map(|prompt| (prompt.id, prompt.tilt, i18n::tr(&prompt.caption_key())))
        .collect();

    rsx! {
        section { class: "page page-photo",
            header { class: "page__header page__header--end",
                SkipButton { to: Screen::Notifications }
            }
            h1 { class: "page__title", {t!("photo-title")} }
            p { class: "page__subtitle", {t!("photo-subtitle")} }

            div { class: "polaroids",
                for (id, tilt, caption) in prompts {
                    figure { key: "{id}", class: "polaroid {tilt}",
                        div { class: "polaroid__frame" }
                        figcaption { class: "polaroid__caption", "{caption}" }
                    }
                }
            }

            div { class: "page__footer",
                button {
                    r#type: "button",
                    class: "button button--ghost button--block",
                    // No camera bridge; the tap is only logged.
                    onclick: move |_| info!("camera requested"),
                    span { aria_hidden: "true", "📷 " }
                    {t!("photo-take")}
                }
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: move |_| flow.navigate(Screen::Notifications),
                    {t!("photo-got-it")}
                }
            }
        }
    }
}
