use dioxus::prelude::*;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::core::timing;

const CLOCK_REFRESH_MS: u64 = 15_000;

/// Phone-style status bar: wall clock plus decorative signal and battery.
#[component]
pub fn StatusBar() -> Element {
    let mut clock = use_signal(clock_label);

    use_future(move || async move {
        loop {
            timing::sleep_ms(CLOCK_REFRESH_MS).await;
            let label = clock_label();
            if *clock.peek() != label {
                clock.set(label);
            }
        }
    });

    rsx! {
        div { class: "status-bar",
            span { class: "status-bar__time", "{clock}" }
            div { class: "status-bar__icons", aria_hidden: "true",
                span { class: "status-bar__signal status-bar__signal--1" }
                span { class: "status-bar__signal status-bar__signal--2" }
                span { class: "status-bar__signal status-bar__signal--3" }
                span { class: "status-bar__battery",
                    span { class: "status-bar__battery-level" }
                }
            }
        }
    }
}

fn clock_label() -> String {
    // Local offset is unavailable on some platforms; UTC is close enough for chrome.
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!("[hour]:[minute]"))
        .unwrap_or_default()
}
