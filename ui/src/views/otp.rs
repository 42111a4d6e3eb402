use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::components::controls::BackButton;
use crate::components::{use_flow_config, use_screen_scope, use_toasts};
use crate::core::flow::Screen;
use crate::core::otp::{OtpEntry, OtpError, OTP_LEN};
use crate::core::timing;
use crate::t;

#[component]
pub fn OtpScreen() -> Element {
    let timers = use_screen_scope(Screen::Otp);
    let toasts = use_toasts();
    let config = use_flow_config();
    let mut otp = use_signal(OtpEntry::default);
    let mut loading = use_signal(|| false);
    let mut verified = use_signal(|| false);
    let mut box_refs = use_signal(|| vec![None::<Rc<MountedData>>; OTP_LEN]);
    let locked = loading() || verified();

    let verify = move |_: MouseEvent| {
        if loading() || verified() {
            return;
        }
        let result = otp.read().verify();
        match result {
            Err(OtpError::Incomplete) => {
                toasts.error(t!("otp-incomplete-title"), t!("otp-incomplete-message"));
            }
            Ok(code) => {
                loading.set(true);
                spawn(async move {
                    debug!(digits = code.len(), "verifying code");
                    timing::sleep_ms(config.timings.otp_verify_ms).await;
                    loading.set(false);
                    verified.set(true);
                    toasts.info(t!("otp-verified-title"), t!("otp-verified-message"));
                    timers.navigate_after_delay(Screen::Welcome, config.timings.otp_redirect_ms);
                });
            }
        }
    };

    let resend = move |_: MouseEvent| {
        toasts.info(t!("otp-resent-title"), t!("otp-resent-message"));
    };

    let focus_box = move |index: usize| {
        let target = box_refs.read().get(index).cloned().flatten();
        if let Some(el) = target {
            spawn(async move {
                let _ = el.set_focus(true).await;
            });
        }
    };

    let boxes: Vec<Option<u8>> = (0..OTP_LEN).map(|i| otp.read().digit(i)).collect();
    let box_state = if verified() { "otp__box--verified" } else { "" };

    rsx! {
        section { class: "page page-otp gradient-bg-alt",
            header { class: "page__header",
                BackButton { to: Screen::Email }
            }
            h1 { class: "page__title", {t!("otp-title")} }
            p { class: "page__subtitle", {t!("otp-subtitle")} }

            div { class: "otp", role: "group", aria_label: t!("otp-title"),
                for (index, digit) in boxes.into_iter().enumerate() {
                    input {
                        key: "{index}",
                        class: "otp__box {box_state}",
                        r#type: "text",
                        inputmode: "numeric",
                        maxlength: 1,
                        disabled: locked,
                        value: digit.map(|d| d.to_string()).unwrap_or_default(),
                        onmounted: move |evt: MountedEvent| {
                            box_refs.write()[index] = Some(evt.data());
                        },
                        // Rejected input still rewrites the signal so the box re-renders clean.
                        oninput: move |evt| {
                            otp.write().set(index, &evt.value());
                            let next = otp.read().focus_after_input(index);
                            if let Some(next) = next {
                                focus_box(next);
                            }
                        },
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() != Key::Backspace {
                                return;
                            }
                            let previous = otp.read().focus_after_backspace(index);
                            if let Some(previous) = previous {
                                focus_box(previous);
                            }
                        },
                    }
                }
            }

            p { class: "otp__resend",
                span { {t!("otp-no-code")} }
                " "
                button {
                    r#type: "button",
                    class: "link-button",
                    disabled: locked,
                    onclick: resend,
                    {t!("otp-send-again")}
                }
            }

            button {
                r#type: "button",
                class: "button button--primary button--block",
                disabled: locked,
                onclick: verify,
                if verified() {
                    {t!("otp-verified")}
                } else if loading() {
                    {t!("otp-verifying")}
                } else {
                    {t!("otp-verify")}
                }
            }

            div { class: "keypad",
                for digit in 1..=9u8 {
                    button {
                        key: "{digit}",
                        r#type: "button",
                        class: "keypad__key",
                        disabled: locked,
                        onclick: move |_| {
                            otp.write().push_digit(digit);
                        },
                        "{digit}"
                    }
                }
                span { class: "keypad__spacer" }
                button {
                    r#type: "button",
                    class: "keypad__key",
                    disabled: locked,
                    onclick: move |_| {
                        otp.write().push_digit(0);
                    },
                    "0"
                }
                button {
                    r#type: "button",
                    class: "keypad__key keypad__key--erase",
                    aria_label: t!("otp-erase"),
                    disabled: locked,
                    onclick: move |_| {
                        otp.write().backspace();
                    },
                    "⌫"
                }
            }
        }
    }
}
