use dioxus::prelude::*;

use crate::core::timing;
use crate::core::toast::{ToastQueue, ToastVariant};
use crate::t;

const TICK_MS: u64 = 250;

/// Capability for raising notices from any screen.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastHandle {
    queue: Signal<ToastQueue>,
}

impl ToastHandle {
    pub fn new(queue: Signal<ToastQueue>) -> Self {
        Self { queue }
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(title.into(), message.into(), ToastVariant::Info);
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(title.into(), message.into(), ToastVariant::Destructive);
    }

    fn push(&self, title: String, message: String, variant: ToastVariant) {
        let mut queue = self.queue;
        queue.write().push(title, message, variant);
    }
}

pub fn use_toasts() -> ToastHandle {
    use_context::<ToastHandle>()
}

#[component]
pub fn Toaster() -> Element {
    let ToastHandle { mut queue } = use_toasts();

    use_future(move || async move {
        loop {
            timing::sleep_ms(TICK_MS).await;
            if !queue.peek().is_empty() {
                queue.write().tick(TICK_MS);
            }
        }
    });

    let visible = queue.read().visible().to_vec();
    let dismiss_label = t!("toast-dismiss");

    rsx! {
        div { class: "toaster", role: "status", aria_live: "polite",
            for toast in visible {
                div {
                    key: "{toast.id}",
                    class: format!("toast {}", toast.variant.css_class()),
                    div { class: "toast__body",
                        p { class: "toast__title", "{toast.title}" }
                        p { class: "toast__message", "{toast.message}" }
                    }
                    button {
                        r#type: "button",
                        class: "toast__close",
                        aria_label: "{dismiss_label}",
                        onclick: move |_| {
                            queue.write().dismiss(toast.id);
                        },
                        "×"
                    }
                }
            }
        }
    }
}
