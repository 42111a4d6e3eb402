use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Language picker. Updates the shell's language signal so the flow
/// subtree remounts with fresh strings.
#[component]
pub fn LocaleSwitcher() -> Element {
    let langs = use_signal(i18n::available_languages);
    let mut lang_code = use_context::<Signal<String>>();

    if langs().len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => lang_code.set(val),
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    rsx! {
        div { class: "locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("locale-label")} }
            select {
                id: "locale-select",
                class: "locale__select",
                value: "{lang_code}",
                oninput: on_change,
                for code in langs() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
