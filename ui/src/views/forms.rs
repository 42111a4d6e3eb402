//! Form building blocks shared by the email and profile screens.

use dioxus::prelude::*;

use crate::core::validation::{Field, ValidationError};
use crate::t;

/// Localized inline message for a failed field.
pub fn field_error_text(field: Field, err: ValidationError) -> String {
    match (field, err) {
        (_, ValidationError::InvalidEmail) => t!("error-email-invalid"),
        (_, ValidationError::InvalidHandle) => t!("error-username-charset"),
        (_, ValidationError::PasswordMismatch) => t!("error-password-mismatch"),
        (Field::FullName, ValidationError::TooShort { min }) => {
            t!("error-full-name-short", min = min.to_string())
        }
        (Field::Username, ValidationError::TooShort { min }) => {
            t!("error-username-short", min = min.to_string())
        }
        (_, ValidationError::TooShort { min }) => {
            t!("error-password-short", min = min.to_string())
        }
    }
}

/// Labelled text input bound to a signal, with an optional inline error.
/// `secret` inputs get a show/hide toggle.
#[component]
pub fn TextField(
    id: &'static str,
    label: String,
    value: Signal<String>,
    #[props(default)] placeholder: &'static str,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] secret: bool,
    #[props(default)] disabled: bool,
    #[props(!optional)] error: Option<String>,
) -> Element {
    let mut value = value;
    let mut revealed = use_signal(|| false);
    let input_type = if secret && !revealed() { "password" } else { kind };
    let toggle_label = if revealed() {
        t!("form-hide-password")
    } else {
        t!("form-show-password")
    };
    let invalid = if error.is_some() { "form__input--invalid" } else { "" };

    rsx! {
        div { class: "form__field",
            label { class: "form__label", r#for: id, "{label}" }
            div { class: "form__control",
                input {
                    id,
                    class: "form__input {invalid}",
                    r#type: input_type,
                    placeholder,
                    disabled,
                    value: "{value}",
                    oninput: move |evt| value.set(evt.value()),
                }
                if secret {
                    button {
                        r#type: "button",
                        class: "form__reveal",
                        aria_label: "{toggle_label}",
                        onclick: move |_| revealed.toggle(),
                        if revealed() { "🙈" } else { "👁" }
                    }
                }
            }
            if let Some(message) = error {
                p { class: "form__error", role: "alert", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{MIN_FULL_NAME, MIN_PASSWORD};

    #[test]
    fn length_errors_carry_the_minimum() {
        crate::i18n::init();
        let name = field_error_text(Field::FullName, ValidationError::TooShort { min: MIN_FULL_NAME });
        let password = field_error_text(Field::Password, ValidationError::TooShort { min: MIN_PASSWORD });
        assert!(name.contains(&MIN_FULL_NAME.to_string()), "{name}");
        assert!(password.contains(&MIN_PASSWORD.to_string()), "{password}");
        assert_ne!(name, password);
    }
}
