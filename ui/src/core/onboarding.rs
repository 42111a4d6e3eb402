//! Submit outcomes for the form screens, separated from rendering so the
//! flow can be driven headless.

use super::config::FlowTimings;
use super::flow::{NavRequest, Screen};
use super::validation::{EmailForm, FormErrors, ProfileForm};

/// A valid address moves on to the code screen after the simulated check.
pub fn submit_email(form: &EmailForm, timings: &FlowTimings) -> Result<NavRequest, FormErrors> {
    form.validate()?;
    Ok(NavRequest::after(Screen::Otp, timings.email_check_ms))
}

/// A valid profile moves on once the simulated account creation is done.
pub fn submit_profile(
    form: &ProfileForm,
    timings: &FlowTimings,
) -> Result<NavRequest, FormErrors> {
    form.validate()?;
    Ok(NavRequest::after(
        Screen::WelcomePersonalized,
        timings.account_creation_ms,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{Field, ValidationError};
    use pretty_assertions::assert_eq;

    #[test]
    fn email_submit_waits_for_the_check() {
        let timings = FlowTimings::default();
        let form = EmailForm {
            email: "ada@example.com".into(),
        };
        assert_eq!(
            submit_email(&form, &timings),
            Ok(NavRequest::after(Screen::Otp, 1000))
        );
    }

    #[test]
    fn profile_submit_reports_every_bad_field() {
        let form = ProfileForm {
            full_name: "A".into(),
            username: "jo hn".into(),
            password: "short".into(),
            confirm_password: "shorter".into(),
        };
        let errors = submit_profile(&form, &FlowTimings::default()).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![
                Field::FullName,
                Field::Username,
                Field::Password,
                Field::ConfirmPassword
            ]
        );
        assert_eq!(
            errors.get(Field::Username),
            Some(ValidationError::InvalidHandle)
        );
    }
}
