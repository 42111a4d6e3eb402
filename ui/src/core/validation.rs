//! Field constraints for the onboarding forms.
//!
//! `check` answers one constraint for one value. The form types gather
//! per-field results so the views can render errors inline, next to the
//! offending input. Errors never leave the screen; they only block submit.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern compiles")
});

static HANDLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("handle pattern compiles"));

pub const MIN_FULL_NAME: usize = 2;
pub const MIN_USERNAME: usize = 3;
pub const MIN_PASSWORD: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Email,
    MinLength(usize),
    /// Letters, digits and underscores only.
    Handle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Username can only contain letters, numbers, and underscores")]
    InvalidHandle,

    #[error("Passwords don't match")]
    PasswordMismatch,
}

pub fn check(value: &str, rule: Rule) -> Result<(), ValidationError> {
    match rule {
        Rule::Email if !EMAIL_RE.is_match(value) => Err(ValidationError::InvalidEmail),
        Rule::MinLength(min) if value.chars().count() < min => {
            Err(ValidationError::TooShort { min })
        }
        Rule::Handle if !HANDLE_RE.is_match(value) => Err(ValidationError::InvalidHandle),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    FullName,
    Username,
    Password,
    ConfirmPassword,
}

/// Per-field errors; the first failing rule of a field is the one reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    fn check_all(&mut self, field: Field, value: &str, rules: &[Rule]) {
        if let Some(err) = rules.iter().find_map(|rule| check(value, *rule).err()) {
            self.errors.entry(field).or_insert(err);
        }
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailForm {
    pub email: String,
}

impl EmailForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.check_all(Field::Email, &self.email, &[Rule::Email]);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.check_all(
            Field::FullName,
            &self.full_name,
            &[Rule::MinLength(MIN_FULL_NAME)],
        );
        errors.check_all(
            Field::Username,
            &self.username,
            &[Rule::MinLength(MIN_USERNAME), Rule::Handle],
        );
        errors.check_all(
            Field::Password,
            &self.password,
            &[Rule::MinLength(MIN_PASSWORD)],
        );
        if self.password != self.confirm_password {
            errors
                .errors
                .insert(Field::ConfirmPassword, ValidationError::PasswordMismatch);
        }
        errors.into_result()
    }
}
