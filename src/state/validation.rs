//! Submission-time validation of the application

use super::application::{Application, Field};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

pub const FULL_NAME_REQUIRED: &str = "Full Name is required";
pub const PHONE_REQUIRED: &str = "Phone is required";
pub const ADDRESS_REQUIRED: &str = "Address is required";
pub const VALID_AGE_REQUIRED: &str = "Valid age is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const VALID_EMAIL_REQUIRED: &str = "Valid email is required";

/// Messages for the fields that failed validation.
///
/// A field without an entry is valid, or has not been validated yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Check every rule independently and collect the failures
pub fn validate(application: &Application) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if application.full_name.is_empty() {
        errors.insert(Field::FullName, FULL_NAME_REQUIRED);
    }
    if application.phone.is_empty() {
        errors.insert(Field::Phone, PHONE_REQUIRED);
    }
    if application.address.is_empty() {
        errors.insert(Field::Address, ADDRESS_REQUIRED);
    }
    if !is_numeric(&application.age) {
        errors.insert(Field::Age, VALID_AGE_REQUIRED);
    }
    if application.password.is_empty() {
        errors.insert(Field::Password, PASSWORD_REQUIRED);
    }
    if !is_email(&application.email) {
        errors.insert(Field::Email, VALID_EMAIL_REQUIRED);
    }

    errors
}

/// Finite decimal number, surrounding whitespace ignored
fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
