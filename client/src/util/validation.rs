//! Synchronous form-field validation for the login and pickup modals.
//!
//! DESIGN
//! ======
//! Validators are pure functions of the current field values. They produce a
//! [`FieldErrors`] map keyed by field name; a field with no entry is valid and
//! a submit proceeds only when the map is empty. Nothing is logged or
//! propagated: the modal shows the message beside the offending input.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_DATE: &str = "date";
pub const FIELD_TIME: &str = "time";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_ITEMS: &str = "items";

/// A single field's validation failure. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{message}")]
    Required { message: &'static str },
    #[error("Please enter a valid email")]
    InvalidFormat,
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
}

impl FieldError {
    pub fn required(message: &'static str) -> Self {
        Self::Required { message }
    }
}

/// Field name to failure mapping, ordered by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    /// Rendered message for `field`, if it failed.
    pub fn message(&self, field: &str) -> Option<String> {
        self.0.get(field).map(ToString::to_string)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Drop the error for one field; used when the user edits that field.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// The `\s` class of browser regular expressions.
///
/// Differs from [`char::is_whitespace`]: includes U+FEFF, excludes U+0085.
fn is_regex_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Minimal `local@domain.tld` shape check.
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: exactly one `@`, no whitespace,
/// a non-empty local part, and a `.` in the domain with at least one character
/// on each side of it.
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(is_regex_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

pub fn validate_email(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::required("Email is required"));
    }
    if !is_email_shaped(value) {
        return Some(FieldError::InvalidFormat);
    }
    None
}

/// Length is counted in UTF-16 code units, so an astral-plane character
/// such as an emoji counts as two.
pub fn validate_password(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::required("Password is required"));
    }
    if value.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Some(FieldError::TooShort { min: MIN_PASSWORD_LEN });
    }
    None
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &'static str) {
    if value.is_empty() {
        errors.insert(field, FieldError::required(message));
    }
}

/// Current values of the login modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Some(err) = validate_email(&self.email) {
            errors.insert(FIELD_EMAIL, err);
        }
        if let Some(err) = validate_password(&self.password) {
            errors.insert(FIELD_PASSWORD, err);
        }
        errors
    }
}

/// Current values of the schedule-pickup modal. `notes` is never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickupForm {
    pub date: String,
    pub time_slot: String,
    pub location: String,
    pub items: String,
    pub notes: String,
}

impl PickupForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, FIELD_DATE, &self.date, "Date is required");
        require(&mut errors, FIELD_TIME, &self.time_slot, "Time slot is required");
        require(&mut errors, FIELD_LOCATION, &self.location, "Location is required");
        require(&mut errors, FIELD_ITEMS, &self.items, "Please list items to recycle");
        errors
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}
