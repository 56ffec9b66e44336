use super::*;

// =============================================================
// email
// =============================================================

#[test]
fn empty_email_is_required_not_invalid() {
    assert_eq!(validate_email(""), Some(FieldError::required("Email is required")));
}

#[test]
fn well_formed_emails_pass() {
    for email in ["a@b.co", "user@example.com", "first.last@mail.example.org", "x@y.z"] {
        assert_eq!(validate_email(email), None, "expected {email:?} to pass");
    }
}

#[test]
fn email_without_at_is_invalid() {
    for email in ["plainaddress", "example.com", "a.b.c"] {
        assert_eq!(validate_email(email), Some(FieldError::InvalidFormat), "{email:?}");
    }
}

#[test]
fn email_without_dot_after_at_is_invalid() {
    for email in ["user@localhost", "a.b@example", "user@"] {
        assert_eq!(validate_email(email), Some(FieldError::InvalidFormat), "{email:?}");
    }
}

#[test]
fn email_dot_must_have_text_on_both_sides() {
    assert_eq!(validate_email("user@.com"), Some(FieldError::InvalidFormat));
    assert_eq!(validate_email("user@example."), Some(FieldError::InvalidFormat));
    assert_eq!(validate_email("user@.example.com"), None);
}

#[test]
fn email_with_whitespace_or_second_at_is_invalid() {
    assert_eq!(validate_email("us er@example.com"), Some(FieldError::InvalidFormat));
    assert_eq!(validate_email(" user@example.com"), Some(FieldError::InvalidFormat));
    assert_eq!(validate_email("a@b@c.com"), Some(FieldError::InvalidFormat));
    assert_eq!(validate_email("@example.com"), Some(FieldError::InvalidFormat));
}

#[test]
fn byte_order_mark_counts_as_whitespace_in_email() {
    assert_eq!(validate_email("a\u{FEFF}b@c.co"), Some(FieldError::InvalidFormat));
    assert_eq!(validate_email("ab@c.co\u{FEFF}"), Some(FieldError::InvalidFormat));
}

#[test]
fn next_line_control_is_not_email_whitespace() {
    assert_eq!(validate_email("a\u{85}b@c.co"), None);
}

#[test]
fn unicode_spaces_in_email_are_invalid() {
    for email in ["a\u{A0}b@c.co", "a@b\u{2003}c.co", "a@b.c\u{3000}o"] {
        assert_eq!(validate_email(email), Some(FieldError::InvalidFormat), "{email:?}");
    }
}

#[test]
fn whitespace_only_email_is_invalid_not_required() {
    assert_eq!(validate_email("   "), Some(FieldError::InvalidFormat));
}

// =============================================================
// password
// =============================================================

#[test]
fn empty_password_is_required() {
    assert_eq!(validate_password(""), Some(FieldError::required("Password is required")));
}

#[test]
fn short_passwords_are_too_short() {
    for pw in ["a", "ab", "abc", "abcd", "abcde"] {
        assert_eq!(validate_password(pw), Some(FieldError::TooShort { min: 6 }), "{pw:?}");
    }
}

#[test]
fn six_or_more_characters_pass() {
    assert_eq!(validate_password("abcdef"), None);
    assert_eq!(validate_password("correct horse battery"), None);
}

#[test]
fn password_length_counts_utf16_units() {
    assert_eq!(validate_password("ééééé"), Some(FieldError::TooShort { min: 6 }));
    assert_eq!(validate_password("éééééé"), None);
}

#[test]
fn astral_characters_count_twice_toward_password_length() {
    assert_eq!(validate_password("😀😀😀"), None);
    assert_eq!(validate_password("😀😀"), Some(FieldError::TooShort { min: 6 }));
    assert_eq!(validate_password("ab😀c"), Some(FieldError::TooShort { min: 6 }));
    assert_eq!(validate_password("abc😀d"), None);
}

// =============================================================
// messages
// =============================================================

#[test]
fn field_error_display_is_user_message() {
    assert_eq!(FieldError::InvalidFormat.to_string(), "Please enter a valid email");
    assert_eq!(FieldError::TooShort { min: 6 }.to_string(), "Password must be at least 6 characters");
    assert_eq!(FieldError::required("Date is required").to_string(), "Date is required");
}

// =============================================================
// LoginForm
// =============================================================

#[test]
fn login_form_reports_both_fields_when_empty() {
    let errors = LoginForm::default().validate();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.message(FIELD_EMAIL).as_deref(), Some("Email is required"));
    assert_eq!(errors.message(FIELD_PASSWORD).as_deref(), Some("Password is required"));
}

#[test]
fn login_form_valid_has_no_errors() {
    let form = LoginForm { email: "me@econnecto.in".to_owned(), password: "secret1".to_owned() };
    assert!(form.validate().is_empty());
}

#[test]
fn login_form_reports_only_failing_field() {
    let form = LoginForm { email: "me@econnecto.in".to_owned(), password: "123".to_owned() };
    let errors = form.validate();
    assert!(!errors.has(FIELD_EMAIL));
    assert_eq!(errors.get(FIELD_PASSWORD), Some(&FieldError::TooShort { min: 6 }));
}

// =============================================================
// PickupForm
// =============================================================

fn filled_pickup() -> PickupForm {
    PickupForm {
        date: "2024-12-01".to_owned(),
        time_slot: "9-11".to_owned(),
        location: "Test Address".to_owned(),
        items: "Old Phone".to_owned(),
        notes: String::new(),
    }
}

#[test]
fn pickup_form_filled_without_notes_is_valid() {
    assert!(filled_pickup().validate().is_empty());
}

#[test]
fn pickup_form_empty_reports_four_required_fields() {
    let errors = PickupForm::default().validate();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FIELD_DATE, FIELD_ITEMS, FIELD_LOCATION, FIELD_TIME]);
    assert_eq!(errors.message(FIELD_ITEMS).as_deref(), Some("Please list items to recycle"));
    assert_eq!(errors.message(FIELD_TIME).as_deref(), Some("Time slot is required"));
}

#[test]
fn pickup_form_has_no_format_rules() {
    let mut form = filled_pickup();
    form.date = "whenever".to_owned();
    form.location = "?".to_owned();
    assert!(form.validate().is_empty());
}

#[test]
fn pickup_form_single_missing_field() {
    let mut form = filled_pickup();
    form.location.clear();
    let errors = form.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors.has(FIELD_LOCATION));
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn clear_removes_only_that_field() {
    let mut errors = LoginForm::default().validate();
    errors.clear(FIELD_EMAIL);
    assert!(!errors.has(FIELD_EMAIL));
    assert!(errors.has(FIELD_PASSWORD));
    errors.clear(FIELD_PASSWORD);
    assert!(errors.is_empty());
}

#[test]
fn pickup_blank_detection() {
    assert!(PickupForm::default().is_blank());
    assert!(!filled_pickup().is_blank());
}
