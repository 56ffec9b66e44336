use super::*;

#[test]
fn input_class_flags_fields_with_errors() {
    assert_eq!(input_class(false), "field__input");
    assert_eq!(input_class(true), "field__input field__input--error");
}

#[test]
fn password_input_type_follows_visibility_toggle() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}

#[test]
fn error_line_is_absent_without_a_message() {
    assert!(error_line(None).is_none());
    assert!(error_line(Some("Email is required".to_owned())).is_some());
}
