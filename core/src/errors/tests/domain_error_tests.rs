//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, FieldErrors, TokenError, NON_FIELD_ERRORS};

#[test]
fn test_auth_error_messages() {
    assert_eq!(AuthError::InvalidApiKey.to_string(), "Invalid or missing API key.");
    assert_eq!(AuthError::DemoLoginFailed.to_string(), "Demo login failed.");
    assert_eq!(
        AuthError::InvalidCredentials.to_string(),
        "No active account found with the given credentials"
    );
}

#[test]
fn test_field_errors_serialize_as_map_of_lists() {
    let mut errors = FieldErrors::new();
    errors.add("password_1", "Ensure this field has at least 8 characters.");
    errors.add("password_2", "Ensure this field has at least 8 characters.");
    errors.add_non_field("Provided passwords are not the same.");

    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "non_field_errors": ["Provided passwords are not the same."],
            "password_1": ["Ensure this field has at least 8 characters."],
            "password_2": ["Ensure this field has at least 8 characters."],
        })
    );
}

#[test]
fn test_field_errors_accumulate_per_field() {
    let mut errors = FieldErrors::new();
    errors.add("email", "first");
    errors.add("email", "second");

    assert_eq!(errors.get("email"), ["first", "second"]);
    assert!(errors.get("username").is_empty());
    assert!(!errors.contains(NON_FIELD_ERRORS));
}

#[test]
fn test_into_result() {
    assert!(FieldErrors::new().into_result().is_ok());

    let mut errors = FieldErrors::new();
    errors.add("name", "This field is required.");
    let err = errors.into_result().unwrap_err();
    assert!(err.contains("name"));
}

#[test]
fn test_domain_error_conversions() {
    let err: DomainError = AuthError::InvalidApiKey.into();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidApiKey)));

    let err: DomainError = TokenError::TokenRevoked.into();
    assert!(matches!(err, DomainError::Token(TokenError::TokenRevoked)));

    let err = DomainError::field("name", "This field is required.");
    match err {
        DomainError::Validation(errors) => assert_eq!(errors.get("name"), ["This field is required."]),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_display_includes_fields() {
    let err = DomainError::field("currency", "Invalid pk \"99\" - object does not exist.");
    assert!(err.to_string().contains("currency"));
}
