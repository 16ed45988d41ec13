//! Unit tests for domain error types

use medrep_domain::{Error, FieldErrors, LoginError};

#[test]
fn test_network_error() {
    let error = Error::network("connection refused");
    match error {
        Error::Network { message, source } => {
            assert_eq!(message, "connection refused");
            assert!(source.is_none());
        }
        _ => panic!("Expected Network error"),
    }
}

#[test]
fn test_storage_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::storage_with_source("Failed to write session file", io);
    let display_str = format!("{error}");
    assert!(display_str.contains("Failed to write session file"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_unauthorized_classification() {
    assert!(Error::unauthorized("expired").is_unauthorized());
    assert!(!Error::network("down").is_unauthorized());
    assert!(Error::network("down").is_network());
    assert!(
        Error::Server {
            status: 502,
            message: "bad gateway".to_string()
        }
        .is_network()
    );
}

#[test]
fn test_login_error_from_unauthorized() {
    let error: LoginError = Error::unauthorized("Invalid credentials").into();
    assert_eq!(error.message, "Invalid credentials");

    let error: LoginError = Error::unauthorized("").into();
    assert_eq!(error.message, "Invalid email or password");
}

#[test]
fn test_login_error_from_network() {
    let error: LoginError = Error::network("timed out").into();
    assert_eq!(error.message, "Unable to reach the server. Please try again.");
}

#[test]
fn test_login_error_from_invalid_response() {
    let error: LoginError = Error::invalid_response("missing token").into();
    assert_eq!(error.message, "Invalid response from server");
}

#[test]
fn test_login_error_passes_through() {
    let error: LoginError = Error::Login(LoginError::new("Account locked")).into();
    assert_eq!(error, LoginError::new("Account locked"));
}

#[test]
fn test_validation_error_message() {
    let mut errors = FieldErrors::new();
    errors.add("email", "Email is required");
    let error = Error::Validation(errors);
    assert_eq!(error.user_message(), "email: Email is required");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: Error = io.into();
    assert!(matches!(error, Error::IoSimple { .. }));
}
