use super::*;

// =============================================================
// from_status
// =============================================================

#[test]
fn from_status_maps_401_and_403_to_unauthorized() {
    let err = ApiError::from_status(401, r#"{"detail":"Invalid credentials"}"#);
    assert_eq!(err, ApiError::Unauthorized { status: 401, message: "Invalid credentials".to_owned() });

    let err = ApiError::from_status(403, "");
    assert!(matches!(err, ApiError::Unauthorized { status: 403, .. }));
}

#[test]
fn from_status_maps_404_to_not_found() {
    let err = ApiError::from_status(404, r#"{"detail":"Item not found"}"#);
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Item not found");
}

#[test]
fn from_status_keeps_other_statuses() {
    let err = ApiError::from_status(400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: "Email already registered".to_owned() });
}

#[test]
fn from_status_without_body_uses_status_message() {
    let err = ApiError::from_status(502, "<html>bad gateway</html>");
    assert_eq!(err.to_string(), "request failed: 502");
}

// =============================================================
// server_message
// =============================================================

#[test]
fn server_message_reads_message_field() {
    assert_eq!(server_message(r#"{"message":"Account locked"}"#), Some("Account locked".to_owned()));
}

#[test]
fn server_message_joins_validation_details() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"},{"msg":"field required"}]}"#;
    assert_eq!(
        server_message(body),
        Some("value is not a valid email address; field required".to_owned())
    );
}

#[test]
fn server_message_ignores_blank_detail() {
    assert_eq!(server_message(r#"{"detail":"  "}"#), None);
}

// =============================================================
// user_message
// =============================================================

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::from_status(401, r#"{"detail":"Invalid credentials"}"#);
    assert_eq!(err.user_message("Failed to login"), "Invalid credentials");
}

#[test]
fn user_message_falls_back_for_transport_errors() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("Failed to login"), "Failed to login");
}

#[test]
fn user_message_falls_back_for_bare_status() {
    let err = ApiError::from_status(500, "");
    assert_eq!(err.user_message("Failed to sign up"), "Failed to sign up");
}
