use super::*;

// =============================================================
// Message helpers
// =============================================================

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn request_failed_message_includes_status() {
    assert_eq!(request_failed_message("get prediction", 500), "get prediction failed: 500");
}

// =============================================================
// error_message_from_body
// =============================================================

#[test]
fn error_body_prefers_detail() {
    let body = serde_json::json!({"detail": "No active account found", "email": ["ignored"]});
    assert_eq!(error_message_from_body(&body).as_deref(), Some("No active account found"));
}

#[test]
fn error_body_joins_field_errors_per_line() {
    let body = serde_json::json!({
        "email": ["user with this email already exists.", "Enter a valid email."],
    });
    assert_eq!(
        error_message_from_body(&body).as_deref(),
        Some("user with this email already exists., Enter a valid email.")
    );

    let body = serde_json::json!({"email": ["taken"], "password": "too short"});
    let message = error_message_from_body(&body).unwrap();
    assert_eq!(message.lines().count(), 2);
    assert!(message.contains("taken"));
    assert!(message.contains("too short"));
}

#[test]
fn error_body_without_messages_yields_none() {
    assert_eq!(error_message_from_body(&serde_json::Value::Null), None);
    assert_eq!(error_message_from_body(&serde_json::json!({})), None);
    assert_eq!(error_message_from_body(&serde_json::json!({"detail": "  "})), None);
    assert_eq!(error_message_from_body(&serde_json::json!("plain text")), None);
}

#[test]
fn error_body_with_only_blank_messages_yields_none() {
    assert_eq!(error_message_from_body(&serde_json::json!({"detail": "  ", "email": " "})), None);
    assert_eq!(error_message_from_body(&serde_json::json!({"password": ["", "  "]})), None);
    assert_eq!(
        error_message_from_body(&serde_json::json!({"detail": " ", "email": ["taken"]})).as_deref(),
        Some("taken")
    );
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_are_same_origin_paths() {
    for endpoint in [
        LOGIN_ENDPOINT,
        REGISTER_ENDPOINT,
        PREDICT_PRICE_ENDPOINT,
        SUGGEST_CAR_ENDPOINT,
        CAR_NAMES_ENDPOINT,
        CAR_MODELS_ENDPOINT,
        CAR_SEARCH_ENDPOINT,
    ] {
        assert!(endpoint.starts_with("/user/") || endpoint.starts_with("/cars/"), "{endpoint}");
    }
}
