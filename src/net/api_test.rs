use super::*;

// =============================================================
// URL building
// =============================================================

#[test]
fn request_url_concatenates_base_and_path() {
    assert_eq!(
        request_url("https://api.example.com", "/api/services"),
        "https://api.example.com/api/services"
    );
}

#[test]
fn request_url_empty_base_yields_relative_path() {
    assert_eq!(request_url("", "/api/services"), "/api/services");
}

// =============================================================
// Content-type detection
// =============================================================

#[test]
fn json_content_type_detected_with_charset_suffix() {
    assert!(is_json_content_type(Some("application/json; charset=utf-8")));
}

#[test]
fn text_content_type_is_not_json() {
    assert!(!is_json_content_type(Some("text/plain")));
    assert!(!is_json_content_type(None));
}

// =============================================================
// Error message derivation
// =============================================================

#[test]
fn detail_field_read_from_error_body() {
    let body = serde_json::json!({"detail": "Booking not found"});
    assert_eq!(extract_detail(&body).as_deref(), Some("Booking not found"));
}

#[test]
fn detail_absent_when_not_a_string() {
    assert_eq!(extract_detail(&serde_json::json!({"detail": 5})), None);
    assert_eq!(extract_detail(&serde_json::json!({})), None);
}

#[test]
fn failure_message_prefers_structured_detail() {
    assert_eq!(
        failure_message(Some("No such service".to_owned()), "Not Found", 404),
        "No such service"
    );
}

#[test]
fn failure_message_falls_back_to_status_text() {
    assert_eq!(failure_message(None, "Not Found", 404), "Not Found");
    assert_eq!(failure_message(Some(String::new()), "Not Found", 404), "Not Found");
}

#[test]
fn failure_message_last_resort_is_status_code() {
    assert_eq!(failure_message(None, "", 502), "Request failed: 502");
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn status_error_displays_its_message() {
    let err = ApiError::Status {
        status: 403,
        message: "Forbidden".to_owned(),
    };
    assert_eq!(err.to_string(), "Forbidden");
}

#[test]
fn network_error_display_includes_cause() {
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
}
