use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn sign_in_endpoint_carries_api_key() {
    assert_eq!(
        sign_in_endpoint("k123"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=k123"
    );
}

#[test]
fn sign_up_endpoint_carries_api_key() {
    assert_eq!(
        sign_up_endpoint("k123"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=k123"
    );
}

#[test]
fn refresh_endpoint_targets_secure_token_service() {
    assert_eq!(
        refresh_endpoint("k"),
        "https://securetoken.googleapis.com/v1/token?key=k"
    );
}

#[test]
fn refresh_body_is_form_encoded() {
    assert_eq!(
        refresh_body("rt-1"),
        "grant_type=refresh_token&refresh_token=rt-1"
    );
}

// =============================================================
// Expiry bookkeeping
// =============================================================

#[test]
fn token_expired_within_margin() {
    // 30s left is inside the 60s refresh margin.
    assert!(is_expired(1_000_000.0, 1_030_000.0));
}

#[test]
fn token_fresh_outside_margin() {
    assert!(!is_expired(1_000_000.0, 1_061_000.0));
}

#[test]
fn expires_at_converts_seconds_string() {
    let at = expires_at(10_000.0, "3600");
    assert!((at - 3_610_000.0).abs() < f64::EPSILON);
}

#[test]
fn expires_at_tolerates_garbage_field() {
    // Unparseable expiry collapses to "already expired" rather than panicking.
    let at = expires_at(10_000.0, "soon");
    assert!((at - 10_000.0).abs() < f64::EPSILON);
    assert!(is_expired(10_000.0, at));
}

// =============================================================
// Provider errors
// =============================================================

#[test]
fn error_code_extracted_from_error_body() {
    let body = serde_json::json!({"error": {"message": "INVALID_PASSWORD", "code": 400}});
    assert_eq!(error_code(&body), Some("INVALID_PASSWORD"));
}

#[test]
fn error_code_absent_from_empty_body() {
    assert_eq!(error_code(&serde_json::Value::Null), None);
}

#[test]
fn invalid_credentials_share_one_message() {
    let expected = "Invalid email or password.";
    assert_eq!(provider_error_message("EMAIL_NOT_FOUND"), expected);
    assert_eq!(provider_error_message("INVALID_PASSWORD"), expected);
    assert_eq!(provider_error_message("INVALID_LOGIN_CREDENTIALS"), expected);
}

#[test]
fn weak_password_matches_with_trailing_explanation() {
    assert_eq!(
        provider_error_message("WEAK_PASSWORD : Password should be at least 6 characters"),
        "Password should be at least 6 characters."
    );
}

#[test]
fn unknown_code_is_echoed_in_fallback_message() {
    assert_eq!(
        provider_error_message("OPERATION_NOT_ALLOWED"),
        "Authentication failed (OPERATION_NOT_ALLOWED)."
    );
}

// =============================================================
// StoredSession
// =============================================================

#[test]
fn stored_session_round_trips_through_json() {
    let session = StoredSession {
        uid: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        id_token: "id".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_at_ms: 42.0,
    };
    let raw = serde_json::to_string(&session).expect("serializes");
    let back: StoredSession = serde_json::from_str(&raw).expect("deserializes");
    assert_eq!(back.uid, "u1");
    assert_eq!(back.refresh_token, "rt");
}
