use super::*;

// =============================================================
// Service
// =============================================================

#[test]
fn service_deserializes_with_missing_optional_fields() {
    let svc: Service =
        serde_json::from_str(r#"{"id":"s1","title":"Plumbing"}"#).expect("valid service");
    assert_eq!(svc.id, "s1");
    assert_eq!(svc.title, "Plumbing");
    assert!(svc.description.is_empty());
    assert!(svc.image.is_none());
    assert!((svc.price - 0.0).abs() < f64::EPSILON);
}

// =============================================================
// Booking
// =============================================================

#[test]
fn booking_status_defaults_to_pending() {
    let booking: Booking =
        serde_json::from_str(r#"{"id":"b1","service_id":"s1"}"#).expect("valid booking");
    assert_eq!(booking.status, "pending");
    assert!(booking.user_email.is_none());
}

#[test]
fn booking_round_trips_full_record() {
    let json = r#"{"id":"b1","service_id":"s1","service_title":"Plumbing",
        "date":"2026-09-01","time":"14:30","status":"confirmed",
        "user_email":"a@b.com"}"#;
    let booking: Booking = serde_json::from_str(json).expect("valid booking");
    assert_eq!(booking.time, "14:30");
    assert_eq!(booking.status, "confirmed");
    assert_eq!(booking.user_email.as_deref(), Some("a@b.com"));
}

// =============================================================
// UserProfile / AdminUser
// =============================================================

#[test]
fn user_profile_defaults_are_all_absent() {
    let profile: UserProfile = serde_json::from_str("{}").expect("valid profile");
    assert_eq!(profile, UserProfile::default());
}

#[test]
fn admin_user_role_defaults_to_user() {
    let user: AdminUser =
        serde_json::from_str(r#"{"uid":"u1","email":"a@b.com"}"#).expect("valid user");
    assert_eq!(user.role, "user");
}
