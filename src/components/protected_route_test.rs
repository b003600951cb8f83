use super::*;
use crate::net::types::Principal;

fn principal() -> Principal {
    Principal {
        uid: "u1".to_owned(),
        email: "a@b.com".to_owned(),
    }
}

// =============================================================
// Loading window
// =============================================================

#[test]
fn loading_shows_spinner_regardless_of_requirement() {
    let state = AuthState {
        user: Some(principal()),
        is_admin: false,
        loading: true,
    };
    assert_eq!(evaluate_guard(&state, true), GuardOutcome::Loading);
    assert_eq!(evaluate_guard(&state, false), GuardOutcome::Loading);
}

#[test]
fn loading_with_no_user_still_decides_nothing() {
    let state = AuthState {
        user: None,
        is_admin: false,
        loading: true,
    };
    assert_eq!(evaluate_guard(&state, false), GuardOutcome::Loading);
}

// =============================================================
// Settled decisions
// =============================================================

#[test]
fn absent_principal_redirects_to_login() {
    let state = AuthState {
        user: None,
        is_admin: false,
        loading: false,
    };
    assert_eq!(evaluate_guard(&state, false), GuardOutcome::RedirectToLogin);
}

#[test]
fn absent_principal_redirects_to_login_even_on_admin_routes() {
    let state = AuthState {
        user: None,
        is_admin: false,
        loading: false,
    };
    assert_eq!(evaluate_guard(&state, true), GuardOutcome::RedirectToLogin);
}

#[test]
fn non_admin_on_admin_route_redirects_to_services() {
    let state = AuthState {
        user: Some(principal()),
        is_admin: false,
        loading: false,
    };
    assert_eq!(evaluate_guard(&state, true), GuardOutcome::RedirectToServices);
}

#[test]
fn authenticated_user_renders_ordinary_route() {
    let state = AuthState {
        user: Some(principal()),
        is_admin: false,
        loading: false,
    };
    assert_eq!(evaluate_guard(&state, false), GuardOutcome::Render);
}

#[test]
fn admin_renders_admin_route() {
    let state = AuthState {
        user: Some(principal()),
        is_admin: true,
        loading: false,
    };
    assert_eq!(evaluate_guard(&state, true), GuardOutcome::Render);
}
