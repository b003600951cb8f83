use super::*;
use crate::net::types::Principal;

fn admin_state() -> AuthState {
    AuthState {
        user: Some(Principal {
            uid: "u1".to_owned(),
            email: "a@b.com".to_owned(),
        }),
        is_admin: true,
        loading: false,
    }
}

#[test]
fn admin_on_bookings_is_sent_to_admin_home() {
    assert_eq!(admin_redirect_target(&admin_state(), "/bookings"), Some("/admin"));
}

#[test]
fn every_intercepted_route_redirects() {
    let state = admin_state();
    for path in ["/", "/login", "/register", "/services", "/bookings", "/profile"] {
        assert_eq!(admin_redirect_target(&state, path), Some("/admin"), "{path}");
    }
}

#[test]
fn admin_sub_routes_are_never_intercepted() {
    let state = admin_state();
    assert_eq!(admin_redirect_target(&state, "/admin/services"), None);
    assert_eq!(admin_redirect_target(&state, "/admin"), None);
}

#[test]
fn unknown_paths_are_never_intercepted() {
    assert_eq!(admin_redirect_target(&admin_state(), "/no-such-page"), None);
}

#[test]
fn no_action_while_loading() {
    let mut state = admin_state();
    state.loading = true;
    assert_eq!(admin_redirect_target(&state, "/bookings"), None);
}

#[test]
fn no_action_for_non_admin_principal() {
    let mut state = admin_state();
    state.is_admin = false;
    assert_eq!(admin_redirect_target(&state, "/bookings"), None);
}

#[test]
fn no_action_when_signed_out() {
    let state = AuthState {
        user: None,
        is_admin: false,
        loading: false,
    };
    assert_eq!(admin_redirect_target(&state, "/"), None);
}
