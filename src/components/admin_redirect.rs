//! Policy steering authenticated admins away from ordinary-user routes.
//!
//! Runs unconditionally at the application root: unlike the route guard it
//! must also fire on the public home route, which is never wrapped.

#[cfg(test)]
#[path = "admin_redirect_test.rs"]
mod admin_redirect_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;

/// Ordinary-user routes an admin is steered away from. Admin sub-routes and
/// the not-found fallback are never intercepted.
const NON_ADMIN_ROUTES: [&str; 6] = [
    "/",
    "/login",
    "/register",
    "/services",
    "/bookings",
    "/profile",
];

/// Where to send the session for the current path, if anywhere.
pub fn admin_redirect_target(state: &AuthState, path: &str) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    if state.user.is_some() && state.is_admin && NON_ADMIN_ROUTES.contains(&path) {
        Some("/admin")
    } else {
        None
    }
}

/// Renders nothing; replace-navigates signed-in admins to the admin home
/// whenever they land on one of the intercepted routes.
#[component]
pub fn AdminRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        let path = location.pathname.get();
        if let Some(target) = admin_redirect_target(&state, &path) {
            // Replace, not push: back-navigation must not return to the
            // disallowed route.
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
}
