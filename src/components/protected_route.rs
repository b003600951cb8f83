//! Access-control wrapper gating route rendering by session state.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// What the guard does for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session not settled yet: show the spinner, decide nothing. Avoids a
    /// flash redirect during provider initialization.
    Loading,
    /// No principal: go sign in.
    RedirectToLogin,
    /// Authenticated but not admin on an admin-only view.
    RedirectToServices,
    /// Render the wrapped content.
    Render,
}

/// Pure guard decision for the current state and route requirement.
pub fn evaluate_guard(state: &AuthState, require_admin: bool) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Loading;
    }
    if state.user.is_none() {
        return GuardOutcome::RedirectToLogin;
    }
    if require_admin && !state.is_admin {
        return GuardOutcome::RedirectToServices;
    }
    GuardOutcome::Render
}

/// Gate rendering of the wrapped view on the session state, with an optional
/// admin requirement. Never renders content on the same pass that redirects.
#[component]
pub fn ProtectedRoute(
    #[prop(optional)] require_admin: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Navigation is an effect of committed state, not a render-time value;
    // it re-runs only when the auth signal changes.
    Effect::new(move || match evaluate_guard(&auth.get(), require_admin) {
        GuardOutcome::RedirectToLogin => navigate("/login", NavigateOptions::default()),
        GuardOutcome::RedirectToServices => navigate("/services", NavigateOptions::default()),
        GuardOutcome::Loading | GuardOutcome::Render => {}
    });

    view! {
        {move || match evaluate_guard(&auth.get(), require_admin) {
            GuardOutcome::Loading => view! {
                <div class="page-loading">
                    <div class="spinner" aria-label="Loading"></div>
                </div>
            }
            .into_any(),
            GuardOutcome::Render => children().into_any(),
            GuardOutcome::RedirectToLogin | GuardOutcome::RedirectToServices => ().into_any(),
        }}
    }
}
