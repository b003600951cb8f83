//! Auth-session state and actions for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RwSignal<AuthState>` is provided from the application root and read by
//! route guards, the navbar, and pages. All mutation funnels through
//! `commit_session` so consumers observe serialized session changes: the
//! principal is replaced first, then its role resolves, then the initial
//! `loading` window closes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use serde_json::{Map, Value};

use crate::net::types::Principal;
use crate::net::{firestore, identity};
use crate::state::toast::ToastState;

/// Session state shared across the component tree.
#[derive(Clone, Debug)]
pub struct AuthState {
    /// Current principal; absent when signed out.
    pub user: Option<Principal>,
    /// Meaningful only while `user` is present; always false otherwise.
    pub is_admin: bool,
    /// True only between mount and the first committed session change.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_admin: false,
            loading: true,
        }
    }
}

/// Whether a role string grants admin privilege.
pub fn role_is_admin(role: Option<&str>) -> bool {
    role == Some("admin")
}

/// Whether a role resolved for `resolved_for` may still be committed.
///
/// Role fetches are tagged with the uid they were issued for; a result whose
/// principal is no longer current is discarded rather than applying a stale
/// role to a different user.
fn should_commit_role(current_uid: Option<&str>, resolved_for: &str) -> bool {
    current_uid == Some(resolved_for)
}

/// Resolve the admin flag for a principal id.
///
/// Fails closed: a missing role record and a failed lookup both mean
/// "not admin". Lookup failures are logged, never surfaced.
pub async fn check_admin_status(uid: &str) -> bool {
    match firestore::fetch_role(uid).await {
        Ok(role) => role_is_admin(role.as_deref()),
        Err(err) => {
            log::warn!("role lookup failed for {uid}: {err}");
            false
        }
    }
}

/// Commit a session-change event: replace the principal, resolve its role,
/// and close the initial loading window. Returns the resolved admin flag.
pub async fn commit_session(auth: RwSignal<AuthState>, principal: Option<Principal>) -> bool {
    let uid = principal.as_ref().map(|p| p.uid.clone());
    auth.update(|state| {
        state.user = principal;
        if state.user.is_none() {
            state.is_admin = false;
        }
    });

    let mut admin = false;
    if let Some(uid) = uid {
        admin = check_admin_status(&uid).await;
        let still_current = auth.with_untracked(|state| {
            should_commit_role(state.user.as_ref().map(|u| u.uid.as_str()), &uid)
        });
        if still_current {
            auth.update(|state| state.is_admin = admin);
        }
    }
    auth.update(|state| state.loading = false);
    admin
}

/// First session-change event: restore any persisted session on mount and
/// settle the initial `loading` window.
pub async fn restore_session(auth: RwSignal<AuthState>) {
    let principal = identity::restore().await;
    commit_session(auth, principal).await;
}

/// Sign in with email + password.
///
/// On success the admin flag for the new principal is resolved and returned,
/// and a success toast is emitted. On failure the provider's message goes to
/// an error toast and the error propagates.
pub async fn sign_in(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    email: &str,
    password: &str,
) -> Result<bool, String> {
    match identity::sign_in(email, password).await {
        Ok(principal) => {
            let admin = commit_session(auth, Some(principal)).await;
            toasts.update(|t| {
                t.success("Welcome back!", "Signed in successfully.");
            });
            Ok(admin)
        }
        Err(message) => {
            toasts.update(|t| {
                t.error("Error signing in", &message);
            });
            Err(message)
        }
    }
}

/// Create an account, then best-effort persist `metadata` to the new
/// principal's profile document.
///
/// A rejected profile write is logged and suppressed; only account creation
/// itself can fail the sign-up. A success toast is emitted unless `silent`.
pub async fn sign_up(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    email: &str,
    password: &str,
    metadata: Map<String, Value>,
    silent: bool,
) -> Result<(), String> {
    match identity::sign_up(email, password).await {
        Ok(principal) => {
            complete_sign_up(auth, toasts, principal, metadata, silent, |uid, fields| async move {
                firestore::merge_profile(&uid, &fields).await
            })
            .await;
            Ok(())
        }
        Err(message) => {
            toasts.update(|t| {
                t.error("Error signing up", &message);
            });
            Err(message)
        }
    }
}

/// Commit a freshly created account: best-effort profile write, session
/// commit, success toast unless `silent`.
///
/// The profile writer is a parameter (like `navigate` in `sign_out`); its
/// rejection is logged and suppressed, never failing the sign-up.
async fn complete_sign_up<W, Fut>(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    principal: Principal,
    metadata: Map<String, Value>,
    silent: bool,
    write_profile: W,
) where
    W: FnOnce(String, Map<String, Value>) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    if !metadata.is_empty() {
        if let Err(err) = write_profile(principal.uid.clone(), metadata).await {
            log::warn!("profile save failed (non-fatal): {err}");
        }
    }
    commit_session(auth, Some(principal)).await;
    if !silent {
        toasts.update(|t| {
            t.success("Account created!", "Welcome aboard.");
        });
    }
}

/// Terminate the session, reset the admin flag, navigate home, and confirm
/// with a toast. Idempotent when already signed out.
pub async fn sign_out<F>(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    navigate: F,
) -> Result<(), String>
where
    F: Fn(&str, NavigateOptions),
{
    identity::sign_out()?;
    commit_session(auth, None).await;
    navigate("/", NavigateOptions::default());
    toasts.update(|t| {
        t.success("Signed out", "You have been signed out successfully");
    });
    Ok(())
}

/// Bearer token for the current principal, or `None` when signed out or on
/// any retrieval failure. Never errors.
pub async fn get_id_token() -> Option<String> {
    identity::id_token().await
}
