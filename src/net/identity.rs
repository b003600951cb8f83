//! Identity Toolkit session management.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` against the Firebase
//! Identity Toolkit and secure-token endpoints, with the session material
//! persisted to `localStorage` so a reload restores the signed-in principal.
//! Native builds get stubs returning `None`/error.
//!
//! ERROR HANDLING
//! ==============
//! Sign-in/sign-up surface the provider's error code mapped to a
//! human-readable message. Token retrieval never errors; any failure yields
//! `None` so callers degrade to unauthenticated requests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::net::types::Principal;
#[cfg(feature = "csr")]
use serde::Deserialize;
use serde::Serialize;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "quickserve_session";

/// Refresh this long before nominal expiry so a token never dies mid-request.
#[cfg(any(test, feature = "csr"))]
const EXPIRY_MARGIN_MS: f64 = 60_000.0;

/// Session material held for the signed-in principal.
#[derive(Clone, Debug, Serialize, serde::Deserialize)]
pub struct StoredSession {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    /// Wall-clock expiry of `id_token`, milliseconds since the Unix epoch.
    pub expires_at_ms: f64,
}

#[cfg(feature = "csr")]
thread_local! {
    static SESSION: std::cell::RefCell<Option<StoredSession>> =
        const { std::cell::RefCell::new(None) };
}

#[cfg(any(test, feature = "csr"))]
fn sign_in_endpoint(api_key: &str) -> String {
    format!("https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key={api_key}")
}

#[cfg(any(test, feature = "csr"))]
fn sign_up_endpoint(api_key: &str) -> String {
    format!("https://identitytoolkit.googleapis.com/v1/accounts:signUp?key={api_key}")
}

#[cfg(any(test, feature = "csr"))]
fn refresh_endpoint(api_key: &str) -> String {
    format!("https://securetoken.googleapis.com/v1/token?key={api_key}")
}

#[cfg(any(test, feature = "csr"))]
fn refresh_body(refresh_token: &str) -> String {
    format!("grant_type=refresh_token&refresh_token={refresh_token}")
}

/// Whether a token with the given expiry should be refreshed now.
#[cfg(any(test, feature = "csr"))]
fn is_expired(now_ms: f64, expires_at_ms: f64) -> bool {
    now_ms + EXPIRY_MARGIN_MS >= expires_at_ms
}

/// Absolute expiry for an `expiresIn` seconds-as-string provider field.
#[cfg(any(test, feature = "csr"))]
fn expires_at(now_ms: f64, expires_in_s: &str) -> f64 {
    now_ms + expires_in_s.parse::<f64>().unwrap_or(0.0) * 1000.0
}

/// Extract the provider error code from an Identity Toolkit error body.
#[cfg(any(test, feature = "csr"))]
fn error_code(body: &serde_json::Value) -> Option<&str> {
    body.get("error")?.get("message")?.as_str()
}

/// Map a provider error code to the message shown to the user.
///
/// Codes occasionally carry a trailing explanation
/// (`WEAK_PASSWORD : Password should be...`), so match on prefixes.
#[cfg(any(test, feature = "csr"))]
fn provider_error_message(code: &str) -> String {
    if code.starts_with("WEAK_PASSWORD") {
        return "Password should be at least 6 characters.".to_owned();
    }
    if code.starts_with("TOO_MANY_ATTEMPTS_TRY_LATER") {
        return "Too many attempts. Try again later.".to_owned();
    }
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Invalid email or password.".to_owned()
        }
        "EMAIL_EXISTS" => "An account with this email already exists.".to_owned(),
        "INVALID_EMAIL" => "Enter a valid email address.".to_owned(),
        "USER_DISABLED" => "This account has been disabled.".to_owned(),
        other => format!("Authentication failed ({other})."),
    }
}

#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
    #[serde(rename = "idToken")]
    id_token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
    #[serde(rename = "expiresIn")]
    expires_in: String,
}

#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    user_id: String,
    expires_in: String,
}

#[cfg(feature = "csr")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "csr")]
fn load_session() -> Option<StoredSession> {
    if let Some(session) = SESSION.with(|cell| cell.borrow().clone()) {
        return Some(session);
    }
    let raw = storage()?.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

#[cfg(feature = "csr")]
fn save_session(session: &StoredSession) {
    SESSION.with(|cell| *cell.borrow_mut() = Some(session.clone()));
    if let Some(store) = storage() {
        if let Ok(raw) = serde_json::to_string(session) {
            let _ = store.set_item(STORAGE_KEY, &raw);
        }
    }
}

#[cfg(feature = "csr")]
fn clear_session() {
    SESSION.with(|cell| cell.borrow_mut().take());
    if let Some(store) = storage() {
        let _ = store.remove_item(STORAGE_KEY);
    }
}

#[cfg(feature = "csr")]
async fn password_request(endpoint: &str, email: &str, password: &str) -> Result<Principal, String> {
    let payload = serde_json::json!({
        "email": email,
        "password": password,
        "returnSecureToken": true,
    });
    let resp = gloo_net::http::Request::post(endpoint)
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let body: serde_json::Value = resp.json().await.unwrap_or_default();
        return Err(provider_error_message(error_code(&body).unwrap_or("UNKNOWN")));
    }
    let body: AuthResponse = resp.json().await.map_err(|e| e.to_string())?;
    let session = StoredSession {
        uid: body.local_id,
        email: body.email,
        id_token: body.id_token,
        refresh_token: body.refresh_token,
        expires_at_ms: expires_at(now_ms(), &body.expires_in),
    };
    save_session(&session);
    Ok(Principal {
        uid: session.uid,
        email: session.email,
    })
}

/// Exchange the refresh token for fresh session material.
///
/// Rotates both tokens and persists the result; failure leaves the stored
/// session untouched for the caller to decide on.
#[cfg(feature = "csr")]
async fn refresh(stored: StoredSession) -> Result<StoredSession, String> {
    let resp = gloo_net::http::Request::post(&refresh_endpoint(crate::config::firebase_api_key()))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(refresh_body(&stored.refresh_token))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("token refresh failed: {}", resp.status()));
    }
    let body: RefreshResponse = resp.json().await.map_err(|e| e.to_string())?;
    let session = StoredSession {
        uid: body.user_id,
        email: stored.email,
        id_token: body.id_token,
        refresh_token: body.refresh_token,
        expires_at_ms: expires_at(now_ms(), &body.expires_in),
    };
    save_session(&session);
    Ok(session)
}

/// Sign in with email + password. Returns the new principal on success or a
/// human-readable provider message otherwise.
pub async fn sign_in(email: &str, password: &str) -> Result<Principal, String> {
    #[cfg(feature = "csr")]
    {
        password_request(
            &sign_in_endpoint(crate::config::firebase_api_key()),
            email,
            password,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Create a new account with email + password and start its session.
pub async fn sign_up(email: &str, password: &str) -> Result<Principal, String> {
    #[cfg(feature = "csr")]
    {
        password_request(
            &sign_up_endpoint(crate::config::firebase_api_key()),
            email,
            password,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Terminate the local session. The REST surface holds no server-side session
/// state, so this is local-only and idempotent; the `Result` keeps the caller
/// contract uniform with the other auth operations.
pub fn sign_out() -> Result<(), String> {
    #[cfg(feature = "csr")]
    clear_session();
    Ok(())
}

/// Restore a persisted session, validating it with a token refresh.
///
/// Returns the restored principal, or `None` when no session is stored or the
/// stored refresh token is no longer accepted (in which case the stale
/// session is cleared).
pub async fn restore() -> Option<Principal> {
    #[cfg(feature = "csr")]
    {
        let stored = load_session()?;
        match refresh(stored).await {
            Ok(fresh) => Some(Principal {
                uid: fresh.uid,
                email: fresh.email,
            }),
            Err(err) => {
                log::warn!("session restore failed: {err}");
                clear_session();
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Current bearer token for the signed-in principal, refreshed when close to
/// expiry. `None` when signed out or on any retrieval failure; never errors.
pub async fn id_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let stored = load_session()?;
        if !is_expired(now_ms(), stored.expires_at_ms) {
            return Some(stored.id_token);
        }
        match refresh(stored).await {
            Ok(fresh) => Some(fresh.id_token),
            Err(err) => {
                log::warn!("token refresh failed: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
