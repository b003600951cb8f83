//! Compile-time configuration.
//!
//! The WASM bundle has no runtime environment, so deployment values are baked
//! in at build time via `option_env!`, matching the build-env convention of
//! the hosted deployments.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the REST API gateway. Empty means same-origin relative paths.
pub fn api_base() -> &'static str {
    option_env!("QUICKSERVE_API_BASE").unwrap_or("")
}

/// Firebase project id used to address Firestore documents.
pub fn firebase_project() -> &'static str {
    option_env!("QUICKSERVE_FIREBASE_PROJECT").unwrap_or("quickserve-demo")
}

/// Identity Toolkit web API key.
pub fn firebase_api_key() -> &'static str {
    option_env!("QUICKSERVE_FIREBASE_API_KEY").unwrap_or("")
}
