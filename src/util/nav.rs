//! Navigation outside the router's reactive scope.

use leptos_router::NavigateOptions;

/// Full-page navigation via `window.location`, usable from event handlers
/// and spawned tasks where `use_navigate` is unavailable. Signature matches
/// the router's navigate closure so the two are interchangeable.
pub fn hard_navigate(to: &str, _options: NavigateOptions) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(to);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = to;
    }
}
