//! Top navigation bar shown on all non-admin pages.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Site-wide navigation: brand link, section links conditioned on the
/// session, and login/signup or logout actions.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let signed_in = move || auth.get().user.is_some();
    let is_admin = move || auth.get().is_admin;

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(err) =
                crate::state::auth::sign_out(auth, toasts, crate::util::nav::hard_navigate).await
            {
                log::warn!("sign-out failed: {err}");
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (auth, toasts);
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <img class="navbar__logo" src="/logo.svg" alt="QuickServe logo"/>
                <span class="navbar__title">"QuickServe"</span>
            </a>

            <div class="navbar__links">
                <a class="navbar__link" href="/">"Home"</a>
                <a class="navbar__link" href="/services">"Services"</a>
                <Show when=signed_in>
                    <a class="navbar__link" href="/bookings">"My Bookings"</a>
                    <a class="navbar__link" href="/profile">"Profile"</a>
                    <Show when=is_admin>
                        <a class="navbar__link navbar__link--admin" href="/admin">"Admin"</a>
                    </Show>
                </Show>
            </div>

            <div class="navbar__actions">
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a class="btn btn--ghost" href="/login">"Login"</a>
                            <a class="btn btn--primary" href="/register">"Sign Up"</a>
                        }
                    }
                >
                    <button class="btn btn--outline" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
