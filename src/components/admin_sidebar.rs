//! Admin panel navigation sidebar.

#[cfg(test)]
#[path = "admin_sidebar_test.rs"]
mod admin_sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Label/path pairs in display order.
const NAV_ITEMS: [(&str, &str); 4] = [
    ("Dashboard", "/admin"),
    ("Services", "/admin/services"),
    ("Bookings", "/admin/bookings"),
    ("Users", "/admin/users"),
];

/// Whether a nav item is highlighted for the current path. Exact match only:
/// `/admin` must not light up while viewing `/admin/services`.
fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
}

#[component]
pub fn AdminSidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pathname = use_location().pathname;

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
        <aside class="admin-sidebar">
            <div class="admin-sidebar__header">
                <img class="admin-sidebar__logo" src="/logo.svg" alt="QuickServe logo"/>
                <div>
                    <span class="admin-sidebar__brand">"QuickServe"</span>
                    <p class="admin-sidebar__subtitle">"Admin Panel"</p>
                </div>
            </div>

            <nav class="admin-sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, path)| {
                        let class = move || {
                            if is_active(&pathname.get(), path) {
                                "admin-sidebar__link admin-sidebar__link--active"
                            } else {
                                "admin-sidebar__link"
                            }
                        };
                        view! {
                            <a class=class href=path>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="admin-sidebar__footer">
                <button class="btn btn--outline btn--block" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
