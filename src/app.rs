//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::admin_redirect::AdminRedirect;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toaster::Toaster;
use crate::pages::admin::bookings::AdminBookingsPage;
use crate::pages::admin::dashboard::AdminDashboardPage;
use crate::pages::admin::services::AdminServicesPage;
use crate::pages::admin::users::AdminUsersPage;
use crate::pages::bookings::BookingsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::services::ServicesPage;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the shared auth and toast contexts, restores any persisted
/// session (the first session-change event), and sets up client-side
/// routing. `AdminRedirect` runs at the root so it also covers the public
/// routes the guard never wraps.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::state::auth::restore_session(auth).await;
    });

    view! {
        <Stylesheet id="leptos" href="/quickserve.css"/>
        <Title text="QuickServe"/>

        <Router>
            <AdminRedirect/>
            <Toaster/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("services")
                    view=|| view! { <ProtectedRoute><ServicesPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("bookings")
                    view=|| view! { <ProtectedRoute><BookingsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <ProtectedRoute require_admin=true>
                                <AdminDashboardPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("services"))
                    view=|| {
                        view! {
                            <ProtectedRoute require_admin=true>
                                <AdminServicesPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("bookings"))
                    view=|| {
                        view! {
                            <ProtectedRoute require_admin=true>
                                <AdminBookingsPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=|| {
                        view! {
                            <ProtectedRoute require_admin=true>
                                <AdminUsersPage/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
