//! Admin dashboard with aggregate counts over the document store.
//!
//! Counts are polled on an interval; the REST surface has no snapshot
//! listeners. Polling stops when the page unmounts.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::DashboardStats;

#[cfg(feature = "csr")]
const POLL_INTERVAL_MS: u32 = 15_000;

#[cfg(feature = "csr")]
async fn count_or_zero(collection: &str, filter: Option<(&str, &str)>) -> u64 {
    match crate::net::firestore::count_documents(collection, filter).await {
        Ok(count) => count,
        Err(err) => {
            log::warn!("count query failed for {collection}: {err}");
            0
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch_stats() -> DashboardStats {
    DashboardStats {
        total_users: count_or_zero("user_profiles", None).await,
        total_services: count_or_zero("services", None).await,
        total_bookings: count_or_zero("bookings", None).await,
        pending_bookings: count_or_zero("bookings", Some(("status", "pending"))).await,
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stats = RwSignal::new(DashboardStats::default());

    #[cfg(feature = "csr")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        let stopped = Rc::new(Cell::new(false));
        let flag = stopped.clone();
        on_cleanup(move || flag.set(true));
        leptos::task::spawn_local(async move {
            loop {
                if stopped.get() {
                    break;
                }
                stats.set(fetch_stats().await);
                gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
            }
        });
    }

    let cards = move || {
        let current = stats.get();
        [
            ("Total Users", current.total_users),
            ("Total Services", current.total_services),
            ("Total Bookings", current.total_bookings),
            ("Pending Bookings", current.pending_bookings),
        ]
    };

    view! {
        <AdminLayout>
            <h1>"Dashboard"</h1>
            <p class="admin-page__subtitle">"Overview of your booking system"</p>
            <div class="stat-grid">
                {move || {
                    cards()
                        .into_iter()
                        .map(|(title, value)| {
                            view! {
                                <div class="stat-card">
                                    <span class="stat-card__title">{title}</span>
                                    <span class="stat-card__value">{value}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </AdminLayout>
    }
}
