//! Admin booking management: list all bookings, move them through statuses.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::api;
use crate::net::types::Booking;
use crate::state::toast::ToastState;
use crate::util::format::format_time_12h;

async fn fetch_bookings() -> Result<Vec<Booking>, String> {
    api::get("/api/admin/bookings", true)
        .await
        .map_err(|e| e.to_string())
}

#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let bookings = LocalResource::new(fetch_bookings);

    let set_status = move |id: String, status: &'static str| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let body = serde_json::json!({"status": status});
            match api::patch::<serde_json::Value>(&format!("/api/admin/bookings/{id}"), &body, true)
                .await
            {
                Ok(_) => {
                    toasts.update(|t| {
                        t.success("Booking updated", &format!("Status set to {status}."));
                    });
                    bookings.refetch();
                }
                Err(err) => toasts.update(|t| {
                    t.error("Update failed", &err.to_string());
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, status, toasts, bookings);
        }
    };

    view! {
        <AdminLayout>
            <h1>"Bookings"</h1>
            <Suspense fallback=move || view! { <p class="page-loading__text">"Loading bookings..."</p> }>
                {move || {
                    bookings.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"Service"</th>
                                            <th>"User"</th>
                                            <th>"When"</th>
                                            <th>"Status"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|booking| {
                                                let confirm_id = booking.id.clone();
                                                let cancel_id = booking.id.clone();
                                                let pending = booking.status == "pending";
                                                view! {
                                                    <tr>
                                                        <td>{booking.service_title}</td>
                                                        <td>{booking.user_email.unwrap_or_default()}</td>
                                                        <td>
                                                            {booking.date} " " {format_time_12h(&booking.time)}
                                                        </td>
                                                        <td>{booking.status.clone()}</td>
                                                        <td>
                                                            <Show when=move || pending>
                                                                {
                                                                    let confirm_id = confirm_id.clone();
                                                                    view! {
                                                                        <button
                                                                            class="btn btn--primary"
                                                                            on:click=move |_| set_status(
                                                                                confirm_id.clone(),
                                                                                "confirmed",
                                                                            )
                                                                        >
                                                                            "Confirm"
                                                                        </button>
                                                                    }
                                                                }
                                                            </Show>
                                                            <button
                                                                class="btn btn--outline"
                                                                on:click=move |_| set_status(
                                                                    cancel_id.clone(),
                                                                    "cancelled",
                                                                )
                                                            >
                                                                "Cancel"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                        Err(message) => {
                            view! { <p class="error-state">{message}</p> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </AdminLayout>
    }
}
