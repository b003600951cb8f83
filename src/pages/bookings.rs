//! The current user's bookings, with cancellation.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::types::Booking;
use crate::state::toast::ToastState;
use crate::util::format::format_time_12h;

/// Badge styling per booking status. Unknown statuses get the neutral badge.
fn status_class(status: &str) -> &'static str {
    match status {
        "pending" => "badge badge--pending",
        "confirmed" => "badge badge--confirmed",
        "completed" => "badge badge--completed",
        "cancelled" => "badge badge--cancelled",
        _ => "badge",
    }
}

async fn fetch_bookings() -> Result<Vec<Booking>, String> {
    api::get("/api/bookings", true).await.map_err(|e| e.to_string())
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let bookings = LocalResource::new(fetch_bookings);

    let on_cancel = move |id: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::delete::<serde_json::Value>(&format!("/api/bookings/{id}"), true).await {
                Ok(_) => {
                    toasts.update(|t| {
                        t.success("Booking cancelled", "Your booking has been cancelled.");
                    });
                    bookings.refetch();
                }
                Err(err) => toasts.update(|t| {
                    t.error("Cancellation failed", &err.to_string());
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, toasts, bookings);
        }
    };

    view! {
        <Navbar/>
        <div class="bookings-page">
            <h1>"My Bookings"</h1>
            <Suspense fallback=move || view! { <p class="page-loading__text">"Loading bookings..."</p> }>
                {move || {
                    bookings.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="empty-state">"You have no bookings yet."</p> }
                                .into_any()
                        }
                        Ok(list) => {
                            view! {
                                <ul class="bookings-page__list">
                                    {list
                                        .into_iter()
                                        .map(|booking| {
                                            let cancellable = booking.status == "pending"
                                                || booking.status == "confirmed";
                                            let id = booking.id.clone();
                                            view! {
                                                <li class="booking-row">
                                                    <div class="booking-row__info">
                                                        <span class="booking-row__service">
                                                            {booking.service_title}
                                                        </span>
                                                        <span class="booking-row__when">
                                                            {booking.date} " at " {format_time_12h(&booking.time)}
                                                        </span>
                                                    </div>
                                                    <span class=status_class(&booking.status)>
                                                        {booking.status.clone()}
                                                    </span>
                                                    <Show when=move || cancellable>
                                                        {
                                                            let id = id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn--outline"
                                                                    on:click=move |_| on_cancel(id.clone())
                                                                >
                                                                    "Cancel"
                                                                </button>
                                                            }
                                                        }
                                                    </Show>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                            .into_any()
                        }
                        Err(message) => {
                            view! { <p class="error-state">{message}</p> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
