//! Service catalogue with a book action per card.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::service_card::ServiceCard;
use crate::net::api;
use crate::net::types::Service;
use crate::state::toast::ToastState;
use crate::util::format::format_peso;

async fn fetch_services() -> Result<Vec<Service>, String> {
    api::get("/api/services", false)
        .await
        .map_err(|e| e.to_string())
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let services = LocalResource::new(fetch_services);

    let on_book = move |service: Service| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let body = serde_json::json!({"service_id": service.id});
            match api::post::<serde_json::Value>("/api/bookings", &body, true).await {
                Ok(_) => toasts.update(|t| {
                    t.success("Booking created", &format!("{} has been booked.", service.title));
                }),
                Err(err) => toasts.update(|t| {
                    t.error("Booking failed", &err.to_string());
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (service, toasts);
        }
    };

    view! {
        <Navbar/>
        <div class="services-page">
            <h1>"Services"</h1>
            <Suspense fallback=move || view! { <p class="page-loading__text">"Loading services..."</p> }>
                {move || {
                    services.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="empty-state">"No services available yet."</p> }
                                .into_any()
                        }
                        Ok(list) => {
                            view! {
                                <div class="services-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|service| {
                                            let card = service.clone();
                                            view! {
                                                <ServiceCard
                                                    title=card.title
                                                    description=card.description
                                                    price=format_peso(card.price)
                                                    image=card.image
                                                    category=card.category
                                                    on_book=Callback::new(move |()| on_book(service.clone()))
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
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
