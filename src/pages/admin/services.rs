//! Admin service management: list, create, delete.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::api;
use crate::net::types::Service;
use crate::state::toast::ToastState;
use crate::util::format::format_peso;

async fn fetch_services() -> Result<Vec<Service>, String> {
    api::get("/api/admin/services", true)
        .await
        .map_err(|e| e.to_string())
}

#[component]
pub fn AdminServicesPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let services = LocalResource::new(fetch_services);

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get().trim().to_owned();
        if title_value.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let body = serde_json::json!({
                "title": title_value,
                "category": category.get_untracked().trim(),
                "price": price.get_untracked().trim().parse::<f64>().unwrap_or(0.0),
            });
            match api::post::<serde_json::Value>("/api/admin/services", &body, true).await {
                Ok(_) => {
                    toasts.update(|t| {
                        t.success("Service created", "The service is now listed.");
                    });
                    title.set(String::new());
                    category.set(String::new());
                    price.set(String::new());
                    services.refetch();
                }
                Err(err) => toasts.update(|t| {
                    t.error("Create failed", &err.to_string());
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (title_value, toasts, services);
        }
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::delete::<serde_json::Value>(&format!("/api/admin/services/{id}"), true).await
            {
                Ok(_) => {
                    toasts.update(|t| {
                        t.success("Service deleted", "The service has been removed.");
                    });
                    services.refetch();
                }
                Err(err) => toasts.update(|t| {
                    t.error("Delete failed", &err.to_string());
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, toasts, services);
        }
    };

    view! {
        <AdminLayout>
            <h1>"Services"</h1>

            <form class="admin-form" on:submit=on_create>
                <input
                    class="admin-form__input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    class="admin-form__input"
                    type="text"
                    placeholder="Category"
                    prop:value=move || category.get()
                    on:input=move |ev| category.set(event_target_value(&ev))
                />
                <input
                    class="admin-form__input"
                    type="number"
                    placeholder="Price"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Add Service"</button>
            </form>

            <Suspense fallback=move || view! { <p class="page-loading__text">"Loading services..."</p> }>
                {move || {
                    services.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"Title"</th>
                                            <th>"Category"</th>
                                            <th>"Price"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|service| {
                                                let id = service.id.clone();
                                                view! {
                                                    <tr>
                                                        <td>{service.title}</td>
                                                        <td>{service.category}</td>
                                                        <td>{format_peso(service.price)}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn--outline"
                                                                on:click=move |_| on_delete(id.clone())
                                                            >
                                                                "Delete"
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
