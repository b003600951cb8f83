//! Admin user listing with role visibility.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::api;
use crate::net::types::AdminUser;

async fn fetch_users() -> Result<Vec<AdminUser>, String> {
    api::get("/api/admin/users", true)
        .await
        .map_err(|e| e.to_string())
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let users = LocalResource::new(fetch_users);

    view! {
        <AdminLayout>
            <h1>"Users"</h1>
            <Suspense fallback=move || view! { <p class="page-loading__text">"Loading users..."</p> }>
                {move || {
                    users.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Role"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|user| {
                                                view! {
                                                    <tr>
                                                        <td>{user.name.unwrap_or_default()}</td>
                                                        <td>{user.email}</td>
                                                        <td>{user.role}</td>
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
