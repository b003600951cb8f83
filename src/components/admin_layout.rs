//! Frame shared by all admin panel pages.

use leptos::prelude::*;

use crate::components::admin_sidebar::AdminSidebar;

/// Sidebar plus scrollable content area.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    view! {
        <div class="admin-layout">
            <AdminSidebar/>
            <main class="admin-layout__main">
                <div class="admin-layout__content">{children()}</div>
            </main>
        </div>
    }
}
