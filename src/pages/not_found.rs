//! Catch-all 404 page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Navbar/>
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a class="btn btn--primary" href="/">"Back to Home"</a>
        </div>
    }
}
