//! Public landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Book trusted services in minutes"</h1>
                <p class="hero__subtitle">
                    "Browse the catalogue, pick a slot, and manage all your bookings in one place."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/services">"Browse Services"</a>
                    <a class="btn btn--outline" href="/register">"Create an Account"</a>
                </div>
            </section>
        </div>
    }
}
