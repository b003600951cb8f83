//! Card component for a bookable service.

use leptos::prelude::*;

const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1581578731548-c64695cc6952?w=800&q=80";

/// A service in the catalogue grid with a book action.
#[component]
pub fn ServiceCard(
    title: String,
    description: String,
    /// Preformatted price label (see `util::format::format_peso`).
    price: String,
    image: Option<String>,
    category: String,
    on_book: Callback<()>,
) -> impl IntoView {
    let src = image.unwrap_or_else(|| FALLBACK_IMAGE.to_owned());

    view! {
        <div class="service-card">
            <div class="service-card__media">
                <img class="service-card__image" src=src alt=title.clone()/>
            </div>
            <div class="service-card__body">
                <span class="service-card__price">{price}</span>
                <h3 class="service-card__title">{title}</h3>
                <span class="badge">{category}</span>
                <p class="service-card__description">{description}</p>
            </div>
            <div class="service-card__footer">
                <button class="btn btn--primary btn--block" on:click=move |_| on_book.run(())>
                    "Book Now"
                </button>
            </div>
        </div>
    }
}
