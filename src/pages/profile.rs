//! Profile page reading and saving the user's contact details.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::types::UserProfile;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

async fn fetch_profile() -> Result<UserProfile, String> {
    api::get("/api/profile", true).await.map_err(|e| e.to_string())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let profile = LocalResource::new(fetch_profile);

    // Seed the form once the stored profile arrives.
    Effect::new(move || {
        if let Some(Ok(stored)) = profile.get() {
            name.set(stored.name.unwrap_or_default());
            phone.set(stored.phone.unwrap_or_default());
            address.set(stored.address.unwrap_or_default());
        }
    });

    let email = move || {
        auth.get()
            .user
            .map(|principal| principal.email)
            .unwrap_or_default()
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let body = serde_json::json!({
                "name": name.get_untracked(),
                "phone": phone.get_untracked(),
                "address": address.get_untracked(),
            });
            match api::put::<serde_json::Value>("/api/profile", &body, true).await {
                Ok(_) => toasts.update(|t| {
                    t.success("Profile saved", "Your details have been updated.");
                }),
                Err(err) => toasts.update(|t| {
                    t.error("Save failed", &err.to_string());
                }),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = toasts;
            busy.set(false);
        }
    };

    view! {
        <Navbar/>
        <div class="profile-page">
            <h1>"Profile"</h1>
            <p class="profile-page__email">{email}</p>
            <form class="profile-form" on:submit=on_save>
                <label class="profile-form__label">
                    "Name"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Phone"
                    <input
                        class="profile-form__input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Address"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save Changes"
                </button>
            </form>
        </div>
    }
}
