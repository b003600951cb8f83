//! Registration page creating an account and its profile record.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Trim and require every field; the provider enforces password strength.
fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email, and password.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Profile metadata persisted best-effort alongside the new account.
#[cfg(any(test, feature = "csr"))]
fn profile_metadata(name: &str) -> serde_json::Map<String, serde_json::Value> {
    let mut metadata = serde_json::Map::new();
    metadata.insert("name".to_owned(), serde_json::Value::String(name.to_owned()));
    metadata
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) =
            match validate_register_input(&name.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let metadata = profile_metadata(&name_value);
            match crate::state::auth::sign_up(
                auth,
                toasts,
                &email_value,
                &password_value,
                metadata,
                false,
            )
            .await
            {
                Ok(()) => {
                    crate::util::nav::hard_navigate(
                        "/services",
                        leptos_router::NavigateOptions::default(),
                    );
                }
                Err(_) => busy.set(false),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name_value, email_value, password_value, auth, toasts);
        }
    };

    view! {
        <Navbar/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
