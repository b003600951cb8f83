//! Renders the notification stack.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays up before auto-dismissal.
#[cfg(feature = "csr")]
const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Fixed-position toast stack. Each toast dismisses itself after a timeout
/// or on click.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    #[cfg(feature = "csr")]
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                        toasts.update(|t| t.dismiss(id));
                    });
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            <strong class="toast__title">{toast.title}</strong>
                            <p class="toast__message">{toast.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
