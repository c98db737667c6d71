use leptos::prelude::*;

use crate::catalog::{Toast, ToastNotifier};

/// Renders the toasts queued on the [`ToastNotifier`] in context.
#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_context::<ToastNotifier>().unwrap_or_default();
    let queue = notifier.queue();

    view! {
        <div class="toaster" aria-live="assertive">
            <For
                each=move || queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast toast--error" role="alert">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
