use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <svg viewBox="0 0 50 50" class="loading-spinner__art" aria-hidden="true">
                <circle cx="25" cy="25" r="20" fill="none" stroke="#e0dbd4" stroke-width="4"/>
                <path d="M25 5 A20 20 0 0 1 45 25" fill="none" stroke="#8b7355" stroke-width="4" stroke-linecap="round"/>
            </svg>
            <span class="visually-hidden">"Loading projects"</span>
        </div>
    }
}
