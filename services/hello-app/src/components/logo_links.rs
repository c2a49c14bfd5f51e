//! Logo links header

use leptos::prelude::*;

#[component]
pub fn LogoLinks() -> impl IntoView {
    view! {
        <div>
            <a href="https://leptos.dev" target="_blank">
                <img src="/leptos.svg" class="logo" alt="Leptos logo" />
            </a>
            <a href="https://docs.rs/axum" target="_blank">
                <img src="/axum.svg" class="logo axum" alt="Axum logo" />
            </a>
        </div>
    }
}
