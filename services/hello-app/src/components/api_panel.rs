//! API response panel

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::PlatformClient;
use crate::model::FetchState;
use crate::page::HelloPage;
use crate::view::PanelView;

/// Hello page bound to the platform client and a reactive store
pub type BrowserPage = HelloPage<PlatformClient, RwSignal<FetchState>>;

/// Fetches /api/hello on mount and on each refetch click, and shows the outcome
#[component]
pub fn ApiPanel(page: BrowserPage) -> impl IntoView {
    let state = *page.state();
    let panel = move || state.with(PanelView::from_state);

    let mount_page = page.clone();
    Effect::new(move |_| {
        let page = mount_page.clone();
        spawn_local(async move {
            page.mount().await;
        });
    });

    let on_refetch = move |_| {
        let page = page.clone();
        spawn_local(async move {
            page.refetch().await;
        });
    };

    view! {
        <div class="card">
            <h2>"API Response"</h2>
            {move || panel().loading_text.map(|text| view! { <p>{text}</p> })}
            {move || {
                panel().error_line.map(|line| view! { <p style="color: red;">{line}</p> })
            }}
            {move || panel().result_line.map(|line| view! { <p>{line}</p> })}
            <button on:click=on_refetch disabled=move || panel().button_disabled>
                {move || panel().button_label}
            </button>
        </div>
    }
}
