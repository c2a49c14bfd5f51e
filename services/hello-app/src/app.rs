//! Main App component

use std::sync::Arc;

use crate::api::platform_client;
use crate::components::api_panel::ApiPanel;
use crate::components::counter_card::CounterCard;
use crate::components::logo_links::LogoLinks;
use crate::model::FetchState;
use crate::page::HelloPage;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page = HelloPage::new(
        Arc::new(platform_client()),
        RwSignal::new(FetchState::default()),
    );

    view! {
        <Title text="Leptos + Axum" />
        <LogoLinks />
        <h1>"Leptos + Axum"</h1>
        <ApiPanel page=page />
        <CounterCard />
        <p class="read-the-docs">"Click on the Leptos and Axum logos to learn more"</p>
    }
}
