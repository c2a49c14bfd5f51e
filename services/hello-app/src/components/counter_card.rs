//! Click counter card

use leptos::prelude::*;

use crate::model::Counter;
use crate::view::counter_label;

/// Source of this card, relative to the workspace root
const SOURCE_PATH: &str = "services/hello-app/src/components/counter_card.rs";

/// A button counting its own clicks
#[component]
pub fn CounterCard() -> impl IntoView {
    let count = RwSignal::new(Counter::default());

    view! {
        <div class="card">
            <button on:click=move |_| count.update(Counter::increment)>
                {move || counter_label(count.get())}
            </button>
            <p>
                "Edit " <code>{SOURCE_PATH}</code> " and rebuild to see changes"
            </p>
        </div>
    }
}
