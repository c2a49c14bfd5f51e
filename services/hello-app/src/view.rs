//! What the page shows for a given state

use crate::model::{Counter, FetchState};

/// Content of the API panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub loading_text: Option<&'static str>,
    pub error_line: Option<String>,
    pub result_line: Option<String>,
    pub button_label: &'static str,
    pub button_disabled: bool,
}

impl PanelView {
    pub fn from_state(state: &FetchState) -> Self {
        let loading = state.loading();
        Self {
            loading_text: loading.then_some("Loading..."),
            error_line: state.error().map(|e| format!("Error: {}", e)),
            result_line: state.result().map(|r| format!("Response: {}", r)),
            button_label: if loading { "Fetching..." } else { "Refetch" },
            button_disabled: loading,
        }
    }
}

/// Label of the counter button
pub fn counter_label(counter: Counter) -> String {
    format!("count is {}", counter.value())
}
