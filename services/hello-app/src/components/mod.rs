//! UI components

pub mod api_panel;
pub mod counter_card;
pub mod logo_links;
