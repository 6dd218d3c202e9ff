use crate::shared::config::ClientConfig;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();
    let api_base = use_context::<ClientConfig>()
        .map(|c| c.api_base)
        .unwrap_or_default();

    view! {
        <footer data-zone="footer" class="status-bar">
            <span>{format!("© {} FlexCRM - Smart Retail Management", year)}</span>
            <span class="status-bar__api" title="API">{api_base}</span>
        </footer>
    }
}
