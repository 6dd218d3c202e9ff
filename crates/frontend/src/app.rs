use crate::routes::AppRoutes;
use crate::shared::config::{self, ClientConfig};
use crate::shared::notice::NoticeService;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = config::init(ClientConfig::from_env()).clone();
    log::info!("FlexCRM client, API at {}", config.api_base);

    provide_context(NoticeService::new(&config));
    provide_context(config);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
