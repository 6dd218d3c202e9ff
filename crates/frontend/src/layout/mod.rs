pub mod footer;
pub mod header;
pub mod modal;

use crate::shared::notice::NoticeHost;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |   Header (brand + navigation)            |
/// +------------------------------------------+
/// |   routed page                            |
/// +------------------------------------------+
/// |   Footer                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <NoticeHost />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
