//! Короткие уведомления об успешных операциях ("Клиент успешно создан").

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::config::ClientConfig;

#[derive(Clone, Copy)]
pub struct NoticeService {
    message: RwSignal<Option<String>>,
    timeout_ms: u32,
}

impl NoticeService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            message: RwSignal::new(None),
            timeout_ms: config.notice_timeout_ms,
        }
    }

    /// Show a notice; it disappears after the configured timeout unless
    /// a newer notice replaced it.
    pub fn show(&self, text: impl Into<String>) {
        let text = text.into();
        log::info!("{}", text);
        self.message.set(Some(text.clone()));

        let message = self.message;
        let timeout_ms = self.timeout_ms;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            let still_current = message
                .try_with_untracked(|m| m.as_deref() == Some(text.as_str()))
                .unwrap_or(false);
            if still_current {
                message.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.message.set(None);
    }
}

pub fn use_notice() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not provided in context")
}

#[component]
pub fn NoticeHost() -> impl IntoView {
    let notice = use_notice();

    view! {
        {move || notice.message.get().map(|text| view! {
            <div class="notice notice--success" role="status">
                <span class="notice__text">{text}</span>
                <button class="notice__close" aria-label="Закрыть" on:click=move |_| notice.dismiss()>"×"</button>
            </div>
        })}
    }
}
