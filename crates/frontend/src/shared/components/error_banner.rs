use leptos::prelude::*;

/// Dismissible error banner. Renders nothing while `message` is `None`.
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <div class="warning-box warning-box--error" role="alert">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{text}</span>
                <button
                    class="warning-box__close"
                    aria-label="Закрыть"
                    on:click=move |_| message.set(None)
                >
                    "×"
                </button>
            </div>
        })}
    }
}

/// Информационная плашка для пустых результатов ("нет данных")
#[component]
pub fn EmptyState(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="empty-state">{text}</div>
    }
}
