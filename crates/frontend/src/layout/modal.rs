use leptos::prelude::*;

/// Модальное окно поверх страницы
///
/// Клик по подложке и кнопка "×" вызывают `on_close`; сама видимость
/// управляется владельцем через `open`.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || {
            if open.get() {
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| on_close.run(())
                    >
                        <div
                            class="modal-content"
                            role="dialog"
                            aria-modal="true"
                            on:click=|e| e.stop_propagation()
                        >
                            <div class="modal-header">
                                <h3 class="modal-title">{move || title.get()}</h3>
                                <button
                                    class="modal-close"
                                    aria-label="Закрыть"
                                    on:click=move |_| on_close.run(())
                                >
                                    "×"
                                </button>
                            </div>
                            <div class="modal-body">
                                {children()}
                            </div>
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
