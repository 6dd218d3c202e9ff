use super::view_model::OrderDetailsViewModel;
use crate::layout::modal::Modal;
use crate::shared::components::error_banner::ErrorBanner;
use contracts::domain::a002_order::aggregate::DESCRIPTION_MAX_LEN;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetailsModal(vm: OrderDetailsViewModel, on_saved: Callback<()>) -> impl IntoView {
    view! {
        <Modal
            open=vm.open
            title=Signal::derive(move || vm.title())
            on_close=Callback::new(move |_| vm.cancel())
        >
            <ErrorBanner message=vm.error />

            <div class="details-form">
                <div class="form-group">
                    <label for="order-description">"Описание"</label>
                    <textarea
                        id="order-description"
                        class="form__input"
                        maxlength=DESCRIPTION_MAX_LEN.to_string()
                        placeholder="Введите описание заказа"
                        prop:value=move || vm.description.get()
                        on:input=move |ev| vm.description.set(event_target_value(&ev))
                    />
                    <span class="form__hint">
                        {move || format!("{} / {}", vm.description.with(|d| d.chars().count()), DESCRIPTION_MAX_LEN)}
                    </span>
                </div>

                <div class="form-group">
                    <label for="order-date">"Дата заказа"</label>
                    <input
                        type="datetime-local"
                        id="order-date"
                        class="form__input"
                        prop:value=move || vm.order_date.get()
                        on:input=move |ev| vm.order_date.set(event_target_value(&ev))
                    />
                    <span class="form__hint">"Пусто: текущее время сервера"</span>
                </div>
            </div>

            <div class="modal-footer">
                <Flex justify=FlexJustify::End>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel()>
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.is_saving.get())
                        on_click=move |_| vm.save(on_saved)
                    >
                        {move || if vm.is_saving.get() { "Сохранение..." } else { "Сохранить" }}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}
