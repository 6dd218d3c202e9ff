use super::view_model::BulkCustomerFormViewModel;
use crate::layout::modal::Modal;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;
use contracts::domain::a001_customer::aggregate::CustomerField;
use leptos::prelude::*;
use thaw::*;

/// Модальное окно создания (пакетного) и редактирования клиентов
#[component]
pub fn BulkCustomerFormModal(
    vm: BulkCustomerFormViewModel,
    /// Runs after a successful save, e.g. to refresh the list
    on_saved: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal
            open=vm.open
            title=Signal::derive(move || vm.title())
            on_close=Callback::new(move |_| vm.cancel())
        >
            <ErrorBanner message=vm.error />

            <div class="bulk-form">
                // Key by (index, id): typing keeps the node, removal re-renders the shifted rows
                <For
                    each=move || vm.rows()
                    key=|row| *row
                    children=move |(index, _)| view! { <DraftFieldset vm=vm index=index /> }
                />
            </div>

            <div class="modal-footer">
                <Show when=move || !vm.is_edit_mode()>
                    <button
                        class="button button--secondary"
                        on:click=move |_| vm.add_record()
                        disabled=move || vm.is_saving.get()
                    >
                        {icon("plus")}
                        "Добавить запись"
                    </button>
                </Show>
                <Flex justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.cancel()
                    >
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.is_saving.get())
                        on_click=move |_| vm.submit(on_saved)
                    >
                        {move || {
                            if vm.is_saving.get() {
                                "Сохранение...".to_string()
                            } else if vm.is_edit_mode() {
                                "Сохранить".to_string()
                            } else {
                                format!("Создать ({})", vm.record_count())
                            }
                        }}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}

#[component]
fn DraftFieldset(vm: BulkCustomerFormViewModel, index: usize) -> impl IntoView {
    view! {
        <fieldset class="bulk-form__record">
            <legend class="bulk-form__legend">
                {move || {
                    if vm.is_edit_mode() {
                        "Клиент".to_string()
                    } else {
                        format!("Запись {}", index + 1)
                    }
                }}
                <Show when=move || vm.can_remove(index)>
                    <button
                        class="button button--ghost bulk-form__remove"
                        title="Удалить запись"
                        on:click=move |_| vm.remove_record(index)
                    >
                        {icon("delete")}
                    </button>
                </Show>
            </legend>

            {CustomerField::ALL
                .into_iter()
                .map(|field| view! { <DraftInput vm=vm index=index field=field /> })
                .collect_view()}
        </fieldset>
    }
}

#[component]
fn DraftInput(vm: BulkCustomerFormViewModel, index: usize, field: CustomerField) -> impl IntoView {
    let input_id = format!("customer-{}-{}", index, field.name());
    let placeholder = move || {
        if field == CustomerField::Password && vm.is_edit_mode() {
            "Оставьте пустым, чтобы не менять"
        } else {
            field.placeholder()
        }
    };

    view! {
        <div class="form-group">
            <label for=input_id.clone()>{field.label()}</label>
            <input
                type=field.input_type()
                id=input_id
                class=move || {
                    if vm.field_error(index, field).is_some() {
                        "form__input form__input--invalid"
                    } else {
                        "form__input"
                    }
                }
                placeholder=placeholder
                prop:value=move || vm.field_value(index, field)
                on:input=move |ev| vm.update_field(index, field, event_target_value(&ev))
            />
            {move || vm.field_error(index, field).map(|e| view! {
                <span class=format!("form__error form__error--{}", e.kind().code())>{e.to_string()}</span>
            })}
        </div>
    }
}
