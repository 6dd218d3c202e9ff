use crate::domain::a001_customer::api as customer_api;
use crate::domain::a002_order::api;
use crate::domain::a002_order::ui::details::{OrderDetailsModal, OrderDetailsViewModel};
use crate::shared::components::error_banner::{EmptyState, ErrorBanner};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_optional;
use crate::shared::dialogs;
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};
use contracts::domain::a002_order::aggregate::{Order, OrderId};
use contracts::domain::common::AggregateId;
use contracts::shared::api_error::{ApiError, ErrorCategory};
use leptos::prelude::*;
use thaw::*;

const NO_ORDERS: &str = "Заказов для этого клиента нет";
const INVALID_CUSTOMER: &str = "Неверный ID клиента";

/// How a failed order load is shown
#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadFailure {
    /// Informational empty state
    Empty(String),
    /// Error banner
    Banner(String),
}

fn classify(err: &ApiError) -> LoadFailure {
    match err.category() {
        ErrorCategory::NotFound => LoadFailure::Empty(NO_ORDERS.to_string()),
        ErrorCategory::BadRequest => LoadFailure::Banner(INVALID_CUSTOMER.to_string()),
        _ => LoadFailure::Banner(err.user_message()),
    }
}

/// A response is applied only while its customer is still selected
fn is_current(selected: Option<CustomerId>, requested: CustomerId) -> bool {
    selected == Some(requested)
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub id: OrderId,
    pub description: String,
    pub order_date: String,
}

impl From<Order> for OrderRow {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            order_date: format_optional(o.order_date.as_ref()),
            description: o.description,
        }
    }
}

/// Заказы выбранного клиента
#[component]
#[allow(non_snake_case)]
pub fn OrdersPage() -> impl IntoView {
    let customers = RwSignal::new(Vec::<Customer>::new());
    let selected = RwSignal::new(None::<CustomerId>);
    let items = RwSignal::new(Vec::<OrderRow>::new());
    let empty_text = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let notice = use_notice();
    let details = OrderDetailsViewModel::new();

    let fetch_customers = move || {
        leptos::task::spawn_local(async move {
            match customer_api::fetch_customers().await {
                Ok(list) => customers.set(list),
                Err(e) if e.is_no_data() => customers.set(Vec::new()),
                Err(e) => {
                    log::error!("Failed to load customers: {}", e);
                    error.set(Some("Не удалось загрузить клиентов".to_string()));
                }
            }
        });
    };

    let fetch_orders = move || {
        let Some(customer_id) = selected.get_untracked() else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = api::fetch_orders(customer_id).await;
            if !is_current(selected.try_get_untracked().flatten(), customer_id) {
                log::debug!("Dropping orders of customer {}: selection changed", customer_id);
                return;
            }
            match result {
                Ok(list) => {
                    empty_text.set(list.is_empty().then(|| NO_ORDERS.to_string()));
                    items.set(list.into_iter().map(OrderRow::from).collect());
                    error.set(None);
                }
                Err(e) => {
                    items.set(Vec::new());
                    match classify(&e) {
                        LoadFailure::Empty(text) => {
                            empty_text.set(Some(text));
                            error.set(None);
                        }
                        LoadFailure::Banner(text) => {
                            log::warn!("Failed to load orders of customer {}: {}", customer_id, e);
                            empty_text.set(None);
                            error.set(Some(text));
                        }
                    }
                }
            }
            loading.set(false);
        });
    };

    let on_select = move |raw: String| {
        let id = if raw.is_empty() {
            None
        } else {
            match CustomerId::from_string(&raw) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("{}", e);
                    error.set(Some(INVALID_CUSTOMER.to_string()));
                    None
                }
            }
        };
        selected.set(id);
        items.set(Vec::new());
        empty_text.set(None);
        fetch_orders();
    };

    let handle_edit = move |order_id: OrderId| {
        if let Some(customer_id) = selected.get_untracked() {
            details.open_edit(
                customer_id,
                order_id,
                Callback::new(move |msg: String| error.set(Some(msg))),
            );
        }
    };

    let handle_delete = move |order_id: OrderId| {
        let Some(customer_id) = selected.get_untracked() else {
            return;
        };
        if !dialogs::confirm("Вы уверены, что хотите удалить этот заказ?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::delete_order(customer_id, order_id).await {
                Ok(()) => {
                    notice.show("Заказ успешно удален");
                    fetch_orders();
                }
                Err(e) => {
                    log::error!("Failed to delete order {}: {}", order_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    fetch_customers();

    view! {
        <div class="page">
            <PageHeader title="Заказы" count=Signal::derive(move || selected.get().map(|_| items.with(|i| i.len())))>
                <button
                    class="button button--primary"
                    disabled=move || selected.get().is_none()
                    on:click=move |_| {
                        if let Some(id) = selected.get_untracked() {
                            details.open_create(id);
                        }
                    }
                >
                    {icon("plus")}
                    "Создать заказ"
                </button>
                <button
                    class="button button--secondary"
                    disabled=move || selected.get().is_none()
                    on:click=move |_| fetch_orders()
                >
                    {icon("refresh")}
                    "Обновить"
                </button>
            </PageHeader>

            <ErrorBanner message=error />

            <div class="form-group form-group--inline">
                <label for="order-customer">"Клиент"</label>
                <select
                    id="order-customer"
                    class="form__input"
                    on:change=move |ev| on_select(event_target_value(&ev))
                >
                    <option value="" prop:selected=move || selected.get().is_none()>"Выберите клиента"</option>
                    <For
                        each=move || customers.get()
                        key=|c| c.id
                        children=move |c| {
                            let id = c.id;
                            view! {
                                <option
                                    value=id.as_string()
                                    prop:selected=move || selected.get() == Some(id)
                                >
                                    {c.display_name()}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <Show when=move || selected.get().is_some()>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /></div> }
                >
                    {move || empty_text.get().map(|text| view! { <EmptyState text=text /> })}
                    <Show when=move || items.with(|i| !i.is_empty())>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Описание"</th>
                                    <th>"Дата заказа"</th>
                                    <th class="table__actions">"Действия"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || items.get()
                                    key=|row| row.id
                                    children=move |row| {
                                        let id = row.id;
                                        view! {
                                            <tr>
                                                <td>{id.to_string()}</td>
                                                <td>{row.description}</td>
                                                <td>{row.order_date}</td>
                                                <td class="table__actions">
                                                    <button
                                                        class="button button--ghost"
                                                        title="Редактировать"
                                                        on:click=move |_| handle_edit(id)
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--ghost"
                                                        title="Удалить"
                                                        on:click=move |_| handle_delete(id)
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </Show>

            <OrderDetailsModal vm=details on_saved=Callback::new(move |_| fetch_orders()) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_means_no_orders() {
        assert_eq!(
            classify(&ApiError::from_status(204, "")),
            LoadFailure::Empty(NO_ORDERS.to_string())
        );
        assert_eq!(
            classify(&ApiError::from_status(404, "")),
            LoadFailure::Empty(NO_ORDERS.to_string())
        );
    }

    #[test]
    fn bad_request_means_invalid_customer() {
        assert_eq!(
            classify(&ApiError::from_status(400, r#"{"error":"Invalid customer ID"}"#)),
            LoadFailure::Banner(INVALID_CUSTOMER.to_string())
        );
    }

    #[test]
    fn response_for_a_previous_selection_is_dropped() {
        assert!(is_current(Some(CustomerId(2)), CustomerId(2)));
        assert!(!is_current(Some(CustomerId(3)), CustomerId(2)));
        assert!(!is_current(None, CustomerId(2)));
    }

    #[test]
    fn other_failures_use_the_generic_message() {
        let err = ApiError::network("connection refused");
        assert_eq!(classify(&err), LoadFailure::Banner(err.user_message()));
    }
}
