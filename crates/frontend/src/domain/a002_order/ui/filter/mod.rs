use crate::domain::a002_order::api;
use crate::shared::components::error_banner::{EmptyState, ErrorBanner};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use contracts::domain::a002_order::aggregate::{Order, OrderId};
use contracts::domain::a002_order::filter::{OrderFilterForm, OrderFilterKind};
use leptos::prelude::*;
use thaw::*;

const NOTHING_FOUND: &str = "Заказы не найдены";

#[derive(Clone, Debug, PartialEq)]
pub struct FilteredOrderRow {
    pub id: OrderId,
    pub description: String,
    pub order_date: String,
    pub customer: String,
}

impl From<Order> for FilteredOrderRow {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            customer: o.customer_label().unwrap_or_else(|| "-".to_string()),
            order_date: format_optional(o.order_date.as_ref()),
            description: o.description,
        }
    }
}

/// Поиск заказов по имени клиента или по дате
#[component]
#[allow(non_snake_case)]
pub fn OrderFilterPage() -> impl IntoView {
    let form = RwSignal::new(OrderFilterForm::default());
    let items = RwSignal::new(Vec::<FilteredOrderRow>::new());
    let searched = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let apply = move || {
        let filter = match form.with_untracked(|f| f.build()) {
            Ok(filter) => filter,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        loading.set(true);
        leptos::task::spawn_local(async move {
            match api::filter_orders(&filter).await {
                Ok(list) => items.set(list.into_iter().map(FilteredOrderRow::from).collect()),
                Err(e) if e.is_no_data() => items.set(Vec::new()),
                Err(e) => {
                    log::error!("Order filter {:?} failed: {}", filter, e);
                    items.set(Vec::new());
                    error.set(Some(e.user_message()));
                }
            }
            searched.set(true);
            loading.set(false);
        });
    };

    let clear = move || {
        form.update(|f| f.clear());
        items.set(Vec::new());
        searched.set(false);
        error.set(None);
    };

    view! {
        <div class="page">
            <PageHeader title="Фильтр заказов" count=Signal::derive(move || searched.get().then(|| items.with(|i| i.len())))>
                <button class="button button--primary" on:click=move |_| apply()>
                    {icon("filter")}
                    "Применить"
                </button>
                <button class="button button--secondary" on:click=move |_| clear()>
                    "Сбросить"
                </button>
            </PageHeader>

            <ErrorBanner message=error />

            <div class="filter-panel">
                <div class="form-group">
                    <label for="filter-kind">"Тип фильтра"</label>
                    <select
                        id="filter-kind"
                        class="form__input"
                        on:change=move |ev| {
                            if let Some(kind) = OrderFilterKind::from_code(&event_target_value(&ev)) {
                                form.update(|f| f.kind = kind);
                                error.set(None);
                            }
                        }
                    >
                        {[OrderFilterKind::Customer, OrderFilterKind::Date]
                            .into_iter()
                            .map(|kind| view! {
                                <option
                                    value=kind.code()
                                    prop:selected=move || form.with(|f| f.kind == kind)
                                >
                                    {kind.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                {move || match form.with(|f| f.kind) {
                    OrderFilterKind::Customer => view! {
                        <div class="form-group">
                            <label for="filter-name">"Имя клиента"</label>
                            <input
                                type="text"
                                id="filter-name"
                                class="form__input"
                                placeholder="Введите имя пользователя"
                                prop:value=move || form.with(|f| f.customer_name.clone())
                                on:input=move |ev| form.update(|f| f.customer_name = event_target_value(&ev))
                                on:keydown=move |ev| if ev.key() == "Enter" { apply() }
                            />
                        </div>
                    }.into_any(),
                    OrderFilterKind::Date => view! {
                        <div class="form-group">
                            <label for="filter-date">"Дата заказа"</label>
                            <input
                                type="date"
                                id="filter-date"
                                class="form__input"
                                prop:value=move || form.with(|f| f.date.clone())
                                on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                            />
                        </div>
                    }.into_any(),
                }}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading"><Spinner /></div> }
            >
                <Show when=move || searched.get() && items.with(|i| i.is_empty())>
                    <EmptyState text=NOTHING_FOUND />
                </Show>
                <Show when=move || items.with(|i| !i.is_empty())>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Описание"</th>
                                <th>"Дата заказа"</th>
                                <th>"Клиент"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|row| row.id
                                children=move |row| view! {
                                    <tr>
                                        <td>{row.id.to_string()}</td>
                                        <td>{row.description}</td>
                                        <td>{row.order_date}</td>
                                        <td>{row.customer}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};
    use contracts::domain::common::EntityMetadata;

    #[test]
    fn row_takes_customer_name_from_embedded_record() {
        let order = Order {
            id: OrderId(1),
            description: "Поставка".into(),
            order_date: None,
            customer_id: None,
            customer_name: None,
            customer: Some(Customer {
                id: CustomerId(2),
                username: "petrov".into(),
                email: "p@example.com".into(),
                phone: None,
                address: None,
                company_name: None,
                metadata: EntityMetadata::default(),
            }),
            metadata: EntityMetadata::default(),
        };
        let row = FilteredOrderRow::from(order);
        assert_eq!(row.customer, "petrov");
        assert_eq!(row.order_date, "—");
    }
}
