use crate::domain::a001_customer::api;
use crate::domain::a001_customer::ui::bulk_form::{BulkCustomerFormModal, BulkCustomerFormViewModel};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::dialogs;
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerRow {
    pub id: CustomerId,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company_name: String,
}

impl From<Customer> for CustomerRow {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            username: c.username,
            email: c.email,
            phone: or_dash(c.phone),
            address: or_dash(c.address),
            company_name: or_dash(c.company_name),
        }
    }
}

fn or_dash(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let items = RwSignal::new(Vec::<CustomerRow>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let notice = use_notice();
    let form = BulkCustomerFormViewModel::new();

    let fetch = move || {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_customers().await {
                Ok(list) => {
                    items.set(list.into_iter().map(CustomerRow::from).collect());
                    error.set(None);
                }
                Err(e) if e.is_no_data() => {
                    items.set(Vec::new());
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load customers: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let handle_edit = move |id: CustomerId| {
        leptos::task::spawn_local(async move {
            match api::fetch_customer(id).await {
                Ok(customer) => form.open_edit(&customer),
                Err(e) => {
                    log::error!("Failed to load customer {}: {}", id, e);
                    error.set(Some(format!("Ошибка при загрузке данных клиента: {}", e)));
                }
            }
        });
    };

    let handle_delete = move |id: CustomerId| {
        if !dialogs::confirm("Вы уверены, что хотите удалить этого клиента?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::delete_customer(id).await {
                Ok(()) => {
                    notice.show("Клиент успешно удален");
                    fetch();
                }
                Err(e) => {
                    log::error!("Failed to delete customer {}: {}", id, e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Клиенты" count=Signal::derive(move || Some(items.with(|i| i.len())))>
                <button class="button button--primary" on:click=move |_| form.open_create()>
                    {icon("plus")}
                    "Добавить клиентов"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Обновить"
                </button>
            </PageHeader>

            <ErrorBanner message=error />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading"><Spinner /></div> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Имя пользователя"</th>
                            <th>"Email"</th>
                            <th>"Телефон"</th>
                            <th>"Адрес"</th>
                            <th>"Компания"</th>
                            <th class="table__actions">"Действия"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || items.with(|i| !i.is_empty())
                            fallback=|| view! {
                                <tr><td colspan="7" class="table__empty">"Нет данных"</td></tr>
                            }
                        >
                            <For
                                each=move || items.get()
                                key=|row| row.id
                                children=move |row| {
                                    let id = row.id;
                                    view! {
                                        <tr>
                                            <td>{id.to_string()}</td>
                                            <td>{row.username}</td>
                                            <td>{row.email}</td>
                                            <td>{row.phone}</td>
                                            <td>{row.address}</td>
                                            <td>{row.company_name}</td>
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
                        </Show>
                    </tbody>
                </table>
            </Show>

            <BulkCustomerFormModal vm=form on_saved=Callback::new(move |_| fetch()) />
        </div>
    }
}
