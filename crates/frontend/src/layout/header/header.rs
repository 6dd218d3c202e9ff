use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"FlexCRM"</span>
                <nav class="header__nav">
                    <A href="/" attr:class="header__link">
                        {icon("orders")}
                        <span>"Заказы"</span>
                    </A>
                    <A href="/customers" attr:class="header__link">
                        {icon("customers")}
                        <span>"Клиенты"</span>
                    </A>
                    <A href="/orders/filter" attr:class="header__link">
                        {icon("filter")}
                        <span>"Фильтры"</span>
                    </A>
                </nav>
            </div>
        </header>
    }
}
