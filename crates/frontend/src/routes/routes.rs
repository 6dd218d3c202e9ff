use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_order::ui::filter::OrderFilterPage;
use crate::domain::a002_order::ui::list::OrdersPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h2>"Страница не найдена"</h2>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=OrdersPage />
                    <Route path=path!("/customers") view=CustomerList />
                    <Route path=path!("/orders/filter") view=OrderFilterPage />
                </Routes>
            </Shell>
        </Router>
    }
}
