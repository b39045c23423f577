//! Resource List Page
//!
//! One list page per resource: search, optional date range, table and
//! pagination wired to a list controller.

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::api::Resource;
use crate::components::{DataTable, DateRangeFilter, Pagination, SearchBox};
use crate::config::AppConfig;
use crate::controller::{use_list_controller, use_list_data};
use crate::models::{AdAccount, Admin, Agent, Deposit, TableRow, TransactionLog, User, Wallet};
use crate::store::{use_app_store, AppStateStoreFields};

/// List page for `resource`
#[component]
pub fn ResourceView(resource: Resource) -> impl IntoView {
    match resource {
        Resource::Admins => list_page::<Admin>(resource),
        Resource::Agents => list_page::<Agent>(resource),
        Resource::Users => list_page::<User>(resource),
        Resource::FacebookAccounts | Resource::GoogleAccounts => list_page::<AdAccount>(resource),
        Resource::Wallets => list_page::<Wallet>(resource),
        Resource::Deposits => list_page::<Deposit>(resource),
        Resource::TransactionLogs => list_page::<TransactionLog>(resource),
    }
}

fn list_page<T>(resource: Resource) -> AnyView
where
    T: TableRow + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let store = use_app_store();
    let controller = use_list_controller(&config);
    let endpoint = resource.endpoint(store.role().get_untracked());
    let token = Signal::derive(move || store.token().get());
    let data = use_list_data::<T>(endpoint, controller, token);

    let rows = Signal::derive(move || {
        data.page
            .with(|p| p.rows.iter().map(|row| (row.key(), row.cells())).collect::<Vec<_>>())
    });
    let has_next = Signal::derive(move || {
        let (page, per_page) = controller.query.with(|q| (q.page, q.per_page.value()));
        data.page.with(|p| p.has_next(page, per_page))
    });
    let total_pages = Signal::derive(move || data.page.with(|p| p.total_pages));
    let total_items = Signal::derive(move || data.page.with(|p| p.total_items));

    view! {
        <section class="resource-page" data-page-category="list">
            <header class="page__header">
                <h1>{resource.title()}</h1>
            </header>
            <div class="list-toolbar">
                <SearchBox controller=controller />
                {resource.has_date_filter().then(|| view! { <DateRangeFilter controller=controller /> })}
            </div>
            {move || data.error.get().map(|err| view! { <p class="list-error">{err.to_string()}</p> })}
            <Show when=move || data.loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            <DataTable headers=T::headers() rows=rows />
            <Pagination
                controller=controller
                has_next=has_next
                total_pages=total_pages
                total_items=total_items
            />
        </section>
    }
    .into_any()
}
