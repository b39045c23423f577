//! Admin Dashboard App
//!
//! Sidebar plus the active page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::Resource;
use crate::components::{ResourceView, Sidebar};
use crate::config::AppConfig;
use crate::navigation::{filter_navigation, find_by_url, navigation_tree};
use crate::session::Session;
use crate::store::{store_session, use_app_store, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("[APP] api base {}", config.api_base_url);
    provide_context(config);

    // Session is read once here; login/logout replace it through the store
    let store = Store::new(AppState::from_session(Session::load()));
    provide_context(store);

    // Pages hidden from the role's menu are not rendered either
    let tree = navigation_tree();
    let current_resource = Memo::new(move |_| {
        let url = store.current_url().get();
        let visible = filter_navigation(&tree, store.role().get());
        find_by_url(&visible, &url).and_then(|item| Resource::from_url(item.url))
    });

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">
                {move || match current_resource.get() {
                    Some(resource) => view! { <ResourceView resource=resource /> }.into_any(),
                    None => view! { <Dashboard /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Landing page
#[component]
fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let greeting = move || {
        let session = store_session(&store);
        match session.role {
            Some(role) if session.is_signed_in() => format!("Signed in as {}", role.as_str()),
            _ => "Not signed in".to_string(),
        }
    };

    view! {
        <section class="dashboard" data-page-category="dashboard">
            <header class="page__header">
                <h1>"Dashboard"</h1>
            </header>
            <p class="dashboard-greeting">{greeting}</p>
        </section>
    }
}
