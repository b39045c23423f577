//! Sidebar Component
//!
//! Renders the navigation tree pruned for the session's role.

use leptos::prelude::*;

use crate::navigation::{filter_navigation, navigation_tree, NavItem};
use crate::store::{
    store_navigate, store_session, store_sign_out, use_app_store, AppStateStoreFields, AppStore,
};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let tree = navigation_tree();
    let visible = Memo::new(move |_| filter_navigation(&tree, store.role().get()));

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"AdReseller Admin"</div>
            {move || nav_list(store, visible.get(), 0)}
            <Show when=move || store_session(&store).is_signed_in()>
                <button class="sidebar-signout" on:click=move |_| store_sign_out(&store)>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}

fn nav_list(store: AppStore, items: Vec<NavItem>, depth: usize) -> AnyView {
    view! {
        <ul class="nav-list" data-depth=depth.to_string()>
            {items
                .into_iter()
                .map(|item| {
                    let url = item.url;
                    let navigable = item.is_navigable();
                    let is_active = move || store.current_url().get() == url;
                    let children = item
                        .items
                        .filter(|c| !c.is_empty())
                        .map(|c| nav_list(store, c, depth + 1));
                    view! {
                        <li class="nav-item" class:active=is_active>
                            {if navigable {
                                view! {
                                    <a
                                        href="#"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            store_navigate(&store, url);
                                        }
                                    >
                                        <span class="nav-icon">{item.icon.unwrap_or("")}</span>
                                        <span class="nav-title">{item.title}</span>
                                    </a>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <span class="nav-group">
                                        <span class="nav-icon">{item.icon.unwrap_or("")}</span>
                                        <span class="nav-title">{item.title}</span>
                                    </span>
                                }
                                    .into_any()
                            }}
                            {children}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
