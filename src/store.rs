//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::session::{Role, Session};

/// Session snapshot and the page being shown
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Role from the session; `None` before sign-in or for unknown roles
    pub role: Option<Role>,
    /// Bearer token for API calls
    pub token: Option<String>,
    /// Sidebar url of the active page
    pub current_url: String,
}

impl AppState {
    pub fn from_session(session: Session) -> Self {
        Self {
            role: session.role,
            token: session.token,
            current_url: "/dashboard".to_string(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current session snapshot (tracked)
pub fn store_session(store: &AppStore) -> Session {
    Session {
        role: store.role().get(),
        token: store.token().get(),
    }
}

/// Replace the session (login boundary)
pub fn store_set_session(store: &AppStore, session: Session) {
    store.role().set(session.role);
    store.token().set(session.token);
}

/// Drop the session and stored credentials (logout boundary)
pub fn store_sign_out(store: &AppStore) {
    Session::clear_storage();
    store_set_session(store, Session::default());
    store.current_url().set("/dashboard".to_string());
    log::info!("[STORE] signed out");
}

/// Switch the active page
pub fn store_navigate(store: &AppStore, url: &str) {
    log::debug!("[STORE] navigate to {}", url);
    store.current_url().set(url.to_string());
}
