//! Ad-Account Reseller Admin Dashboard Entry Point

mod api;
mod app;
mod components;
mod config;
mod controller;
mod debounce;
mod error;
mod list_query;
mod logging;
mod models;
mod navigation;
mod query_cache;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
