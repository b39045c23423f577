//! Search Box Component

use leptos::prelude::*;

use crate::controller::ListController;

/// Free-text search; the box shows every keystroke, the query gets the
/// debounced value
#[component]
pub fn SearchBox(
    controller: ListController,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-box"
            placeholder=placeholder.unwrap_or("Search...")
            prop:value=move || controller.search_input.get()
            on:input=move |ev| controller.on_search_input(event_target_value(&ev))
        />
    }
}
