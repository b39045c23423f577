//! Pagination Component
//!
//! Prev/next and rows-per-page controls. Page events are emitted as
//! 0-based indices, like a table widget would report them.

use leptos::prelude::*;

use crate::controller::ListController;
use crate::list_query::PerPage;

#[component]
pub fn Pagination(
    controller: ListController,
    #[prop(into)] has_next: Signal<bool>,
    #[prop(into)] total_pages: Signal<Option<u32>>,
    #[prop(into)] total_items: Signal<Option<u64>>,
) -> impl IntoView {
    let page_index = move || controller.query.with(|q| q.page_index());

    let label = move || {
        let page = page_index() + 1;
        let pages = match total_pages.get() {
            Some(total) => format!("Page {} of {}", page, total.max(1)),
            None => format!("Page {}", page),
        };
        match total_items.get() {
            Some(count) => format!("{} · {} records", pages, count),
            None => pages,
        }
    };

    let on_per_page = move |ev: leptos::ev::Event| {
        let chosen = event_target_value(&ev).parse::<u32>().ok().and_then(PerPage::from_value);
        if let Some(per_page) = chosen {
            controller.on_per_page_change(per_page);
        }
    };

    view! {
        <div class="pagination">
            <button
                class="page-prev"
                disabled=move || page_index() == 0
                on:click=move |_| controller.on_page_change(page_index().saturating_sub(1))
            >
                "‹ Prev"
            </button>
            <span class="page-label">{label}</span>
            <button
                class="page-next"
                disabled=move || !has_next.get()
                on:click=move |_| controller.on_page_change(page_index() + 1)
            >
                "Next ›"
            </button>
            <select class="per-page" on:change=on_per_page>
                {PerPage::ALL
                    .into_iter()
                    .map(|option| {
                        let value = option.value();
                        let selected = move || controller.query.with(|q| q.per_page == option);
                        view! {
                            <option value=value.to_string() selected=selected>
                                {format!("{} / page", value)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
