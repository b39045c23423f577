//! Date Range Filter Component
//!
//! Two calendar inputs and a clear button. Every change is reported to the
//! controller; a range with only one end set counts as no range.

use leptos::prelude::*;

use crate::controller::ListController;
use crate::list_query::{iso_date, parse_iso_date, DateRangeSelection};

#[component]
pub fn DateRangeFilter(controller: ListController) -> impl IntoView {
    let shown = move |pick: fn(&DateRangeSelection) -> Option<chrono::NaiveDate>| {
        move || controller.date_range.with(|r| pick(r).map(iso_date).unwrap_or_default())
    };

    let on_from = move |ev: leptos::ev::Event| {
        let from = parse_iso_date(&event_target_value(&ev));
        let to = controller.date_range.with_untracked(|r| r.to);
        controller.on_date_range(DateRangeSelection::new(from, to));
    };
    let on_to = move |ev: leptos::ev::Event| {
        let to = parse_iso_date(&event_target_value(&ev));
        let from = controller.date_range.with_untracked(|r| r.from);
        controller.on_date_range(DateRangeSelection::new(from, to));
    };

    view! {
        <div class="date-range-filter">
            <input type="date" class="date-from" prop:value=shown(|r| r.from) on:change=on_from />
            <span class="date-sep">"–"</span>
            <input type="date" class="date-to" prop:value=shown(|r| r.to) on:change=on_to />
            <button
                class="date-clear"
                on:click=move |_| controller.on_date_range(DateRangeSelection::cleared())
            >
                "Clear"
            </button>
        </div>
    }
}
