//! Data Table Component

use leptos::prelude::*;

/// Prepared row: render key and cell texts
pub type RowCells = (String, Vec<String>);

/// Plain table over pre-rendered cells
#[component]
pub fn DataTable(
    headers: &'static [&'static str],
    #[prop(into)] rows: Signal<Vec<RowCells>>,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|row| row.0.clone()
                    children=move |(_, cells)| {
                        view! {
                            <tr>{cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}</tr>
                        }
                    }
                />
            </tbody>
        </table>
        <Show when=move || rows.with(Vec::is_empty)>
            <p class="empty-state">"No records found"</p>
        </Show>
    }
}
