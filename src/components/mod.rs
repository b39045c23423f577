//! UI Components
//!
//! Leptos components for the dashboard shell and list pages.

mod sidebar;
mod search_box;
mod date_range_filter;
mod pagination;
mod data_table;
mod resource_page;

pub use sidebar::Sidebar;
pub use search_box::SearchBox;
pub use date_range_filter::DateRangeFilter;
pub use pagination::Pagination;
pub use data_table::DataTable;
pub use resource_page::ResourceView;
