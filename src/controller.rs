//! List-View Controller
//!
//! Per-page pagination, search and date-range state, and the loader that
//! keeps one list endpoint in sync with it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::api::{self, ListEndpoint, ListPage};
use crate::config::AppConfig;
use crate::debounce::Debouncer;
use crate::error::ApiError;
use crate::list_query::{DateRangeSelection, ListQuery, PerPage};
use crate::query_cache::QueryCache;

/// Filter and pagination state owned by one list page
#[derive(Clone, Copy)]
pub struct ListController {
    /// Parameters the loader observes; replaced on every change
    pub query: RwSignal<ListQuery>,
    /// Raw search box text, updated on every keystroke
    pub search_input: RwSignal<String>,
    /// Picker selection as last reported
    pub date_range: RwSignal<DateRangeSelection>,
    debouncer: Debouncer,
}

/// Create the controller for the current page component
pub fn use_list_controller(config: &AppConfig) -> ListController {
    ListController {
        query: RwSignal::new(ListQuery::new(config.default_per_page)),
        search_input: RwSignal::new(String::new()),
        date_range: RwSignal::new(DateRangeSelection::cleared()),
        debouncer: Debouncer::new(config.search_debounce_ms),
    }
}

impl ListController {
    pub fn on_search_input(&self, text: String) {
        self.search_input.set(text.clone());
        let controller = *self;
        self.debouncer
            .push(text, move |committed| controller.commit_search(committed));
    }

    /// Apply debounced search text; a value equal to the current search is a no-op
    pub fn commit_search(&self, committed: String) {
        let unchanged = self
            .query
            .try_with_untracked(|q| q.search == committed)
            .unwrap_or(true);
        if !unchanged {
            self.query.try_update(|q| *q = q.with_search(committed));
        }
    }

    /// `ui_index` is the table widget's 0-based page index
    pub fn on_page_change(&self, ui_index: u32) {
        self.query.update(|q| *q = q.with_page_index(ui_index));
    }

    pub fn on_per_page_change(&self, per_page: PerPage) {
        self.query.update(|q| *q = q.with_per_page(per_page));
    }

    pub fn on_date_range(&self, selection: DateRangeSelection) {
        self.date_range.set(selection);
        self.query.update(|q| *q = q.with_date_range(selection));
    }
}

/// What the page should show when its request key changes
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStart<T> {
    /// Cached page for the key, or empty rows on a miss
    pub page: ListPage<T>,
    /// False when an identical request is already in flight
    pub fetch: bool,
}

/// Cache-backed bookkeeping for one list page, independent of signals.
///
/// Results are cached under the key they were requested with; they are
/// only handed back for display while that key is still the current one.
#[derive(Debug, Clone)]
pub struct ListLoad<T> {
    cache: QueryCache<ListPage<T>>,
}

impl<T: Clone> Default for ListLoad<T> {
    fn default() -> Self {
        Self {
            cache: QueryCache::new(),
        }
    }
}

impl<T: Clone> ListLoad<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, key: &str) -> LoadStart<T> {
        LoadStart {
            page: self.cache.cached(key).unwrap_or_default(),
            fetch: self.cache.begin(key),
        }
    }

    /// Record the result for `key`; returns it for display only if `key`
    /// is still `current`
    pub fn complete(
        &mut self,
        key: &str,
        current: Option<&str>,
        result: Result<ListPage<T>, ApiError>,
    ) -> Option<Result<ListPage<T>, ApiError>> {
        match &result {
            Ok(page) => self.cache.finish(key, page.clone()),
            Err(_) => self.cache.fail(key),
        }
        (current == Some(key)).then_some(result)
    }
}

/// Loader state for one list endpoint
pub struct ListData<T: Send + Sync + 'static> {
    pub page: RwSignal<ListPage<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
}

impl<T: Send + Sync + 'static> Clone for ListData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListData<T> {}

/// Re-run the GET whenever the controller's query changes.
///
/// Identical in-flight requests are issued once, cached pages are shown
/// immediately (a miss shows no rows), and a response for a query that is
/// no longer current is cached but not displayed.
pub fn use_list_data<T>(
    endpoint: ListEndpoint,
    controller: ListController,
    token: Signal<Option<String>>,
) -> ListData<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let data = ListData {
        page: RwSignal::new(ListPage::default()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    };
    let load = StoredValue::new(ListLoad::<T>::new());

    Effect::new(move |_| {
        let query = controller.query.get();
        let token = token.get();
        let key = endpoint.request_key(&query);

        let Some(start) = load.try_update_value(|l| l.start(&key)) else {
            return;
        };
        data.page.set(start.page);
        data.error.set(None);
        data.loading.set(true);
        if !start.fetch {
            log::debug!("[LIST] {} already in flight", key);
            return;
        }

        let config = config.clone();
        spawn_local(async move {
            let result = api::fetch_list::<T>(&config, token.as_deref(), endpoint, &query).await;
            match &result {
                Ok(fresh) => log::debug!("[LIST] {} -> {} rows", key, fresh.rows.len()),
                Err(err) => log::error!("[LIST] {} failed: {}", key, err),
            }
            let current = controller
                .query
                .try_with_untracked(|q| endpoint.request_key(q));
            let shown = load
                .try_update_value(|l| l.complete(&key, current.as_deref(), result))
                .flatten();

            match shown {
                Some(Ok(fresh)) => {
                    data.page.try_set(fresh);
                    data.error.try_set(None);
                }
                Some(Err(err)) => {
                    data.error.try_set(Some(err));
                }
                None => return,
            }
            data.loading.try_set(false);
        });
    });

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: &[u32]) -> ListPage<u32> {
        ListPage {
            rows: ids.to_vec(),
            total_items: None,
            total_pages: None,
        }
    }

    fn controller() -> (Owner, ListController) {
        let owner = Owner::new();
        owner.set();
        (owner, use_list_controller(&AppConfig::default()))
    }

    #[test]
    fn test_cache_miss_shows_empty_rows() {
        let mut load = ListLoad::new();
        let start = load.start("/admins?page=1");
        assert!(start.fetch);
        load.complete("/admins?page=1", Some("/admins?page=1"), Ok(page(&[1, 2])));

        let next = load.start("/admins?page=2");
        assert!(next.fetch);
        assert!(next.page.rows.is_empty());

        let back = load.start("/admins?page=1");
        assert_eq!(back.page.rows, vec![1, 2]);
    }

    #[test]
    fn test_stale_response_cached_not_shown() {
        let mut load = ListLoad::new();
        load.start("k1");
        load.start("k2");

        let late = load.complete("k1", Some("k2"), Ok(page(&[9])));
        assert_eq!(late, None);
        // still available the next time k1 becomes current
        assert_eq!(load.start("k1").page.rows, vec![9]);

        let fresh = load.complete("k2", Some("k2"), Ok(page(&[3])));
        assert_eq!(fresh, Some(Ok(page(&[3]))));
    }

    #[test]
    fn test_identical_request_started_once() {
        let mut load: ListLoad<u32> = ListLoad::new();
        assert!(load.start("k").fetch);
        assert!(!load.start("k").fetch);
        load.complete("k", Some("k"), Ok(page(&[])));
        assert!(load.start("k").fetch);
    }

    #[test]
    fn test_failure_for_current_key_is_shown() {
        let mut load: ListLoad<u32> = ListLoad::new();
        load.start("k");
        let shown = load.complete("k", Some("k"), Err(ApiError::Unsuccessful));
        assert_eq!(shown, Some(Err(ApiError::Unsuccessful)));
        assert!(load.start("k").fetch);
    }

    #[test]
    fn test_commit_equal_to_current_search_keeps_page() {
        let (_owner, controller) = controller();
        controller.on_page_change(2);
        controller.commit_search(String::new());
        assert_eq!(controller.query.get_untracked().page, 3);

        controller.commit_search("acme".to_string());
        let query = controller.query.get_untracked();
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "acme");
    }

    #[test]
    fn test_date_range_selection_is_stored() {
        use chrono::NaiveDate;

        let (_owner, controller) = controller();
        controller.on_page_change(4);
        let half = DateRangeSelection::new(NaiveDate::from_ymd_opt(2024, 1, 1), None);
        controller.on_date_range(half);

        assert_eq!(controller.date_range.get_untracked(), half);
        let query = controller.query.get_untracked();
        assert_eq!(query.page, 1);
        assert_eq!(query.start_date, None);
        assert_eq!(query.end_date, None);
    }

    #[test]
    fn test_per_page_change_through_controller() {
        let (_owner, controller) = controller();
        controller.on_page_change(2);
        controller.on_per_page_change(PerPage::Fifty);
        let query = controller.query.get_untracked();
        assert_eq!((query.page, query.per_page), (1, PerPage::Fifty));
    }
}
