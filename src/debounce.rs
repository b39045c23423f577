//! Search Debounce
//!
//! Delays committing rapidly changing search text until typing pauses.
//! The timer handle is owned explicitly: a new keystroke or component
//! teardown drops it, which cancels the pending timeout.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Pending-value bookkeeping, independent of any timer implementation.
///
/// Each keystroke gets a ticket; only the newest ticket can commit, and
/// only once. After `teardown` nothing commits.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchDebounce {
    latest: u64,
    pending: Option<String>,
    torn_down: bool,
}

impl SearchDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record new raw text, superseding any earlier pending value
    pub fn input(&mut self, text: impl Into<String>) -> u64 {
        self.latest += 1;
        self.pending = Some(text.into());
        self.latest
    }

    /// Timer for `ticket` expired; returns the value to commit, if any
    pub fn fire(&mut self, ticket: u64) -> Option<String> {
        if self.torn_down || ticket != self.latest {
            return None;
        }
        self.pending.take()
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Timer-backed debouncer bound to the current reactive owner
#[derive(Clone, Copy)]
pub struct Debouncer {
    state: StoredValue<SearchDebounce>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl Debouncer {
    /// Create a debouncer that is torn down with the owning component
    pub fn new(delay_ms: u32) -> Self {
        let debouncer = Self {
            state: StoredValue::new(SearchDebounce::new()),
            timer: StoredValue::new_local(None),
            delay_ms,
        };
        on_cleanup(move || debouncer.teardown());
        debouncer
    }

    /// Schedule `on_commit` for `text`, replacing any earlier schedule
    pub fn push(&self, text: String, on_commit: impl FnOnce(String) + 'static) {
        let Some(ticket) = self.state.try_update_value(|s| s.input(text)) else {
            return;
        };
        let state = self.state;
        let timeout = Timeout::new(self.delay_ms, move || {
            if let Some(value) = state.try_update_value(|s| s.fire(ticket)).flatten() {
                on_commit(value);
            }
        });
        // dropping the previous handle cancels it
        self.timer.try_update_value(|slot| *slot = Some(timeout));
    }

    pub fn teardown(&self) {
        self.state.try_update_value(|s| s.teardown());
        self.timer.try_update_value(|slot| *slot = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_query::ListQuery;

    #[test]
    fn test_rapid_typing_commits_last_value_once() {
        let mut debounce = SearchDebounce::new();
        let tickets: Vec<u64> = ["ab", "abc", "abcd"]
            .into_iter()
            .map(|text| debounce.input(text))
            .collect();

        let committed: Vec<String> = tickets.iter().filter_map(|t| debounce.fire(*t)).collect();
        assert_eq!(committed, vec!["abcd".to_string()]);

        // a late duplicate expiry commits nothing
        assert_eq!(debounce.fire(tickets[2]), None);
    }

    #[test]
    fn test_single_commit_means_single_page_reset() {
        let mut debounce = SearchDebounce::new();
        let mut query = ListQuery::default().with_page_index(5);
        let mut resets = 0;

        let tickets: Vec<u64> = ["ab", "abc", "abcd"].into_iter().map(|t| debounce.input(t)).collect();
        for ticket in tickets {
            if let Some(text) = debounce.fire(ticket) {
                query = query.with_search(text);
                resets += 1;
            }
        }

        assert_eq!(resets, 1);
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "abcd");
    }

    #[test]
    fn test_teardown_drops_orphaned_update() {
        let mut debounce = SearchDebounce::new();
        let ticket = debounce.input("orphan");
        assert!(debounce.is_pending());
        debounce.teardown();
        assert_eq!(debounce.fire(ticket), None);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_pause_between_keystrokes_commits_each() {
        let mut debounce = SearchDebounce::new();
        let first = debounce.input("a");
        assert_eq!(debounce.fire(first).as_deref(), Some("a"));
        let second = debounce.input("ab");
        assert_eq!(debounce.fire(second).as_deref(), Some("ab"));
    }
}
