//! List Query Parameters
//!
//! Pagination, search and date-range state for one resource table.
//! Every transition returns a fresh value; nothing is mutated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Allowed rows-per-page values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PerPage {
    #[default]
    TwentyFive,
    Fifty,
    SeventyFive,
    Hundred,
}

impl PerPage {
    pub const ALL: [PerPage; 4] = [Self::TwentyFive, Self::Fifty, Self::SeventyFive, Self::Hundred];

    pub fn value(self) -> u32 {
        match self {
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::SeventyFive => 75,
            Self::Hundred => 100,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

impl TryFrom<u32> for PerPage {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("unsupported page size: {}", value))
    }
}

impl From<PerPage> for u32 {
    fn from(per_page: PerPage) -> Self {
        per_page.value()
    }
}

/// Selection reported by the date-range picker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeSelection {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRangeSelection {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    /// Both ends, or nothing; a half-open range counts as no range
    pub fn complete(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.from.zip(self.to)
    }
}

/// Query parameters for one list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number as the API expects it
    pub page: u32,
    pub per_page: PerPage,
    pub search: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(PerPage::default())
    }
}

impl ListQuery {
    pub fn new(per_page: PerPage) -> Self {
        Self {
            page: 1,
            per_page,
            search: String::new(),
            start_date: None,
            end_date: None,
        }
    }

    /// Table widgets report 0-based page indices
    pub fn with_page_index(&self, ui_index: u32) -> Self {
        Self {
            page: ui_index.saturating_add(1),
            ..self.clone()
        }
    }

    /// 0-based index of the current page for the table widget
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    pub fn with_per_page(&self, per_page: PerPage) -> Self {
        Self {
            page: 1,
            per_page,
            ..self.clone()
        }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            page: 1,
            search: search.into(),
            ..self.clone()
        }
    }

    pub fn with_date_range(&self, selection: DateRangeSelection) -> Self {
        let (start_date, end_date) = match selection.complete() {
            Some((from, to)) => (Some(from), Some(to)),
            None => (None, None),
        };
        Self {
            page: 1,
            start_date,
            end_date,
            ..self.clone()
        }
    }

    /// ISO calendar date (`YYYY-MM-DD`) strings for the request
    pub fn iso_dates(&self) -> Option<(String, String)> {
        self.start_date
            .zip(self.end_date)
            .map(|(from, to)| (iso_date(from), iso_date(to)))
    }
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse the value of an `<input type="date">`
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ui_page_index_is_shifted_by_one() {
        let query = ListQuery::default().with_page_index(4);
        assert_eq!(query.page, 5);
        assert_eq!(query.page_index(), 4);
    }

    #[test]
    fn test_per_page_change_resets_page() {
        let on_page_three = ListQuery::default().with_page_index(2);
        assert_eq!(on_page_three.page, 3);

        let resized = on_page_three.with_per_page(PerPage::Fifty);
        assert_eq!(resized.page, 1);
        assert_eq!(resized.per_page.value(), 50);
        // previous value untouched
        assert_eq!(on_page_three.page, 3);
    }

    #[test]
    fn test_search_commit_resets_page() {
        let query = ListQuery::default().with_page_index(7).with_search("acme");
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "acme");
    }

    #[test]
    fn test_date_range_set_then_cleared() {
        let base = ListQuery::default().with_page_index(3);
        let ranged = base.with_date_range(DateRangeSelection::new(
            Some(date(2024, 1, 1)),
            Some(date(2024, 1, 31)),
        ));
        assert_eq!(ranged.page, 1);
        assert_eq!(
            ranged.iso_dates(),
            Some(("2024-01-01".to_string(), "2024-01-31".to_string()))
        );

        let cleared = ranged.with_page_index(2).with_date_range(DateRangeSelection::cleared());
        assert_eq!(cleared.page, 1);
        assert_eq!(cleared.start_date, None);
        assert_eq!(cleared.end_date, None);
        assert_eq!(cleared.iso_dates(), None);
    }

    #[test]
    fn test_half_open_range_clears_both() {
        let ranged = ListQuery::default().with_date_range(DateRangeSelection::new(
            Some(date(2024, 1, 1)),
            Some(date(2024, 1, 31)),
        ));
        let half = ranged.with_date_range(DateRangeSelection::new(Some(date(2024, 2, 1)), None));
        assert_eq!(half.start_date, None);
        assert_eq!(half.end_date, None);
    }

    #[test]
    fn test_per_page_accepts_only_known_sizes() {
        assert_eq!(PerPage::from_value(75), Some(PerPage::SeventyFive));
        assert_eq!(PerPage::from_value(10), None);
        let parsed: PerPage = serde_json::from_str("100").unwrap();
        assert_eq!(parsed, PerPage::Hundred);
        assert!(serde_json::from_str::<PerPage>("30").is_err());
    }

    #[test]
    fn test_parse_iso_date_input() {
        assert_eq!(parse_iso_date("2024-01-31"), Some(date(2024, 1, 31)));
        assert_eq!(parse_iso_date(""), None);
    }
}
