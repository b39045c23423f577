//! REST List Client
//!
//! Per-endpoint request/response contracts for the list pages. Parameter
//! names and total reporting differ between integrations and are kept as
//! each endpoint defines them rather than normalised.

mod endpoints;

pub use endpoints::Resource;

use reqwasm::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::list_query::ListQuery;

/// Query key used for rows-per-page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerPageKey {
    /// `per_page`
    PerPage,
    /// `limit`
    Limit,
}

/// Query keys used for the date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKeys {
    /// `start_date` / `end_date`
    Snake,
    /// `startDate` / `endDate`
    Camel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamStyle {
    pub per_page_key: PerPageKey,
    pub date_keys: DateKeys,
}

impl ParamStyle {
    pub const SNAKE: Self = Self {
        per_page_key: PerPageKey::PerPage,
        date_keys: DateKeys::Snake,
    };

    pub const LIMIT_CAMEL: Self = Self {
        per_page_key: PerPageKey::Limit,
        date_keys: DateKeys::Camel,
    };

    fn per_page_name(&self) -> &'static str {
        match self.per_page_key {
            PerPageKey::PerPage => "per_page",
            PerPageKey::Limit => "limit",
        }
    }

    fn date_names(&self) -> (&'static str, &'static str) {
        match self.date_keys {
            DateKeys::Snake => ("start_date", "end_date"),
            DateKeys::Camel => ("startDate", "endDate"),
        }
    }
}

/// How an endpoint reports the size of the full result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalsStyle {
    /// `total` item count
    Total,
    /// `totalPages`
    TotalPages,
    /// Nothing beyond the returned rows
    RowCount,
}

/// One list integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEndpoint {
    pub path: &'static str,
    pub params: ParamStyle,
    pub totals: TotalsStyle,
}

impl ListEndpoint {
    pub const fn new(path: &'static str, params: ParamStyle, totals: TotalsStyle) -> Self {
        Self { path, params, totals }
    }

    pub fn query_string(&self, query: &ListQuery) -> String {
        build_query_string(query, self.params)
    }

    /// Cache key covering the full parameter tuple
    pub fn request_key(&self, query: &ListQuery) -> String {
        format!("{}?{}", self.path, self.query_string(query))
    }

    pub fn request_url(&self, config: &AppConfig, query: &ListQuery) -> String {
        format!("{}?{}", config.endpoint_url(self.path), self.query_string(query))
    }
}

/// Encode list parameters; an empty search and an absent range are omitted
pub fn build_query_string(query: &ListQuery, style: ParamStyle) -> String {
    let mut qs = form_urlencoded::Serializer::new(String::new());
    qs.append_pair("page", &query.page.to_string());
    qs.append_pair(style.per_page_name(), &query.per_page.value().to_string());
    let search = query.search.trim();
    if !search.is_empty() {
        qs.append_pair("search", search);
    }
    if let Some((start, end)) = query.iso_dates() {
        let (start_key, end_key) = style.date_names();
        qs.append_pair(start_key, &start);
        qs.append_pair(end_key, &end);
    }
    qs.finish()
}

/// One page of results plus whatever totals the endpoint reported
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub total_items: Option<u64>,
    pub total_pages: Option<u32>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_items: None,
            total_pages: None,
        }
    }
}

impl<T> ListPage<T> {
    /// Whether a page after `page` exists.
    ///
    /// Without reported totals a full page is taken to mean "maybe more".
    pub fn has_next(&self, page: u32, per_page: u32) -> bool {
        match self.total_pages {
            Some(total) => page < total,
            None => self.rows.len() as u32 >= per_page && per_page > 0,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    #[serde(default = "envelope_success_default")]
    success: bool,
    #[serde(default = "Option::default")]
    data: Option<Vec<T>>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    total_pages: Option<u32>,
}

fn envelope_success_default() -> bool {
    true
}

/// Decode a list body according to the endpoint's totals contract.
///
/// The body is either a bare array of rows or `{"response": {...}}`.
pub fn parse_list_response<T: DeserializeOwned>(
    body: &str,
    totals: TotalsStyle,
    per_page: u32,
) -> ApiResult<ListPage<T>> {
    let (rows, total, total_pages) = match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => (serde_json::from_value::<Vec<T>>(Value::Array(items))?, None, None),
        Value::Object(mut object) => {
            let Some(inner) = object.remove("response") else {
                return Err(ApiError::Decode {
                    message: "expected an array or a `response` envelope".to_string(),
                });
            };
            let response: Envelope<T> = serde_json::from_value(inner)?;
            if !response.success {
                return Err(ApiError::Unsuccessful);
            }
            (response.data.unwrap_or_default(), response.total, response.total_pages)
        }
        other => {
            return Err(ApiError::Decode {
                message: format!("expected an array or an object, got {}", other),
            })
        }
    };

    let page = match totals {
        TotalsStyle::Total => ListPage {
            total_pages: total.map(|t| pages_for(t, per_page)),
            total_items: total,
            rows,
        },
        TotalsStyle::TotalPages => ListPage {
            total_items: None,
            total_pages,
            rows,
        },
        TotalsStyle::RowCount => ListPage {
            total_items: None,
            total_pages: None,
            rows,
        },
    };
    Ok(page)
}

fn pages_for(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page as u64) as u32
}

/// GET one page from a list endpoint
pub async fn fetch_list<T: DeserializeOwned>(
    config: &AppConfig,
    token: Option<&str>,
    endpoint: ListEndpoint,
    query: &ListQuery,
) -> ApiResult<ListPage<T>> {
    let url = endpoint.request_url(config, query);
    log::debug!("[API] GET {}", url);

    let mut req = Request::get(&url);
    if let Some(token) = token {
        req = req.header("Authorization", &format!("Bearer {}", token));
    }
    let resp = req.send().await.map_err(|e| ApiError::Network {
        message: e.to_string(),
    })?;
    if !resp.ok() {
        log::warn!("[API] GET {} -> HTTP {}", url, resp.status());
        return Err(ApiError::Status {
            status: resp.status(),
        });
    }
    let body = resp.text().await.map_err(|e| ApiError::Network {
        message: e.to_string(),
    })?;
    parse_list_response(&body, endpoint.totals, query.per_page.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_query::{DateRangeSelection, PerPage};
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    fn january() -> DateRangeSelection {
        DateRangeSelection::new(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 1, 31),
        )
    }

    #[test]
    fn test_snake_style_query() {
        let query = ListQuery::new(PerPage::Fifty)
            .with_search("acme co")
            .with_date_range(january())
            .with_page_index(1);
        assert_eq!(
            build_query_string(&query, ParamStyle::SNAKE),
            "page=2&per_page=50&search=acme+co&start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[test]
    fn test_limit_camel_style_query() {
        let query = ListQuery::default().with_date_range(january());
        assert_eq!(
            build_query_string(&query, ParamStyle::LIMIT_CAMEL),
            "page=1&limit=25&startDate=2024-01-01&endDate=2024-01-31"
        );
    }

    #[test]
    fn test_cleared_range_and_empty_search_are_omitted() {
        let query = ListQuery::default()
            .with_date_range(january())
            .with_date_range(DateRangeSelection::cleared())
            .with_search("  ");
        let qs = build_query_string(&query, ParamStyle::SNAKE);
        assert_eq!(qs, "page=1&per_page=25");
    }

    #[test]
    fn test_request_key_differs_per_tuple() {
        let endpoint = ListEndpoint::new("/admins", ParamStyle::SNAKE, TotalsStyle::Total);
        let a = ListQuery::default();
        let b = a.with_page_index(1);
        assert_ne!(endpoint.request_key(&a), endpoint.request_key(&b));
        assert_eq!(endpoint.request_key(&a), endpoint.request_key(&a.clone()));
    }

    #[test]
    fn test_wrapped_total_response() {
        let body = r#"{"response":{"success":true,"data":[{"id":1},{"id":2}],"total":51}}"#;
        let page: ListPage<Row> = parse_list_response(body, TotalsStyle::Total, 25).unwrap();
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.total_items, Some(51));
        assert_eq!(page.total_pages, Some(3));
        assert!(page.has_next(2, 25));
        assert!(!page.has_next(3, 25));
    }

    #[test]
    fn test_wrapped_total_pages_response() {
        let body = r#"{"response":{"success":true,"data":[{"id":1}],"totalPages":4}}"#;
        let page: ListPage<Row> = parse_list_response(body, TotalsStyle::TotalPages, 25).unwrap();
        assert_eq!(page.total_pages, Some(4));
        assert_eq!(page.total_items, None);
    }

    #[test]
    fn test_bare_array_response() {
        let page: ListPage<Row> = parse_list_response(r#"[{"id":7}]"#, TotalsStyle::RowCount, 25).unwrap();
        assert_eq!(page.rows, vec![Row { id: 7 }]);
        assert_eq!(page.total_pages, None);
        assert!(!page.has_next(1, 25));
    }

    #[test]
    fn test_missing_data_defaults_to_empty() {
        let body = r#"{"response":{"success":true}}"#;
        let page: ListPage<Row> = parse_list_response(body, TotalsStyle::Total, 25).unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.total_items, None);
    }

    #[test]
    fn test_unsuccessful_envelope() {
        let body = r#"{"response":{"success":false,"data":[]}}"#;
        let err = parse_list_response::<Row>(body, TotalsStyle::Total, 25).unwrap_err();
        assert_eq!(err, ApiError::Unsuccessful);
    }

    #[test]
    fn test_envelope_rows_with_both_id_keys() {
        use crate::models::{Admin, TableRow};

        let body = r#"{"response":{"success":true,"data":[{"_id":"a1","id":"a1","name":"n","email":"e"}],"total":1}}"#;
        let page: ListPage<Admin> = parse_list_response(body, TotalsStyle::Total, 25).unwrap();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].key(), "a1");
        assert_eq!(page.total_pages, Some(1));
    }

    #[test]
    fn test_envelope_without_success_flag() {
        let body = r#"{"response":{"data":[],"total":0}}"#;
        let page: ListPage<Row> = parse_list_response(body, TotalsStyle::Total, 25).unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.total_items, Some(0));
    }

    #[test]
    fn test_bad_row_reports_field_error() {
        let body = r#"{"response":{"success":true,"data":[{"name":"no id"}]}}"#;
        match parse_list_response::<Row>(body, TotalsStyle::Total, 25) {
            Err(ApiError::Decode { message }) => {
                assert!(message.contains("missing field `id`"), "{}", message);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_object_without_envelope_is_decode_error() {
        let err = parse_list_response::<Row>(r#"{"rows":[]}"#, TotalsStyle::Total, 25).unwrap_err();
        assert!(matches!(err, ApiError::Decode { message } if message.contains("response")));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = parse_list_response::<Row>("<html>", TotalsStyle::Total, 25).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
