//! Application Configuration
//!
//! Build-time settings for the dashboard, provided via context at startup.

use crate::list_query::PerPage;

/// Quiescence window for committing search text
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 500;

const DEFAULT_API_BASE_URL: &str = "/api";

/// Dashboard-wide settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST API (no trailing slash)
    pub api_base_url: String,
    /// Debounce window for the list search boxes
    pub search_debounce_ms: u32,
    /// Rows per page when a list page mounts
    pub default_per_page: PerPage,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            default_per_page: PerPage::default(),
        }
    }
}

impl AppConfig {
    /// Build config from compile-time environment overrides
    ///
    /// - `ADMIN_API_BASE_URL`
    /// - `ADMIN_SEARCH_DEBOUNCE_MS`
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("ADMIN_API_BASE_URL"),
            option_env!("ADMIN_SEARCH_DEBOUNCE_MS"),
        )
    }

    fn from_overrides(base_url: Option<&str>, debounce_ms: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(ms) = debounce_ms.and_then(|v| v.trim().parse::<u32>().ok()) {
            config.search_debounce_ms = ms;
        }
        config
    }

    /// Join an endpoint path onto the API base URL
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
