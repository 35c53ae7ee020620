use std::time::Duration;

use brandkit_core::error::CoreError;

/// Page size the panels request.
pub const PANEL_PAGE_SIZE: i64 = 20;

/// Quiet period before a search keystroke turns into a query.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API including the version prefix,
    /// e.g. `http://localhost:3000/api/v1`.
    pub base_url: String,
    pub page_size: i64,
    pub search_debounce: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size: PANEL_PAGE_SIZE,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                        |
    /// |---------------------------------|--------------------------------|
    /// | `BRANDKIT_API_URL`              | `http://localhost:3000/api/v1` |
    /// | `BRANDKIT_PAGE_SIZE`            | `20`                           |
    /// | `BRANDKIT_SEARCH_DEBOUNCE_MS`   | `300`                          |
    pub fn from_env() -> Result<Self, CoreError> {
        let base_url = std::env::var("BRANDKIT_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/v1".into());
        let mut config = Self::new(base_url);

        if let Ok(raw) = std::env::var("BRANDKIT_PAGE_SIZE") {
            config.page_size = raw
                .parse()
                .ok()
                .filter(|size: &i64| *size >= 1)
                .ok_or_else(|| {
                    CoreError::Validation(format!("BRANDKIT_PAGE_SIZE must be >= 1, got '{raw}'"))
                })?;
        }

        if let Ok(raw) = std::env::var("BRANDKIT_SEARCH_DEBOUNCE_MS") {
            let millis: u64 = raw.parse().map_err(|_| {
                CoreError::Validation(format!(
                    "BRANDKIT_SEARCH_DEBOUNCE_MS must be a valid u64, got '{raw}'"
                ))
            })?;
            config.search_debounce = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000/api/v1")
    }
}
