//! Shared query parameter types for API handlers.

use brandkit_core::error::CoreError;
use brandkit_core::pagination::{PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::Deserialize;

/// List parameters (`?page=&pageSize=&query=`).
///
/// `page_size` is accepted as an alias of `pageSize`. Missing values fall
/// back to page 1 and [`DEFAULT_PAGE_SIZE`]; oversized pages are clamped to
/// [`MAX_PAGE_SIZE`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<i64>,
    #[serde(alias = "page_size")]
    pub page_size: Option<i64>,
    pub query: Option<String>,
}

impl PageParams {
    /// Convert into a validated [`PageRequest`].
    pub fn into_request(self) -> Result<PageRequest, CoreError> {
        let page_size = self
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        let mut request = PageRequest::new(self.page.unwrap_or(1), page_size);
        if let Some(query) = self.query {
            request = request.with_query(query);
        }
        request.validate()?;
        Ok(request)
    }
}
