//! Page request and page result envelope shared by the server and the client.
//!
//! [`PageResult`] keeps one canonical value per field. Its wire form carries
//! both camelCase and snake_case spellings of `pageSize` and `totalPages`
//! because existing list consumers read either one; both are written from
//! the same value and either is accepted on the way in.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Page size used when the caller does not send one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size the server will honour.
pub const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// PageRequest
// ---------------------------------------------------------------------------

/// One page of a (possibly filtered) collection, 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            query: None,
        }
    }

    /// Attach a free-text query. Empty strings are kept as `None`.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Reject page numbers below 1 and non-positive page sizes.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.page < 1 {
            return Err(CoreError::Validation(format!(
                "page must be >= 1, got {}",
                self.page
            )));
        }
        if self.page_size < 1 {
            return Err(CoreError::Validation(format!(
                "pageSize must be >= 1, got {}",
                self.page_size
            )));
        }
        Ok(())
    }

    /// Number of matching rows that precede this page, or `None` when that
    /// count does not fit in an `i64` (the page is necessarily past the end).
    pub fn offset(&self) -> Option<i64> {
        (self.page - 1).max(0).checked_mul(self.page_size)
    }

    /// The lower-cased query used for case-insensitive matching, or `None`
    /// when no filtering applies.
    pub fn search_term(&self) -> Option<String> {
        self.query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if page_size <= 0 || total <= 0 {
        return 1;
    }
    (total - 1) / page_size + 1
}

// ---------------------------------------------------------------------------
// PageResult
// ---------------------------------------------------------------------------

/// A single page of results plus the post-filter total.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total: i64, request: &PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
        }
    }

    /// Result for a query that matched nothing.
    pub fn empty(request: &PageRequest) -> Self {
        Self::new(Vec::new(), 0, request)
    }

    pub fn total_pages(&self) -> i64 {
        total_pages(self.total, self.page_size)
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutgoingPage<'a, T> {
    items: &'a [T],
    total: i64,
    page: i64,
    page_size: i64,
    total_pages: i64,
    has_more: bool,
    #[serde(rename = "total_pages")]
    total_pages_snake: i64,
    #[serde(rename = "page_size")]
    page_size_snake: i64,
}

impl<T: Serialize> Serialize for PageResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let total_pages = self.total_pages();
        OutgoingPage {
            items: &self.items,
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages,
            has_more: self.has_more(),
            total_pages_snake: total_pages,
            page_size_snake: self.page_size,
        }
        .serialize(serializer)
    }
}

#[derive(Deserialize)]
struct IncomingPage<T> {
    items: Vec<T>,
    total: i64,
    page: i64,
    #[serde(rename = "pageSize")]
    page_size_camel: Option<i64>,
    #[serde(rename = "page_size")]
    page_size_snake: Option<i64>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PageResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let incoming = IncomingPage::<T>::deserialize(deserializer)?;
        let page_size = incoming
            .page_size_camel
            .or(incoming.page_size_snake)
            .ok_or_else(|| de::Error::missing_field("pageSize"))?;
        Ok(PageResult {
            items: incoming.items,
            total: incoming.total,
            page: incoming.page,
            page_size,
        })
    }
}
