//! Incremental ("infinite scroll") consumer of a paginated collection.
//!
//! Pages for the current query are fetched one after another and kept in
//! order; [`ListConsumer::items`] is their concatenation. Changing the query
//! or resetting bumps a generation counter so responses to superseded
//! requests are dropped instead of being mixed into the new sequence.
//!
//! State lives behind a [`tokio::sync::Mutex`] that is released before any
//! request is sent. The `is_loading` flag keeps at most one page request per
//! generation in flight.

use std::sync::Arc;

use brandkit_core::pagination::{PageRequest, PageResult};
use brandkit_core::resource::BrandEntity;
use tokio::sync::Mutex;

use crate::context::ResourceContext;
use crate::error::ClientError;

/// What a load call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and stored.
    Loaded { page: i64, items: usize },
    /// Nothing was requested: a load is in flight, the end was reached or
    /// the query did not change.
    Skipped,
    /// The response arrived after a query change or reset and was dropped.
    Stale,
}

/// Point-in-time copy of the consumer state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<E> {
    pub items: Vec<E>,
    pub query: String,
    pub pages_loaded: usize,
    pub is_loading: bool,
    pub is_reaching_end: bool,
    pub error: Option<String>,
}

struct ListState<E> {
    query: String,
    /// Loaded pages in page order, at most one per page number.
    pages: Vec<PageResult<E>>,
    is_loading: bool,
    generation: u64,
    error: Option<String>,
}

impl<E: Clone> ListState<E> {
    fn new() -> Self {
        Self {
            query: String::new(),
            pages: Vec::new(),
            is_loading: false,
            generation: 0,
            error: None,
        }
    }

    fn next_page(&self) -> i64 {
        self.pages.last().map_or(1, |p| p.page + 1)
    }

    fn is_reaching_end(&self) -> bool {
        self.pages.last().is_some_and(|p| !p.has_more())
    }

    fn insert(&mut self, page: PageResult<E>) {
        match self.pages.binary_search_by_key(&page.page, |p| p.page) {
            Ok(idx) => self.pages[idx] = page,
            Err(idx) => self.pages.insert(idx, page),
        }
    }

    fn items(&self) -> Vec<E> {
        self.pages
            .iter()
            .flat_map(|p| p.items.iter().cloned())
            .collect()
    }

    /// Drop everything loaded so far and start a new generation.
    fn restart(&mut self) -> u64 {
        self.generation += 1;
        self.pages.clear();
        self.error = None;
        self.is_loading = true;
        self.generation
    }
}

/// Incremental list over one [`ResourceContext`].
pub struct ListConsumer<C: ResourceContext> {
    context: Arc<C>,
    page_size: i64,
    state: Mutex<ListState<C::Entity>>,
}

impl<C: ResourceContext> ListConsumer<C> {
    pub fn new(context: Arc<C>, page_size: i64) -> Self {
        Self {
            context,
            page_size,
            state: Mutex::new(ListState::new()),
        }
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Fetch the page after the last loaded one.
    ///
    /// Skipped while another load is in flight or once the last page has
    /// been seen. On failure the loaded pages stay as they were, the error
    /// is recorded and a later call retries the same page.
    pub async fn load_more(&self) -> Result<LoadOutcome, ClientError> {
        let (request, generation) = {
            let mut state = self.state.lock().await;
            if state.is_loading || state.is_reaching_end() {
                return Ok(LoadOutcome::Skipped);
            }
            state.is_loading = true;
            let request =
                PageRequest::new(state.next_page(), self.page_size).with_query(state.query.clone());
            (request, state.generation)
        };

        self.fetch(request, generation).await
    }

    /// Switch to a new query and fetch its first page.
    ///
    /// A query equal to the current one is a no-op.
    pub async fn set_query(&self, query: impl Into<String>) -> Result<LoadOutcome, ClientError> {
        let query = query.into();
        let (request, generation) = {
            let mut state = self.state.lock().await;
            if state.query == query {
                return Ok(LoadOutcome::Skipped);
            }
            state.query = query;
            let generation = state.restart();
            let request = PageRequest::new(1, self.page_size).with_query(state.query.clone());
            (request, generation)
        };

        tracing::debug!(query = %request.query.as_deref().unwrap_or(""), "List query changed");
        self.fetch(request, generation).await
    }

    /// Drop all loaded pages and fetch page 1 again under the current query.
    pub async fn reset(&self) -> Result<LoadOutcome, ClientError> {
        let (request, generation) = {
            let mut state = self.state.lock().await;
            let generation = state.restart();
            let request = PageRequest::new(1, self.page_size).with_query(state.query.clone());
            (request, generation)
        };

        self.fetch(request, generation).await
    }

    async fn fetch(&self, request: PageRequest, generation: u64) -> Result<LoadOutcome, ClientError> {
        let result = self.context.list(&request).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(
                page = request.page,
                generation,
                current = state.generation,
                "Dropping stale page response",
            );
            return Ok(LoadOutcome::Stale);
        }
        state.is_loading = false;

        match result {
            Ok(page) => {
                let outcome = LoadOutcome::Loaded {
                    page: page.page,
                    items: page.items.len(),
                };
                let kind = <C::Entity as BrandEntity>::KIND;
                tracing::debug!(
                    %kind,
                    page = page.page,
                    total = page.total,
                    has_more = page.has_more(),
                    "Loaded page",
                );
                state.error = None;
                state.insert(page);
                Ok(outcome)
            }
            Err(err) => {
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// The accumulated sequence for the current query.
    pub async fn items(&self) -> Vec<C::Entity> {
        self.state.lock().await.items()
    }

    pub async fn snapshot(&self) -> ListSnapshot<C::Entity> {
        let state = self.state.lock().await;
        ListSnapshot {
            items: state.items(),
            query: state.query.clone(),
            pages_loaded: state.pages.len(),
            is_loading: state.is_loading,
            is_reaching_end: state.is_reaching_end(),
            error: state.error.clone(),
        }
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.is_loading
    }

    pub async fn is_reaching_end(&self) -> bool {
        self.state.lock().await.is_reaching_end()
    }

    /// Message of the last failed fetch, cleared by the next success.
    pub async fn error(&self) -> Option<String> {
        self.state.lock().await.error.clone()
    }

    pub async fn query(&self) -> String {
        self.state.lock().await.query.clone()
    }

    pub async fn pages_loaded(&self) -> usize {
        self.state.lock().await.pages.len()
    }
}
