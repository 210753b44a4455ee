//! Paginated Catalog Query
//!
//! Accumulating pager for the product listing: fixed-size pages fetched
//! one at a time, appended in request order into a single in-memory list
//! for infinite-scroll consumption, restarted from page 1 whenever the
//! filters change.
//!
//! Two guarantees matter here and are enforced structurally:
//!
//! - **Re-entry guard**: `load_next_page` is a no-op while a load is in
//!   flight; the `loading` flag is checked and set under one lock before
//!   the request is issued and cleared on completion or error.
//! - **Stale-response discard**: every first-page load bumps a request
//!   generation; a response is only applied if its generation is still
//!   the newest. An older in-flight request can never overwrite a newer
//!   one's result. There is no network cancellation, only discarding.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::db::models::Product;
use crate::db::repository::{ProductListQuery, ProductRepository};
use crate::db::{RepoResult, SortDirection};

/// Fixed page size used by the listing views
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Sort key for the catalog listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    Name,
    Price,
}

impl SortField {
    pub fn as_column(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Name => "name",
            SortField::Price => "price",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "created_at" => Some(SortField::CreatedAt),
            "name" => Some(SortField::Name),
            "price" => Some(SortField::Price),
            _ => None,
        }
    }
}

/// Combined filter state; changing any field restarts pagination
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFilters {
    pub search: String,
    pub category: Option<String>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for CatalogFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            sort_field: SortField::CreatedAt,
            // Newest first, matching the listing views
            sort_direction: SortDirection::Desc,
        }
    }
}

/// One fetched page: rows plus the backend's exact total
#[derive(Debug, Clone)]
pub struct CatalogPageResult {
    pub products: Vec<Product>,
    pub total: u64,
}

/// The backend the feed pulls pages from. Abstracted so the pager logic
/// can be exercised against a deterministic source.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(
        &self,
        filters: &CatalogFilters,
        page: usize,
        page_size: usize,
    ) -> RepoResult<CatalogPageResult>;
}

/// Live source backed by the product repository
pub struct RestCatalogSource {
    repo: ProductRepository,
}

impl RestCatalogSource {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CatalogSource for RestCatalogSource {
    async fn fetch_page(
        &self,
        filters: &CatalogFilters,
        page: usize,
        page_size: usize,
    ) -> RepoResult<CatalogPageResult> {
        let page_result = self
            .repo
            .list_paginated(&ProductListQuery {
                page,
                page_size,
                search: Some(filters.search.clone()).filter(|s| !s.is_empty()),
                category: filters.category.clone(),
                sort_by: filters.sort_field.as_column().to_string(),
                direction: filters.sort_direction,
            })
            .await?;
        Ok(CatalogPageResult {
            products: page_result.products,
            total: page_result.total,
        })
    }
}

#[derive(Debug, Default)]
struct FeedState {
    items: Vec<Product>,
    page: usize,
    has_more: bool,
    loading: bool,
    filters: CatalogFilters,
    /// Bumped on every first-page load; stale responses carry an older value
    generation: u64,
}

/// Point-in-time view of the feed for rendering
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub items: Vec<Product>,
    pub page: usize,
    pub has_more: bool,
    pub loading: bool,
    pub filters: CatalogFilters,
}

/// Outcome of a page-load call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response was applied to the item list
    Applied,
    /// A newer request superseded this one; nothing was changed
    Superseded,
    /// Guard condition (no more rows, or a load already in flight)
    Skipped,
}

/// Accumulating catalog pager. Cheap to clone; clones share state, so a
/// debounced filter task and a scroll-sentinel task can drive the same
/// feed instance.
pub struct CatalogFeed<S> {
    source: Arc<S>,
    state: Arc<Mutex<FeedState>>,
    page_size: usize,
}

// Manual impl so clones don't require `S: Clone`; the `Arc` fields make
// cloning a shallow, state-sharing operation regardless of `S`.
impl<S> Clone for CatalogFeed<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
            page_size: self.page_size,
        }
    }
}

impl<S: CatalogSource> CatalogFeed<S> {
    pub fn new(source: S) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(source: S, page_size: usize) -> Self {
        Self {
            source: Arc::new(source),
            state: Arc::new(Mutex::new(FeedState::default())),
            page_size,
        }
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.state.lock();
        FeedSnapshot {
            items: state.items.clone(),
            page: state.page,
            has_more: state.has_more,
            loading: state.loading,
            filters: state.filters.clone(),
        }
    }

    /// Query page 1 with the given filters, replacing the item list
    /// wholesale. Called directly on initial load and via the debouncer
    /// on every filter change.
    pub async fn load_first_page(&self, filters: CatalogFilters) -> RepoResult<LoadOutcome> {
        let generation = {
            let mut state = self.state.lock();
            state.generation += 1;
            state.loading = true;
            state.generation
        };

        let result = self.source.fetch_page(&filters, 1, self.page_size).await;

        let mut state = self.state.lock();
        if state.generation != generation {
            // A newer filter set owns the feed now; drop this response
            // without touching items or the newer request's loading flag.
            return Ok(LoadOutcome::Superseded);
        }

        match result {
            Ok(page) => {
                state.items = page.products;
                state.page = 1;
                state.has_more = page.total > self.page_size as u64;
                state.filters = filters;
                state.loading = false;
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                state.loading = false;
                Err(e)
            }
        }
    }

    /// Fetch the next page and append it. No-op while `has_more` is false
    /// or a load is in flight. A failed fetch leaves `items` and `page`
    /// untouched and clears the loading flag; the caller may simply retry.
    pub async fn load_next_page(&self) -> RepoResult<LoadOutcome> {
        let (generation, next_page, filters) = {
            let mut state = self.state.lock();
            if !state.has_more || state.loading {
                return Ok(LoadOutcome::Skipped);
            }
            state.loading = true;
            (state.generation, state.page + 1, state.filters.clone())
        };

        let result = self
            .source
            .fetch_page(&filters, next_page, self.page_size)
            .await;

        let mut state = self.state.lock();
        if state.generation != generation {
            return Ok(LoadOutcome::Superseded);
        }

        match result {
            Ok(page) => {
                // Append in request order; never re-sort or de-duplicate
                state.items.extend(page.products);
                state.page = next_page;
                state.has_more = page.total > (next_page * self.page_size) as u64;
                state.loading = false;
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                state.loading = false;
                Err(e)
            }
        }
    }

    /// Scroll-sentinel entry point: one visibility transition maps to at
    /// most one `load_next_page` call, the guards handle the rest.
    pub async fn on_sentinel_visible(&self) -> RepoResult<LoadOutcome> {
        self.load_next_page().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::RepoError;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    fn product(id: &str) -> Product {
        serde_json::from_value(json!({
            "id": id,
            "name": format!("Product {id}"),
            "price": 10.0,
        }))
        .unwrap()
    }

    /// Deterministic source: `total` products named r1..rN, sliced into
    /// pages. `slow_search` delays matching requests so tests can control
    /// which of two in-flight responses resolves last.
    struct FakeSource {
        total: usize,
        fail: AtomicBool,
        slow_search: Option<String>,
        base_delay: Option<Duration>,
    }

    impl FakeSource {
        fn new(total: usize) -> Self {
            Self {
                total,
                fail: AtomicBool::new(false),
                slow_search: None,
                base_delay: None,
            }
        }
    }

    #[async_trait]
    impl CatalogSource for FakeSource {
        async fn fetch_page(
            &self,
            filters: &CatalogFilters,
            page: usize,
            page_size: usize,
        ) -> RepoResult<CatalogPageResult> {
            if let Some(delay) = self.base_delay {
                tokio::time::sleep(delay).await;
            }
            if self.slow_search.as_deref() == Some(filters.search.as_str()) {
                tokio::time::sleep(Duration::from_millis(80)).await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(RepoError::Backend("boom".into()));
            }
            let start = (page - 1) * page_size;
            let end = (start + page_size).min(self.total);
            let products = (start..end)
                .map(|i| product(&format!("{}r{}", filters.search, i + 1)))
                .collect();
            Ok(CatalogPageResult {
                products,
                total: self.total as u64,
            })
        }
    }

    fn ids(feed: &FeedSnapshot) -> Vec<String> {
        feed.items.iter().map(|p| p.id.clone()).collect()
    }

    #[tokio::test]
    async fn pages_accumulate_in_order_with_exact_has_more() {
        let feed = CatalogFeed::with_page_size(FakeSource::new(5), 2);

        feed.load_first_page(CatalogFilters::default()).await.unwrap();
        let s = feed.snapshot();
        assert_eq!(ids(&s), vec!["r1", "r2"]);
        assert!(s.has_more);

        feed.load_next_page().await.unwrap();
        let s = feed.snapshot();
        assert_eq!(ids(&s), vec!["r1", "r2", "r3", "r4"]);
        assert!(s.has_more);

        feed.load_next_page().await.unwrap();
        let s = feed.snapshot();
        assert_eq!(ids(&s), vec!["r1", "r2", "r3", "r4", "r5"]);
        assert!(!s.has_more);
        assert_eq!(s.items.len() as u64, 5);

        // Exhausted feed: further calls are no-ops
        assert_eq!(feed.load_next_page().await.unwrap(), LoadOutcome::Skipped);
        assert_eq!(feed.snapshot().items.len(), 5);
    }

    #[tokio::test]
    async fn filter_change_restarts_from_page_one() {
        let feed = CatalogFeed::with_page_size(FakeSource::new(6), 2);
        feed.load_first_page(CatalogFilters::default()).await.unwrap();
        feed.load_next_page().await.unwrap();
        assert_eq!(feed.snapshot().items.len(), 4);

        let filters = CatalogFilters {
            search: "x".into(),
            ..Default::default()
        };
        feed.load_first_page(filters).await.unwrap();
        let s = feed.snapshot();
        assert_eq!(s.page, 1);
        assert_eq!(ids(&s), vec!["xr1", "xr2"]);
    }

    #[tokio::test]
    async fn stale_first_page_response_is_discarded() {
        let mut source = FakeSource::new(4);
        source.slow_search = Some("a".to_string());
        let feed = CatalogFeed::with_page_size(source, 2);

        let filters_a = CatalogFilters {
            search: "a".into(),
            ..Default::default()
        };
        let filters_b = CatalogFilters {
            search: "b".into(),
            ..Default::default()
        };

        // A is issued first but resolves last; B must win regardless
        let slow = {
            let feed = feed.clone();
            tokio::spawn(async move { feed.load_first_page(filters_a).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        let fast_outcome = feed.load_first_page(filters_b).await.unwrap();

        let slow_outcome = slow.await.unwrap().unwrap();
        assert_eq!(slow_outcome, LoadOutcome::Superseded);
        assert_eq!(fast_outcome, LoadOutcome::Applied);

        let s = feed.snapshot();
        assert_eq!(ids(&s), vec!["br1", "br2"]);
        assert_eq!(s.filters.search, "b");
        assert!(!s.loading);
    }

    #[tokio::test]
    async fn failed_page_fetch_leaves_state_intact() {
        let feed = CatalogFeed::with_page_size(FakeSource::new(6), 2);
        feed.load_first_page(CatalogFilters::default()).await.unwrap();

        feed.source.fail.store(true, Ordering::SeqCst);
        let err = feed.load_next_page().await;
        assert!(err.is_err());

        let s = feed.snapshot();
        assert_eq!(s.items.len(), 2);
        assert_eq!(s.page, 1);
        assert!(!s.loading); // retry possible

        // Manual retry succeeds after the backend recovers
        feed.source.fail.store(false, Ordering::SeqCst);
        feed.load_next_page().await.unwrap();
        assert_eq!(feed.snapshot().items.len(), 4);
    }

    #[tokio::test]
    async fn in_flight_load_guards_reentry() {
        let mut source = FakeSource::new(6);
        source.base_delay = Some(Duration::from_millis(40));
        let feed = CatalogFeed::with_page_size(source, 2);

        let first = {
            let feed = feed.clone();
            tokio::spawn(async move { feed.load_first_page(CatalogFilters::default()).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        // While the first page is in flight, next-page calls are no-ops
        assert_eq!(feed.load_next_page().await.unwrap(), LoadOutcome::Skipped);

        first.await.unwrap().unwrap();
        assert_eq!(feed.snapshot().items.len(), 2);
    }

    #[test]
    fn sort_fields_round_trip_their_columns() {
        for field in [SortField::CreatedAt, SortField::Name, SortField::Price] {
            assert_eq!(SortField::parse(field.as_column()), Some(field));
        }
        assert_eq!(SortField::parse("rating"), None);
    }
}
