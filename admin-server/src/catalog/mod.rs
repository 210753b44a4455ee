//! Catalog core
//!
//! The three behaviors the product screens are built on:
//!
//! - [`hierarchy`] - main → primary → secondary category resolution and
//!   cascade-on-change
//! - [`gallery`] - gallery upload tracking and display/hover role
//!   assignment
//! - [`feed`] - accumulating paginated catalog retrieval with
//!   stale-response discard
//! - [`debounce`] - the quiet-period timer the feed's filter changes go
//!   through

pub mod debounce;
pub mod feed;
pub mod gallery;
pub mod hierarchy;

pub use debounce::{Debouncer, FILTER_DEBOUNCE};
pub use feed::{
    CatalogFeed, CatalogFilters, CatalogPageResult, CatalogSource, FeedSnapshot, LoadOutcome,
    RestCatalogSource, SortField, DEFAULT_PAGE_SIZE,
};
pub use gallery::{Gallery, GalleryError};
pub use hierarchy::{
    category_type, main_options, primary_options, secondary_options, CategorySelection,
};
