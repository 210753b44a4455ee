//! Repository Module
//!
//! Typed CRUD repositories over the hosted record store, one per entity.

pub mod blog;
pub mod category;
pub mod faq;
pub mod portfolio;
pub mod product;
pub mod quote;
pub mod testimonial;

pub use blog::BlogRepository;
pub use category::CategoryRepository;
pub use faq::FaqRepository;
pub use portfolio::PortfolioRepository;
pub use product::{ProductListQuery, ProductPage, ProductRepository, SORTABLE_COLUMNS};
pub use quote::QuoteRepository;
pub use testimonial::TestimonialRepository;

pub(crate) use super::rest::{ListQuery, RestClient, SortDirection};
pub(crate) use super::{RepoError, RepoResult};
