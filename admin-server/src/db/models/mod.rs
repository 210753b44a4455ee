//! Typed rows and Create/Update DTOs for the hosted record store

pub mod blog;
pub mod category;
pub mod faq;
pub mod portfolio;
pub mod product;
pub mod quote;
pub mod testimonial;

pub use blog::{BlogCategory, BlogPost, BlogPostCreate, BlogPostUpdate};
pub use category::{Category, CategoryCreate, CategoryLevel, CategoryType, CategoryUpdate};
pub use faq::{Faq, FaqCreate, FaqUpdate};
pub use portfolio::{PortfolioCreate, PortfolioEntry, PortfolioUpdate};
pub use product::{CategoryRef, Product, ProductCreate, ProductUpdate};
pub use quote::{QuoteRequest, QuoteStatusUpdate, ShortlistEntry, QUOTE_STATUSES};
pub use testimonial::{Testimonial, TestimonialCreate, TestimonialUpdate};
