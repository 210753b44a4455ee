//! Product Repository

use super::{ListQuery, RepoError, RepoResult, RestClient, SortDirection};
use crate::db::models::{Product, ProductCreate, ProductUpdate};

const PRODUCT_TABLE: &str = "products";

/// Select list with the denormalized category views resolved on read
const PRODUCT_SELECT: &str = "*,\
main_category_data:categories!main_category(id,name,slug),\
primary_category_data:categories!primary_category(id,name,slug),\
secondary_category_data:categories!secondary_category(id,name,slug)";

/// Columns the catalog list may sort on
pub const SORTABLE_COLUMNS: &[&str] = &["created_at", "name", "price"];

/// Parameters for a paginated catalog page
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    pub page: usize,
    pub page_size: usize,
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort_by: String,
    pub direction: SortDirection,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            search: None,
            category: None,
            sort_by: "created_at".to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// One page of catalog results with the exact total
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub has_more: bool,
}

#[derive(Clone)]
pub struct ProductRepository {
    client: RestClient,
}

impl ProductRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Fetch one page of products with combined search, category filter
    /// and sort. `has_more` is true exactly when rows remain beyond
    /// `page * page_size`.
    pub async fn list_paginated(&self, q: &ProductListQuery) -> RepoResult<ProductPage> {
        if !SORTABLE_COLUMNS.contains(&q.sort_by.as_str()) {
            return Err(RepoError::Validation(format!(
                "Unsupported sort column: {}",
                q.sort_by
            )));
        }

        let mut query = ListQuery::new()
            .select(PRODUCT_SELECT)
            .order(&q.sort_by, q.direction)
            .page(q.page, q.page_size);

        if let Some(search) = q.search.as_deref().filter(|s| !s.is_empty()) {
            query = query.search(&["name", "description"], search);
        }
        if let Some(category) = q.category.as_deref().filter(|c| !c.is_empty()) {
            query = query.eq("main_category", category);
        }

        let result = self.client.list::<Product>(PRODUCT_TABLE, &query).await?;
        let total = result.total.unwrap_or(result.rows.len() as u64);
        let has_more = total > (q.page * q.page_size) as u64;

        Ok(ProductPage {
            products: result.rows,
            total,
            has_more,
        })
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        self.client
            .get_by_id(PRODUCT_TABLE, PRODUCT_SELECT, id)
            .await
    }

    /// Fetch a set of products by id, used for quote shortlist expansion
    pub async fn find_by_ids(&self, ids: &[String]) -> RepoResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = ListQuery::new()
            .select(PRODUCT_SELECT)
            .filter("id", format!("in.({})", ids.join(",")))
            .order("created_at", SortDirection::Desc);
        let result = self.client.list::<Product>(PRODUCT_TABLE, &query).await?;
        Ok(result.rows)
    }

    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        self.client.create(PRODUCT_TABLE, &data).await
    }

    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        self.client.update(PRODUCT_TABLE, id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        self.client.delete(PRODUCT_TABLE, id).await
    }
}
