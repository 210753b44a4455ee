//! Category Repository

use super::{ListQuery, RepoResult, RestClient, SortDirection};
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};

const CATEGORY_TABLE: &str = "categories";

#[derive(Clone)]
pub struct CategoryRepository {
    client: RestClient,
}

impl CategoryRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// All categories, alphabetical. The resolver works over this flat
    /// list in memory; there is no server-side tree query.
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let query = ListQuery::new().order("name", SortDirection::Asc);
        let result = self.client.list::<Category>(CATEGORY_TABLE, &query).await?;
        Ok(result.rows)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        self.client.get_by_id(CATEGORY_TABLE, "*", id).await
    }

    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        self.client.create(CATEGORY_TABLE, &data).await
    }

    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        self.client.update(CATEGORY_TABLE, id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        self.client.delete(CATEGORY_TABLE, id).await
    }
}
