//! FAQ Repository

use super::{ListQuery, RepoResult, RestClient, SortDirection};
use crate::db::models::{Faq, FaqCreate, FaqUpdate};

const FAQ_TABLE: &str = "faqs";

#[derive(Clone)]
pub struct FaqRepository {
    client: RestClient,
}

impl FaqRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Faq>> {
        let query = ListQuery::new().order("sort_order", SortDirection::Asc);
        let result = self.client.list::<Faq>(FAQ_TABLE, &query).await?;
        Ok(result.rows)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Faq>> {
        self.client.get_by_id(FAQ_TABLE, "*", id).await
    }

    pub async fn create(&self, data: FaqCreate) -> RepoResult<Faq> {
        self.client.create(FAQ_TABLE, &data).await
    }

    pub async fn update(&self, id: &str, data: FaqUpdate) -> RepoResult<Faq> {
        self.client.update(FAQ_TABLE, id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        self.client.delete(FAQ_TABLE, id).await
    }
}
