//! Portfolio Repository

use super::{ListQuery, RepoResult, RestClient, SortDirection};
use crate::db::models::{PortfolioCreate, PortfolioEntry, PortfolioUpdate};

const PORTFOLIO_TABLE: &str = "portfolio";

#[derive(Clone)]
pub struct PortfolioRepository {
    client: RestClient,
}

impl PortfolioRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<PortfolioEntry>> {
        let query = ListQuery::new().order("created_at", SortDirection::Desc);
        let result = self
            .client
            .list::<PortfolioEntry>(PORTFOLIO_TABLE, &query)
            .await?;
        Ok(result.rows)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<PortfolioEntry>> {
        self.client.get_by_id(PORTFOLIO_TABLE, "*", id).await
    }

    pub async fn create(&self, data: PortfolioCreate) -> RepoResult<PortfolioEntry> {
        self.client.create(PORTFOLIO_TABLE, &data).await
    }

    pub async fn update(&self, id: &str, data: PortfolioUpdate) -> RepoResult<PortfolioEntry> {
        self.client.update(PORTFOLIO_TABLE, id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        self.client.delete(PORTFOLIO_TABLE, id).await
    }
}
