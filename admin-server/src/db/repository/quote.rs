//! Quote Request Repository
//!
//! Quotes are created by the storefront; the dashboard only lists them,
//! reads them, and moves them through the status pipeline.

use chrono::Utc;

use super::{ListQuery, RepoResult, RestClient, SortDirection};
use crate::db::models::{QuoteRequest, QuoteStatusUpdate};

const QUOTE_TABLE: &str = "quote_requests";

#[derive(Clone)]
pub struct QuoteRepository {
    client: RestClient,
}

impl QuoteRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn find_all(&self, status: Option<&str>) -> RepoResult<Vec<QuoteRequest>> {
        let mut query = ListQuery::new().order("created_at", SortDirection::Desc);
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            query = query.eq("status", status);
        }
        let result = self.client.list::<QuoteRequest>(QUOTE_TABLE, &query).await?;
        Ok(result.rows)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<QuoteRequest>> {
        self.client.get_by_id(QUOTE_TABLE, "*", id).await
    }

    pub async fn update_status(&self, id: &str, status: &str) -> RepoResult<QuoteRequest> {
        let payload = QuoteStatusUpdate {
            status: status.to_string(),
            updated_at: Some(Utc::now().to_rfc3339()),
        };
        self.client.update(QUOTE_TABLE, id, &payload).await
    }
}
