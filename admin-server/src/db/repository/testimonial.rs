//! Testimonial Repository

use super::{ListQuery, RepoResult, RestClient, SortDirection};
use crate::db::models::{Testimonial, TestimonialCreate, TestimonialUpdate};

const TESTIMONIAL_TABLE: &str = "testimonials";

#[derive(Clone)]
pub struct TestimonialRepository {
    client: RestClient,
}

impl TestimonialRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Testimonial>> {
        let query = ListQuery::new().order("created_at", SortDirection::Desc);
        let result = self
            .client
            .list::<Testimonial>(TESTIMONIAL_TABLE, &query)
            .await?;
        Ok(result.rows)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Testimonial>> {
        self.client.get_by_id(TESTIMONIAL_TABLE, "*", id).await
    }

    pub async fn create(&self, data: TestimonialCreate) -> RepoResult<Testimonial> {
        self.client.create(TESTIMONIAL_TABLE, &data).await
    }

    pub async fn update(&self, id: &str, data: TestimonialUpdate) -> RepoResult<Testimonial> {
        self.client.update(TESTIMONIAL_TABLE, id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        self.client.delete(TESTIMONIAL_TABLE, id).await
    }
}
