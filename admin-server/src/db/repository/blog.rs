//! Blog Repository

use super::{ListQuery, RepoResult, RestClient, SortDirection};
use crate::db::models::{BlogCategory, BlogPost, BlogPostCreate, BlogPostUpdate};

const POST_TABLE: &str = "blog_posts";
const CATEGORY_TABLE: &str = "blog_categories";

/// Posts carry the joined category name on reads
const POST_SELECT: &str = "*,blog_categories(name)";

#[derive(Clone)]
pub struct BlogRepository {
    client: RestClient,
}

impl BlogRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn find_all_posts(&self) -> RepoResult<Vec<BlogPost>> {
        let query = ListQuery::new()
            .select(POST_SELECT)
            .order("published_at", SortDirection::Desc);
        let result = self.client.list::<BlogPost>(POST_TABLE, &query).await?;
        Ok(result.rows)
    }

    pub async fn find_post_by_id(&self, id: i64) -> RepoResult<Option<BlogPost>> {
        self.client
            .get_by_id(POST_TABLE, POST_SELECT, &id.to_string())
            .await
    }

    pub async fn create_post(&self, data: BlogPostCreate) -> RepoResult<BlogPost> {
        self.client.create(POST_TABLE, &data).await
    }

    pub async fn update_post(&self, id: i64, data: BlogPostUpdate) -> RepoResult<BlogPost> {
        self.client.update(POST_TABLE, &id.to_string(), &data).await
    }

    pub async fn delete_post(&self, id: i64) -> RepoResult<()> {
        self.client.delete(POST_TABLE, &id.to_string()).await
    }

    pub async fn find_all_categories(&self) -> RepoResult<Vec<BlogCategory>> {
        let query = ListQuery::new().order("name", SortDirection::Asc);
        let result = self
            .client
            .list::<BlogCategory>(CATEGORY_TABLE, &query)
            .await?;
        Ok(result.rows)
    }
}
