use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{BlogCategory, BlogPost, BlogPostCreate, BlogPostUpdate};
use crate::db::repository::BlogRepository;
use crate::utils::{AppError, AppResult};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BlogPost>>> {
    let repo = BlogRepository::new(state.rest.clone());
    Ok(Json(repo.find_all_posts().await?))
}

pub async fn list_categories(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<BlogCategory>>> {
    let repo = BlogRepository::new(state.rest.clone());
    Ok(Json(repo.find_all_categories().await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BlogPost>> {
    let repo = BlogRepository::new(state.rest.clone());
    let post = repo
        .find_post_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Blog post {} not found", id)))?;
    Ok(Json(post))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<BlogPostCreate>,
) -> AppResult<Json<BlogPost>> {
    if data.title.trim().is_empty() || data.slug.trim().is_empty() {
        return Err(AppError::validation("Title and slug are required"));
    }
    if data.content.trim().is_empty() {
        return Err(AppError::validation("Content is required"));
    }
    let repo = BlogRepository::new(state.rest.clone());
    let post = repo.create_post(data).await?;
    info!(id = %post.id, slug = %post.slug, "Blog post created");
    Ok(Json(post))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(data): Json<BlogPostUpdate>,
) -> AppResult<Json<BlogPost>> {
    let repo = BlogRepository::new(state.rest.clone());
    let post = repo.update_post(id, data).await?;
    info!(id = %id, "Blog post updated");
    Ok(Json(post))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = BlogRepository::new(state.rest.clone());
    repo.delete_post(id).await?;
    info!(id = %id, "Blog post deleted");
    Ok(Json(serde_json::json!({ "deleted": id })))
}
