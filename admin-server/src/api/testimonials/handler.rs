use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{Testimonial, TestimonialCreate, TestimonialUpdate};
use crate::db::repository::TestimonialRepository;
use crate::utils::{AppError, AppResult};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Testimonial>>> {
    let repo = TestimonialRepository::new(state.rest.clone());
    Ok(Json(repo.find_all().await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Testimonial>> {
    let repo = TestimonialRepository::new(state.rest.clone());
    let row = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Testimonial {} not found", id)))?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<TestimonialCreate>,
) -> AppResult<Json<Testimonial>> {
    if data.name.trim().is_empty() || data.content.trim().is_empty() {
        return Err(AppError::validation("Name and content are required"));
    }
    if !(0.0..=5.0).contains(&data.rating) {
        return Err(AppError::validation("Rating must be between 0 and 5"));
    }
    let repo = TestimonialRepository::new(state.rest.clone());
    let row = repo.create(data).await?;
    info!(id = %row.id, "Testimonial created");
    Ok(Json(row))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<TestimonialUpdate>,
) -> AppResult<Json<Testimonial>> {
    if let Some(rating) = data.rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(AppError::validation("Rating must be between 0 and 5"));
        }
    }
    let repo = TestimonialRepository::new(state.rest.clone());
    let row = repo.update(&id, data).await?;
    info!(id = %id, "Testimonial updated");
    Ok(Json(row))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = TestimonialRepository::new(state.rest.clone());
    repo.delete(&id).await?;
    info!(id = %id, "Testimonial deleted");
    Ok(Json(serde_json::json!({ "deleted": id })))
}
