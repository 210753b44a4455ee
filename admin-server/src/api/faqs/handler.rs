use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{Faq, FaqCreate, FaqUpdate};
use crate::db::repository::FaqRepository;
use crate::utils::{AppError, AppResult};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Faq>>> {
    let repo = FaqRepository::new(state.rest.clone());
    Ok(Json(repo.find_all().await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Faq>> {
    let repo = FaqRepository::new(state.rest.clone());
    let row = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("FAQ {} not found", id)))?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<FaqCreate>,
) -> AppResult<Json<Faq>> {
    if data.question.trim().is_empty() || data.answer.trim().is_empty() {
        return Err(AppError::validation("Question and answer are required"));
    }
    let repo = FaqRepository::new(state.rest.clone());
    let row = repo.create(data).await?;
    info!(id = %row.id, "FAQ created");
    Ok(Json(row))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<FaqUpdate>,
) -> AppResult<Json<Faq>> {
    let repo = FaqRepository::new(state.rest.clone());
    let row = repo.update(&id, data).await?;
    info!(id = %id, "FAQ updated");
    Ok(Json(row))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = FaqRepository::new(state.rest.clone());
    repo.delete(&id).await?;
    info!(id = %id, "FAQ deleted");
    Ok(Json(serde_json::json!({ "deleted": id })))
}
