use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{PortfolioCreate, PortfolioEntry, PortfolioUpdate};
use crate::db::repository::PortfolioRepository;
use crate::utils::{AppError, AppResult};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PortfolioEntry>>> {
    let repo = PortfolioRepository::new(state.rest.clone());
    Ok(Json(repo.find_all().await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<PortfolioEntry>> {
    let repo = PortfolioRepository::new(state.rest.clone());
    let row = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Portfolio entry {} not found", id)))?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<PortfolioCreate>,
) -> AppResult<Json<PortfolioEntry>> {
    if data.title.trim().is_empty() || data.client.trim().is_empty() {
        return Err(AppError::validation("Title and client are required"));
    }
    let repo = PortfolioRepository::new(state.rest.clone());
    let row = repo.create(data).await?;
    info!(id = %row.id, "Portfolio entry created");
    Ok(Json(row))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<PortfolioUpdate>,
) -> AppResult<Json<PortfolioEntry>> {
    let repo = PortfolioRepository::new(state.rest.clone());
    let row = repo.update(&id, data).await?;
    info!(id = %id, "Portfolio entry updated");
    Ok(Json(row))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = PortfolioRepository::new(state.rest.clone());
    repo.delete(&id).await?;
    info!(id = %id, "Portfolio entry deleted");
    Ok(Json(serde_json::json!({ "deleted": id })))
}
