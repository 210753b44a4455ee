use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::ServerState;
use crate::db::models::{Product, QuoteRequest, QUOTE_STATUSES};
use crate::db::repository::{ProductRepository, QuoteRepository};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub status: Option<String>,
}

/// GET /api/quotes?status=
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<QuoteRequest>>> {
    if let Some(status) = params.status.as_deref().filter(|s| !s.is_empty()) {
        if !QUOTE_STATUSES.contains(&status) {
            return Err(AppError::validation(format!(
                "Unknown quote status: {}",
                status
            )));
        }
    }
    let repo = QuoteRepository::new(state.rest.clone());
    Ok(Json(repo.find_all(params.status.as_deref()).await?))
}

#[derive(Debug, Serialize)]
pub struct QuoteDetail {
    #[serde(flatten)]
    pub quote: QuoteRequest,
    /// Shortlisted products expanded to full records; entries whose
    /// product has since been deleted are simply absent
    pub shortlisted_details: Vec<Product>,
}

/// GET /api/quotes/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<QuoteDetail>> {
    let repo = QuoteRepository::new(state.rest.clone());
    let quote = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Quote {} not found", id)))?;

    let ids: Vec<String> = quote
        .shortlisted_products
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|e| e.product_id().to_string())
        .collect();
    let products = ProductRepository::new(state.rest.clone())
        .find_by_ids(&ids)
        .await?;

    Ok(Json(QuoteDetail {
        quote,
        shortlisted_details: products,
    }))
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

/// PUT /api/quotes/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(req): Json<StatusRequest>,
) -> AppResult<Json<QuoteRequest>> {
    if !QUOTE_STATUSES.contains(&req.status.as_str()) {
        return Err(AppError::validation(format!(
            "Unknown quote status: {}",
            req.status
        )));
    }
    let repo = QuoteRepository::new(state.rest.clone());
    let quote = repo.update_status(&id, &req.status).await?;
    info!(id = %id, status = %req.status, "Quote status updated");
    Ok(Json(quote))
}
