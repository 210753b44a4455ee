use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::hierarchy;
use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryLevel, CategoryUpdate};
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.rest.clone());
    Ok(Json(repo.find_all().await?))
}

#[derive(Debug, Deserialize)]
pub struct OptionsParams {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub primary: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub main: Vec<Category>,
    pub primary: Vec<Category>,
    pub secondary: Vec<Category>,
    /// Type annotation of the selected main, for display only
    pub type_label: Option<&'static str>,
}

/// GET /api/categories/options?main=&primary=
///
/// Option lists for the three-level product form. An unselected level
/// yields an empty list below it; an empty string behaves like absent.
pub async fn options(
    State(state): State<ServerState>,
    Query(params): Query<OptionsParams>,
) -> AppResult<Json<OptionsResponse>> {
    let repo = CategoryRepository::new(state.rest.clone());
    let categories = repo.find_all().await?;

    let main_id = params.main.as_deref().filter(|s| !s.is_empty());
    let primary_id = params.primary.as_deref().filter(|s| !s.is_empty());

    let response = OptionsResponse {
        main: hierarchy::main_options(&categories)
            .into_iter()
            .cloned()
            .collect(),
        primary: hierarchy::primary_options(&categories, main_id)
            .into_iter()
            .cloned()
            .collect(),
        secondary: hierarchy::secondary_options(&categories, primary_id)
            .into_iter()
            .cloned()
            .collect(),
        type_label: hierarchy::category_type(&categories, main_id).and_then(|t| t.label()),
    };
    Ok(Json(response))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.rest.clone());
    let category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {} not found", id)))?;
    Ok(Json(category))
}

/// A sub-main category must name a parent one level up; a main category
/// must not name a parent at all.
async fn validate_parent(
    repo: &CategoryRepository,
    level: CategoryLevel,
    parent_id: Option<&str>,
) -> AppResult<()> {
    let expected_parent_level = match level {
        CategoryLevel::Main => {
            if parent_id.is_some() {
                return Err(AppError::validation("Main categories cannot have a parent"));
            }
            return Ok(());
        }
        CategoryLevel::Primary => CategoryLevel::Main,
        CategoryLevel::Secondary => CategoryLevel::Primary,
        CategoryLevel::Unknown => {
            return Err(AppError::validation("Unrecognized category level"));
        }
    };

    let parent_id =
        parent_id.ok_or_else(|| AppError::validation("Parent category is required"))?;
    let parent = repo
        .find_by_id(parent_id)
        .await?
        .ok_or_else(|| AppError::validation(format!("Parent category {} not found", parent_id)))?;
    if parent.level != Some(expected_parent_level) {
        return Err(AppError::validation(format!(
            "Parent category {} is at the wrong level",
            parent_id
        )));
    }
    Ok(())
}

/// POST /api/categories
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    if data.name.trim().is_empty() || data.slug.trim().is_empty() {
        return Err(AppError::validation("Name and slug are required"));
    }
    let level = data
        .level
        .ok_or_else(|| AppError::validation("Category level is required"))?;

    let repo = CategoryRepository::new(state.rest.clone());
    validate_parent(&repo, level, data.parent_id.as_deref()).await?;

    let category = repo.create(data).await?;
    info!(id = %category.id, name = %category.name, "Category created");
    Ok(Json(category))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.rest.clone());

    // Level or parent changes must still form a legal edge
    if let Some(level) = data.level {
        let parent_id = match &data.parent_id {
            Some(explicit) => explicit.clone(),
            None => repo
                .find_by_id(&id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Category {} not found", id)))?
                .parent_id,
        };
        validate_parent(&repo, level, parent_id.as_deref()).await?;
    }

    let category = repo.update(&id, data).await?;
    info!(id = %id, "Category updated");
    Ok(Json(category))
}

/// DELETE /api/categories/{id}
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = CategoryRepository::new(state.rest.clone());

    // Refuse to orphan children; the admin must re-home them first
    let children = repo
        .find_all()
        .await?
        .into_iter()
        .filter(|c| c.parent_id.as_deref() == Some(id.as_str()))
        .count();
    if children > 0 {
        return Err(AppError::conflict(format!(
            "Category has {} child categories; move or delete them first",
            children
        )));
    }

    repo.delete(&id).await?;
    info!(id = %id, "Category deleted");
    Ok(Json(serde_json::json!({ "deleted": id })))
}
