use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::gallery::Gallery;
use crate::catalog::hierarchy::CategorySelection;
use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::{CategoryRepository, ProductListQuery, ProductRepository};
use crate::db::SortDirection;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub records: Vec<Product>,
    pub total: u64,
    pub has_more: bool,
}

/// GET /api/products
///
/// Paginated catalog list. Search, category filter and sort combine; the
/// exact total rides along so the client can decide whether to keep
/// paging.
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<ListResponse>> {
    let repo = ProductRepository::new(state.rest.clone());

    let direction = match params.order.as_deref() {
        Some("asc") => SortDirection::Asc,
        _ => SortDirection::Desc,
    };
    let query = ProductListQuery {
        page: params.page.unwrap_or(1).max(1),
        page_size: params.limit.unwrap_or(20).clamp(1, 100),
        search: params.search,
        category: params.category,
        sort_by: params.sort_by.unwrap_or_else(|| "created_at".to_string()),
        direction,
    };

    let page = repo.list_paginated(&query).await?;
    Ok(Json(ListResponse {
        records: page.products,
        total: page.total,
        has_more: page.has_more,
    }))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.rest.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
    Ok(Json(product))
}

/// The full product form as submitted by the dashboard
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    #[serde(default)]
    pub main_category: Option<String>,
    #[serde(default)]
    pub primary_category: Option<String>,
    #[serde(default)]
    pub secondary_category: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub display_image: Option<String>,
    #[serde(default)]
    pub hover_image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub customizable: bool,
    #[serde(default)]
    pub moq: Option<f64>,
    #[serde(default)]
    pub delivery: Option<String>,
}

/// Validated, role-resolved view of a [`ProductForm`]
struct ValidatedForm {
    selection: CategorySelection,
    price_min: f64,
    price_max: f64,
    display_image: Option<String>,
    hover_image: Option<String>,
}

/// Shared create/update validation: required fields, price range shape,
/// category chain consistency, and image role resolution.
async fn validate_form(state: &ServerState, form: &ProductForm) -> AppResult<ValidatedForm> {
    if form.name.trim().is_empty() {
        return Err(AppError::validation("Product name is required"));
    }
    let price_min = form
        .price_min
        .ok_or_else(|| AppError::validation("Minimum price is required"))?;
    let price_max = form
        .price_max
        .ok_or_else(|| AppError::validation("Maximum price is required"))?;
    if price_min < 0.0 || price_max < price_min {
        return Err(AppError::validation("Invalid price range"));
    }

    let selection = CategorySelection::new(
        form.main_category.clone(),
        form.primary_category.clone(),
        form.secondary_category.clone(),
    );
    if selection.main.is_none() {
        return Err(AppError::validation("Main category is required"));
    }
    let categories = CategoryRepository::new(state.rest.clone()).find_all().await?;
    selection
        .validate_chain(&categories)
        .map_err(AppError::validation)?;

    if form.display_image.is_some() && form.display_image == form.hover_image {
        return Err(AppError::conflict(
            "The same image cannot be used for both display and hover roles",
        ));
    }
    let gallery = Gallery::from_persisted(
        form.images.clone(),
        form.display_image.as_deref(),
        form.hover_image.as_deref(),
    );
    let (display_image, hover_image) = gallery.resolve_roles(true);

    Ok(ValidatedForm {
        selection,
        price_min,
        price_max,
        display_image,
        hover_image,
    })
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    Json(form): Json<ProductForm>,
) -> AppResult<Json<Product>> {
    let v = validate_form(&state, &form).await?;

    let repo = ProductRepository::new(state.rest.clone());
    let product = repo
        .create(ProductCreate {
            name: form.name.trim().to_string(),
            description: form.description,
            // Legacy single price mirrors the range minimum
            price: v.price_min,
            price_min: v.price_min,
            price_max: v.price_max,
            has_price_range: v.price_max > v.price_min,
            main_category: v.selection.main,
            primary_category: v.selection.primary,
            secondary_category: v.selection.secondary,
            images: Some(form.images),
            display_image: v.display_image,
            hover_image: v.hover_image,
            featured: form.featured,
            customizable: form.customizable,
            moq: form.moq,
            delivery: form.delivery,
        })
        .await?;

    info!(id = %product.id, name = %product.name, "Product created");
    Ok(Json(product))
}

/// PUT /api/products/{id}
///
/// The edit form submits the full record, so every field is written;
/// cleared optional fields become explicit nulls.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(form): Json<ProductForm>,
) -> AppResult<Json<Product>> {
    let v = validate_form(&state, &form).await?;

    let repo = ProductRepository::new(state.rest.clone());
    let product = repo
        .update(
            &id,
            ProductUpdate {
                name: Some(form.name.trim().to_string()),
                description: Some(form.description),
                price: Some(v.price_min),
                price_min: Some(v.price_min),
                price_max: Some(v.price_max),
                has_price_range: Some(v.price_max > v.price_min),
                main_category: Some(v.selection.main),
                primary_category: Some(v.selection.primary),
                secondary_category: Some(v.selection.secondary),
                images: Some(Some(form.images)),
                display_image: Some(v.display_image),
                hover_image: Some(v.hover_image),
                featured: Some(form.featured),
                customizable: Some(form.customizable),
                moq: Some(form.moq),
                delivery: Some(form.delivery),
            },
        )
        .await?;

    info!(id = %id, "Product updated");
    Ok(Json(product))
}

/// DELETE /api/products/{id}
///
/// Removes the row first, then makes a best-effort pass over the gallery
/// objects in storage. A failed object delete only logs; the row is
/// already gone and the objects are unreachable.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = ProductRepository::new(state.rest.clone());
    let product = repo.find_by_id(&id).await?;
    repo.delete(&id).await?;

    if let Some(images) = product.and_then(|p| p.images) {
        let deletes = images.iter().map(|url| state.storage.delete(url));
        for (url, result) in images.iter().zip(futures::future::join_all(deletes).await) {
            if let Err(e) = result {
                tracing::warn!(url = %url, error = %e, "Orphaned storage object left behind");
            }
        }
    }

    info!(id = %id, "Product deleted");
    Ok(Json(serde_json::json!({ "deleted": id })))
}
