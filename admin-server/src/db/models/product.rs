//! Product Model

use serde::{Deserialize, Serialize};

/// Denormalized category view embedded on product reads; never written back
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Product row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Legacy single price, kept equal to `price_min`
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub has_price_range: Option<bool>,
    #[serde(default)]
    pub main_category: Option<String>,
    #[serde(default)]
    pub primary_category: Option<String>,
    #[serde(default)]
    pub secondary_category: Option<String>,
    /// Ordered gallery of public image URLs
    #[serde(default)]
    pub images: Option<Vec<String>>,
    /// Listing thumbnail; must be an element of `images`
    #[serde(default)]
    pub display_image: Option<String>,
    /// Mouse-over thumbnail; must be a different element of `images`
    #[serde(default)]
    pub hover_image: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub customizable: Option<bool>,
    #[serde(default)]
    pub moq: Option<f64>,
    #[serde(default)]
    pub delivery: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub main_category_data: Option<CategoryRef>,
    #[serde(default)]
    pub primary_category_data: Option<CategoryRef>,
    #[serde(default)]
    pub secondary_category_data: Option<CategoryRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Legacy fallback, set to `price_min` by the handler
    pub price: f64,
    pub price_min: f64,
    pub price_max: f64,
    pub has_price_range: bool,
    pub main_category: Option<String>,
    pub primary_category: Option<String>,
    pub secondary_category: Option<String>,
    pub images: Option<Vec<String>>,
    pub display_image: Option<String>,
    pub hover_image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub customizable: bool,
    pub moq: Option<f64>,
    pub delivery: Option<String>,
}

/// Partial update: absent fields stay unchanged server-side, `Some(None)`
/// writes an explicit null to clear a value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_price_range: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moq: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Option<String>>,
}
