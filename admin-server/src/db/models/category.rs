//! Category Model

use serde::{Deserialize, Serialize};

/// Tier of the three-level category tree
///
/// Anything outside the recognized enumeration deserializes to `Unknown`
/// and is excluded from resolver output instead of failing the whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryLevel {
    Main,
    Primary,
    Secondary,
    #[serde(other)]
    Unknown,
}

/// Taxonomy tag carried by main-level categories only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    Edible,
    NonEdible,
    #[serde(other)]
    Unknown,
}

impl CategoryType {
    /// Display label used to annotate the product form
    pub fn label(&self) -> Option<&'static str> {
        match self {
            CategoryType::Edible => Some("Edible Gifts"),
            CategoryType::NonEdible => Some("Non-Edible Gifts"),
            CategoryType::Unknown => None,
        }
    }
}

/// Category row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Parent category id; `None` at the main level
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub level: Option<CategoryLevel>,
    #[serde(default, rename = "type")]
    pub category_type: Option<CategoryType>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CategoryLevel>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category_type: Option<CategoryType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CategoryLevel>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category_type: Option<CategoryType>,
}
