//! Quote Request Model

use serde::{Deserialize, Serialize};

/// One entry of a quote's shortlist. Older rows store bare product id
/// strings; newer rows store objects with an optional quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShortlistEntry {
    Id(String),
    Item {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<f64>,
    },
}

impl ShortlistEntry {
    pub fn product_id(&self) -> &str {
        match self {
            ShortlistEntry::Id(id) => id,
            ShortlistEntry::Item { id, .. } => id,
        }
    }
}

/// Quote request row; read and status-update only from the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub company: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub customization: Option<bool>,
    #[serde(default)]
    pub branding: Option<bool>,
    #[serde(default)]
    pub packaging: Option<bool>,
    #[serde(default)]
    pub shortlisted_products: Option<Vec<ShortlistEntry>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteStatusUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Recognized quote statuses
pub const QUOTE_STATUSES: &[&str] = &["pending", "contacted", "quoted", "closed"];
