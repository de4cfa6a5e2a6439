//! Product records and request payloads.

use serde::{Deserialize, Serialize};

/// Review aggregate carried on a product.
///
/// Written by an out-of-scope review subsystem; the catalog only stores
/// whatever it is handed (defaulting to zeros).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ratings {
    pub rating: f64,
    pub num_of_reviews: i64,
}

/// A catalog product. Uniqueness is scoped per category: the
/// (name, category_id) pair is unique case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub stock: i64,
    #[serde(default)]
    pub low_stock_threshold: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub ratings: Ratings,
    pub is_active: bool,
    pub order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Fields accepted by the product create/update/delete endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<String>,
    pub images: Option<Vec<String>>,
    pub stock: Option<i64>,
    pub low_stock_threshold: Option<i64>,
    pub brand: Option<String>,
    pub ratings: Option<Ratings>,
    pub is_active: Option<bool>,
    pub order: Option<i64>,
}
