//! Category records and request payloads.

use serde::{Deserialize, Serialize};

/// A catalog category.
///
/// Categories form a tree via `parent_category_id` (no cycle prevention
/// beyond the single-level self-parent guard in the update path). `order`
/// is a per-collection creation sequence starting at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub parent_category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Vec<String>,
    pub is_active: bool,
    pub is_visible: bool,
    pub slug: String,
    pub order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Fields accepted by the category create/update/delete endpoints.
///
/// Everything is optional at the wire level; the catalog service decides
/// which fields each operation requires.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_category_id: Option<String>,
    pub icon: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub is_visible: Option<bool>,
    pub slug: Option<String>,
    pub order: Option<i64>,
}
