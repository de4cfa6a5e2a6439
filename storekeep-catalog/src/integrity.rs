//! Cross-entity integrity guards.

use crate::error::{CatalogError, CatalogResult};
use storekeep_storage::{Collection, DocumentStore, Filter};

/// Whether a category may be deleted: false while at least one product still
/// references it.
pub fn can_delete_category(store: &DocumentStore, id: &str) -> CatalogResult<bool> {
    let referenced = store.exists(Collection::Products, &[Filter::Eq("categoryId", id)])?;
    Ok(!referenced)
}

/// A product's category reference must resolve to an existing category.
pub fn require_category(store: &DocumentStore, category_id: &str) -> CatalogResult<()> {
    if store.get(Collection::Categories, category_id)?.is_none() {
        return Err(CatalogError::Validation("Category not found".to_owned()));
    }
    Ok(())
}

/// A category's parent reference, when present, must resolve.
pub fn require_parent(store: &DocumentStore, parent_id: &str) -> CatalogResult<()> {
    if store.get(Collection::Categories, parent_id)?.is_none() {
        return Err(CatalogError::Validation(
            "Parent category not found".to_owned(),
        ));
    }
    Ok(())
}
