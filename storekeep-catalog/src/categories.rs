//! Category mutations: validate → uniqueness → integrity → persist.

use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::input;
use crate::integrity;
use crate::uniqueness::{self, CategoryKey};
use std::sync::Arc;
use storekeep_model::{Category, CategoryInput, RecordId, now_millis};
use storekeep_storage::{Collection, DocumentStore};
use tracing::info;

const MISSING_FIELDS: &str = "Missing required fields";

/// Create/update/delete/list for categories.
pub struct CategoryService {
    store: Arc<DocumentStore>,
}

impl CategoryService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// All categories, in insertion order.
    pub fn list(&self) -> CatalogResult<Vec<Category>> {
        let docs = self.store.all(Collection::Categories)?;
        let mut categories = Vec::with_capacity(docs.len());
        for doc in docs {
            categories.push(serde_json::from_value(doc)?);
        }
        Ok(categories)
    }

    /// Create a category. Requires name, description, slug; everything else
    /// takes its default.
    pub fn create(&self, input: CategoryInput) -> CatalogResult<Category> {
        let name = input::require_str(input.name.as_deref(), MISSING_FIELDS)?.to_owned();
        let description =
            input::require_str(input.description.as_deref(), MISSING_FIELDS)?.to_owned();
        let slug = input::require_str(input.slug.as_deref(), MISSING_FIELDS)?.to_owned();

        uniqueness::check_category(
            &self.store,
            CategoryKey {
                name: &name,
                slug: &slug,
                parent_category_id: input.parent_category_id.as_deref(),
            },
            None,
        )?;
        if let Some(parent) = input.parent_category_id.as_deref() {
            integrity::require_parent(&self.store, parent)?;
        }

        let now = now_millis();
        let category = Category {
            id: RecordId::new().to_string(),
            name,
            description,
            parent_category_id: input.parent_category_id,
            icon: input.icon,
            meta_title: input.meta_title,
            meta_description: input.meta_description,
            meta_keywords: input.meta_keywords.unwrap_or_default(),
            is_active: input.is_active.unwrap_or(true),
            is_visible: input.is_visible.unwrap_or(true),
            slug,
            order: self.store.next_order(Collection::Categories)?,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(
            Collection::Categories,
            &category.id,
            &serde_json::to_value(&category)?,
        )?;
        info!("created category {} ({})", category.name, category.id);
        Ok(category)
    }

    /// Update a category: full replace of the mutable fields.
    ///
    /// Requires id, name, description, slug, both visibility flags, the
    /// keyword list and a non-zero order.
    pub fn update(&self, input: CategoryInput) -> CatalogResult<Category> {
        let id = input::require_str(input.id.as_deref(), MISSING_FIELDS)?.to_owned();
        let name = input::require_str(input.name.as_deref(), MISSING_FIELDS)?.to_owned();
        let description =
            input::require_str(input.description.as_deref(), MISSING_FIELDS)?.to_owned();
        let slug = input::require_str(input.slug.as_deref(), MISSING_FIELDS)?.to_owned();
        let is_active = input::require_bool(input.is_active, MISSING_FIELDS)?;
        let is_visible = input::require_bool(input.is_visible, MISSING_FIELDS)?;
        let meta_keywords = input::require_list(input.meta_keywords, MISSING_FIELDS)?;
        let order = input::require_i64(input.order, MISSING_FIELDS)?;

        let doc = self
            .store
            .get(Collection::Categories, &id)?
            .ok_or(CatalogError::NotFound(EntityKind::Category))?;
        let mut category: Category = serde_json::from_value(doc)?;

        uniqueness::check_category(
            &self.store,
            CategoryKey {
                name: &name,
                slug: &slug,
                parent_category_id: input.parent_category_id.as_deref(),
            },
            Some(&id),
        )?;

        // Self-parenting guard: a category never becomes its own parent.
        // The submitted parent is dropped in that case, not rejected.
        if input.parent_category_id.as_deref() != Some(category.id.as_str()) {
            if let Some(parent) = input.parent_category_id.as_deref() {
                integrity::require_parent(&self.store, parent)?;
            }
            category.parent_category_id = input.parent_category_id;
        }

        category.name = name;
        category.description = description;
        category.slug = slug;
        category.icon = input.icon;
        category.meta_title = input.meta_title;
        category.meta_description = input.meta_description;
        category.meta_keywords = meta_keywords;
        category.is_active = is_active;
        category.is_visible = is_visible;
        category.order = order;
        category.updated_at = now_millis();

        self.store
            .replace(Collection::Categories, &id, &serde_json::to_value(&category)?)?;
        info!("updated category {} ({})", category.name, category.id);
        Ok(category)
    }

    /// Delete a category. Blocked while any product references it.
    pub fn delete(&self, id: Option<&str>) -> CatalogResult<String> {
        let id = input::require_str(id, "Category ID Required")?;
        let doc = self
            .store
            .get(Collection::Categories, id)?
            .ok_or(CatalogError::NotFound(EntityKind::Category))?;
        let category: Category = serde_json::from_value(doc)?;

        if !integrity::can_delete_category(&self.store, id)? {
            return Err(CatalogError::HasDependents);
        }

        self.store.remove(Collection::Categories, id)?;
        info!("deleted category {} ({})", category.name, category.id);
        Ok(format!(
            "Name {} with ID {} deleted",
            category.name, category.id
        ))
    }
}
