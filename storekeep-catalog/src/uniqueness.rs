//! Uniqueness validation for mutating operations.
//!
//! Pure decision logic over read-only store queries. On update the caller
//! passes the record's own id as `exclude_id`; a match carrying that id is
//! a self-match, never a conflict.

use crate::error::{CatalogError, CatalogResult, ConflictKind};
use storekeep_storage::{Collection, DocumentStore, Filter};

/// The fields participating in category uniqueness.
#[derive(Debug, Clone, Copy)]
pub struct CategoryKey<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub parent_category_id: Option<&'a str>,
}

/// True when the matched document is a different record than the excluded one.
fn is_other(doc: &serde_json::Value, exclude_id: Option<&str>) -> bool {
    match exclude_id {
        Some(id) => doc.get("id").and_then(|v| v.as_str()) != Some(id),
        None => true,
    }
}

/// Category duplicate policy, two tiers.
///
/// A name collision is always a conflict. Otherwise, a record under the same
/// parent combined with a record using the same slug (not necessarily the
/// same record) is a conflict. A slug collision alone, with no sibling
/// under the same parent, passes. The second tier does not enforce global
/// slug uniqueness; that is long-standing store behavior, kept deliberately.
pub fn check_category(
    store: &DocumentStore,
    key: CategoryKey<'_>,
    exclude_id: Option<&str>,
) -> CatalogResult<()> {
    let by_name = store.find_one(Collection::Categories, &[Filter::Eq("name", key.name)])?;
    if by_name.as_ref().is_some_and(|doc| is_other(doc, exclude_id)) {
        return Err(CatalogError::Conflict(ConflictKind::CategoryName));
    }

    let parent_filter = match key.parent_category_id {
        Some(parent) => Filter::Eq("parentCategoryId", parent),
        None => Filter::IsNull("parentCategoryId"),
    };
    let by_parent = store.find_one(Collection::Categories, &[parent_filter])?;
    let by_slug = store.find_one(Collection::Categories, &[Filter::Eq("slug", key.slug)])?;
    if by_parent.as_ref().is_some_and(|doc| is_other(doc, exclude_id))
        && by_slug.as_ref().is_some_and(|doc| is_other(doc, exclude_id))
    {
        return Err(CatalogError::Conflict(ConflictKind::CategoryComposite));
    }

    Ok(())
}

/// Product uniqueness: the (name, categoryId) pair, so the same product name
/// may exist in different categories.
pub fn check_product(
    store: &DocumentStore,
    name: &str,
    category_id: &str,
    exclude_id: Option<&str>,
) -> CatalogResult<()> {
    let duplicate = store.find_one(
        Collection::Products,
        &[Filter::Eq("name", name), Filter::Eq("categoryId", category_id)],
    )?;
    if duplicate.as_ref().is_some_and(|doc| is_other(doc, exclude_id)) {
        return Err(CatalogError::Conflict(ConflictKind::Product));
    }
    Ok(())
}

/// User uniqueness: email address.
pub fn check_user_email(
    store: &DocumentStore,
    email: &str,
    exclude_id: Option<&str>,
) -> CatalogResult<()> {
    let duplicate = store.find_one(Collection::Users, &[Filter::Eq("email", email)])?;
    if duplicate.as_ref().is_some_and(|doc| is_other(doc, exclude_id)) {
        return Err(CatalogError::Conflict(ConflictKind::UserEmail));
    }
    Ok(())
}
