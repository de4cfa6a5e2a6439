//! Product mutations: validate → uniqueness → integrity → persist.

use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::input;
use crate::integrity;
use crate::uniqueness;
use std::sync::Arc;
use storekeep_model::{Product, ProductInput, RecordId, now_millis};
use storekeep_storage::{Collection, DocumentStore};
use tracing::info;

const MISSING_FIELDS: &str = "Missing required fields";

/// Create/update/delete/list for products.
pub struct ProductService {
    store: Arc<DocumentStore>,
}

impl ProductService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// All products, in insertion order.
    pub fn list(&self) -> CatalogResult<Vec<Product>> {
        let docs = self.store.all(Collection::Products)?;
        let mut products = Vec::with_capacity(docs.len());
        for doc in docs {
            products.push(serde_json::from_value(doc)?);
        }
        Ok(products)
    }

    /// Create a product. Requires name, description, a non-zero price,
    /// the category reference and a non-zero stock count.
    pub fn create(&self, input: ProductInput) -> CatalogResult<Product> {
        let name = input::require_str(input.name.as_deref(), MISSING_FIELDS)?.to_owned();
        let description =
            input::require_str(input.description.as_deref(), MISSING_FIELDS)?.to_owned();
        let price = input::require_f64(input.price, MISSING_FIELDS)?;
        let category_id =
            input::require_str(input.category_id.as_deref(), MISSING_FIELDS)?.to_owned();
        let stock = input::require_i64(input.stock, MISSING_FIELDS)?;

        let price = input::non_negative_f64(price, "Price must not be negative")?;
        let stock = input::non_negative_i64(stock, "Stock must not be negative")?;
        let low_stock_threshold = input::non_negative_i64(
            input.low_stock_threshold.unwrap_or(0),
            "Low stock threshold must not be negative",
        )?;

        uniqueness::check_product(&self.store, &name, &category_id, None)?;
        integrity::require_category(&self.store, &category_id)?;

        let now = now_millis();
        let product = Product {
            id: RecordId::new().to_string(),
            name,
            description,
            price,
            category_id,
            images: input.images.unwrap_or_default(),
            stock,
            low_stock_threshold,
            brand: input.brand,
            ratings: input.ratings.unwrap_or_default(),
            is_active: input.is_active.unwrap_or(true),
            order: self.store.next_order(Collection::Products)?,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(
            Collection::Products,
            &product.id,
            &serde_json::to_value(&product)?,
        )?;
        info!("created product {} ({})", product.name, product.id);
        Ok(product)
    }

    /// Update a product: full replace of the mutable fields.
    ///
    /// Requires id, name, description, price, category reference, stock,
    /// order, the active flag and the image list.
    pub fn update(&self, input: ProductInput) -> CatalogResult<Product> {
        let id = input::require_str(input.id.as_deref(), MISSING_FIELDS)?.to_owned();
        let name = input::require_str(input.name.as_deref(), MISSING_FIELDS)?.to_owned();
        let description =
            input::require_str(input.description.as_deref(), MISSING_FIELDS)?.to_owned();
        let price = input::require_f64(input.price, MISSING_FIELDS)?;
        let category_id =
            input::require_str(input.category_id.as_deref(), MISSING_FIELDS)?.to_owned();
        let stock = input::require_i64(input.stock, MISSING_FIELDS)?;
        let order = input::require_i64(input.order, MISSING_FIELDS)?;
        let is_active = input::require_bool(input.is_active, MISSING_FIELDS)?;
        let images = input::require_list(input.images, MISSING_FIELDS)?;

        let price = input::non_negative_f64(price, "Price must not be negative")?;
        let stock = input::non_negative_i64(stock, "Stock must not be negative")?;
        let low_stock_threshold = input::non_negative_i64(
            input.low_stock_threshold.unwrap_or(0),
            "Low stock threshold must not be negative",
        )?;

        let doc = self
            .store
            .get(Collection::Products, &id)?
            .ok_or(CatalogError::NotFound(EntityKind::Product))?;
        let mut product: Product = serde_json::from_value(doc)?;

        uniqueness::check_product(&self.store, &name, &category_id, Some(&id))?;
        integrity::require_category(&self.store, &category_id)?;

        product.name = name;
        product.description = description;
        product.price = price;
        product.category_id = category_id;
        product.images = images;
        product.stock = stock;
        product.low_stock_threshold = low_stock_threshold;
        product.brand = input.brand;
        product.ratings = input.ratings.unwrap_or_default();
        product.is_active = is_active;
        product.order = order;
        product.updated_at = now_millis();

        self.store
            .replace(Collection::Products, &id, &serde_json::to_value(&product)?)?;
        info!("updated product {} ({})", product.name, product.id);
        Ok(product)
    }

    /// Delete a product by id.
    pub fn delete(&self, id: Option<&str>) -> CatalogResult<String> {
        let id = input::require_str(id, "Product ID Required")?;
        let doc = self
            .store
            .get(Collection::Products, id)?
            .ok_or(CatalogError::NotFound(EntityKind::Product))?;
        let product: Product = serde_json::from_value(doc)?;

        self.store.remove(Collection::Products, id)?;
        info!("deleted product {} ({})", product.name, product.id);
        Ok(format!("Name {} with ID {} deleted", product.name, product.id))
    }
}
