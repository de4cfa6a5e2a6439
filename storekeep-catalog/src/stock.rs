//! Low-stock scanning and notification dispatch.

use crate::error::CatalogResult;
use std::sync::Arc;
use storekeep_model::Product;
use storekeep_storage::{Collection, DocumentStore, Filter};
use thiserror::Error;
use tracing::{info, warn};

/// Notification dispatch failed for one product.
#[derive(Debug, Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

/// Receives low-stock notifications.
pub trait Notifier: Send + Sync {
    /// Called once per active product whose stock has fallen to or below
    /// its threshold. An error is logged by the scanner and does not stop
    /// the remaining products from being evaluated.
    fn low_stock(&self, product: &Product) -> Result<(), NotifyError>;
}

/// Default notifier: writes the alert to the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn low_stock(&self, product: &Product) -> Result<(), NotifyError> {
        info!(
            "The stock for {} is low ({} items left).",
            product.name, product.stock
        );
        Ok(())
    }
}

/// Periodic inventory sweep over active products.
///
/// Side effect only: dispatches notifications, never mutates product state.
pub struct StockScanner {
    store: Arc<DocumentStore>,
    notifier: Arc<dyn Notifier>,
}

impl StockScanner {
    pub fn new(store: Arc<DocumentStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// One scan pass. Returns the number of breaches found; a breach is
    /// `stock <= lowStockThreshold`, so equality counts.
    pub fn scan(&self) -> CatalogResult<usize> {
        let docs = self
            .store
            .find_all(Collection::Products, &[Filter::EqBool("isActive", true)])?;
        let mut breaches = 0;
        for doc in docs {
            let product: Product = serde_json::from_value(doc)?;
            if product.stock <= product.low_stock_threshold {
                breaches += 1;
                if let Err(err) = self.notifier.low_stock(&product) {
                    warn!("low-stock notification for {} failed: {err}", product.name);
                }
            }
        }
        Ok(breaches)
    }
}
