//! Core catalog logic: validation, mutation orchestration, stock scanning.
//!
//! Every mutating operation runs the same sequence: required-field
//! validation, uniqueness check, integrity guard, store write. The services
//! are stateless between calls; the shared `DocumentStore` handle is the
//! only thing they hold, so one service instance safely serves concurrent
//! requests.
//!
//! # Components
//!
//! - **uniqueness**: conflict detection for the three collections, including
//!   the two-tier category duplicate policy
//! - **integrity**: cross-entity guards (dependent products block category
//!   deletion, references must resolve)
//! - **CategoryService / ProductService / UserService**: the mutation paths
//! - **StockScanner**: periodic low-stock sweep dispatching to a `Notifier`

mod categories;
mod error;
mod input;
pub mod integrity;
mod products;
mod stock;
pub mod uniqueness;
mod users;

pub use categories::CategoryService;
pub use error::{CatalogError, CatalogResult, ConflictKind, EntityKind};
pub use products::ProductService;
pub use stock::{LogNotifier, Notifier, NotifyError, StockScanner};
pub use users::UserService;
