//! SQLite document store for the storekeep catalog.
//!
//! Records are stored as JSON documents, one table per collection
//! (categories, products, users), and are reached by id or by top-level
//! field-equality queries. String equality is case-insensitive: a
//! Unicode-lowercase `fold()` scalar function is registered on the
//! connection and applied to both sides of the comparison.
//!
//! A `counters` table provides the per-collection `order` sequence. The
//! increment is a single SQL upsert, atomic at the store layer, and the
//! one connection sits behind a mutex, so concurrent creates can never
//! observe the same counter value.

mod error;
mod store;

pub use error::{StorageError, StorageResult};
pub use store::{Collection, DocumentStore, Filter};
