//! Entity and request payload types for the storekeep catalog.
//!
//! Defines the records stored in the three catalog collections (categories,
//! products, users) and the payloads the HTTP surface accepts. Everything
//! serializes in camelCase to match the store's document format, so a record
//! written by the services round-trips unchanged through the document store.
//!
//! Validation lives in `storekeep-catalog`; these types carry no invariants
//! beyond their shapes.

mod category;
mod clock;
mod ids;
mod product;
mod user;

pub use category::{Category, CategoryInput};
pub use clock::now_millis;
pub use ids::RecordId;
pub use product::{Product, ProductInput, Ratings};
pub use user::{Address, PublicUser, User, UserInput};
