//! Error types for the catalog core.

use std::fmt;
use storekeep_storage::StorageError;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The entity a not-found error refers to.
///
/// Kept on the error because the HTTP layer maps each entity to its own
/// not-found status code (categories and users answer 400, products 404).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Product,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Category => "Category",
            EntityKind::Product => "Product",
            EntityKind::User => "User",
        })
    }
}

/// A detected uniqueness violation. Each kind carries its own client-facing
/// message so responses stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Another category already uses this name.
    CategoryName,
    /// A sibling exists under the same parent and the slug is taken.
    CategoryComposite,
    /// Another product in the same category already uses this name.
    Product,
    /// Another user already uses this email.
    UserEmail,
}

impl ConflictKind {
    /// The client-facing message for this conflict.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ConflictKind::CategoryName => "Duplicate category name",
            ConflictKind::CategoryComposite => "Duplicate category",
            ConflictKind::Product => "Duplicate product",
            ConflictKind::UserEmail => "Duplicate email",
        }
    }
}

/// Errors produced by the mutation services and the stock scanner.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Missing or malformed input, recovered locally. Also carries
    /// reference-resolution failures.
    #[error("{0}")]
    Validation(String),

    /// The submitted id did not resolve to a record.
    #[error("{0} not found")]
    NotFound(EntityKind),

    /// A uniqueness violation prevented the write.
    #[error("{}", .0.message())]
    Conflict(ConflictKind),

    /// Category deletion blocked by referencing products.
    #[error("Category has assigned products")]
    HasDependents,

    /// Persistence failure; not locally recoverable.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A stored document failed to decode or a record failed to encode.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}
