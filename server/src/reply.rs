//! Response envelope and error mapping.

use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use storekeep_catalog::CatalogError;
use tracing::error;

/// The `{"message": ...}` envelope every non-collection response uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Map a catalog error onto a status code and message body.
///
/// `not_found` is the entity's own not-found status: categories and users
/// answer 400 while products answer 404, a long-standing split preserved
/// for client compatibility.
pub(crate) fn error_response(
    err: CatalogError,
    not_found: StatusCode,
) -> (StatusCode, Json<Message>) {
    let (status, message) = match &err {
        CatalogError::Validation(_) | CatalogError::HasDependents => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        CatalogError::NotFound(_) => (not_found, err.to_string()),
        CatalogError::Conflict(_) => (StatusCode::CONFLICT, err.to_string()),
        CatalogError::Storage(_) | CatalogError::Serialization(_) | CatalogError::Hash(_) => {
            error!("request failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_owned(),
            )
        }
    };
    (status, Json(Message::new(message)))
}
