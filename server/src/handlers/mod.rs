//! Request handlers, one module per collection.

pub mod categories;
pub mod products;
pub mod users;

use serde::Deserialize;

/// DELETE requests address the record by id in the body.
#[derive(Debug, Deserialize)]
pub(crate) struct DeleteBody {
    #[serde(default)]
    pub id: Option<String>,
}
