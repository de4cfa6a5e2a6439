//! Shared state and HTTP API for the storekeep server.
//!
//! One path per collection, with GET/POST/PATCH/DELETE all addressed by
//! JSON bodies rather than path parameters.

mod extract;
mod handlers;
mod reply;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use storekeep_catalog::{CategoryService, ProductService, UserService};
use storekeep_storage::DocumentStore;

pub use extract::AppJson;
pub use reply::Message;

/// Handles shared by every request handler.
pub struct AppState {
    pub categories: CategoryService,
    pub products: ProductService,
    pub users: UserService,
}

impl AppState {
    /// Build the per-entity services over one shared store handle.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            categories: CategoryService::new(store.clone()),
            products: ProductService::new(store.clone()),
            users: UserService::new(store),
        }
    }
}

/// Build the HTTP API router with the given application state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/categories",
            get(handlers::categories::list)
                .post(handlers::categories::create)
                .patch(handlers::categories::update)
                .delete(handlers::categories::delete),
        )
        .route(
            "/products",
            get(handlers::products::list)
                .post(handlers::products::create)
                .patch(handlers::products::update)
                .delete(handlers::products::delete),
        )
        .route(
            "/users",
            get(handlers::users::list)
                .post(handlers::users::create)
                .patch(handlers::users::update)
                .delete(handlers::users::delete),
        )
        .with_state(state)
}
