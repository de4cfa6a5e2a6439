//! /products handlers.

use crate::AppState;
use crate::extract::AppJson;
use crate::handlers::DeleteBody;
use crate::reply::{self, Message};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use storekeep_model::ProductInput;

/// Unlike categories and users, products report a missing record as 404.
const NOT_FOUND_STATUS: StatusCode = StatusCode::NOT_FOUND;

pub async fn list(State(state): State<Arc<AppState>>) -> Response {
    match state.products.list() {
        Ok(products) => Json(products).into_response(),
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<ProductInput>,
) -> Response {
    match state.products.create(input) {
        Ok(_) => (StatusCode::CREATED, Json(Message::new("New product created"))).into_response(),
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<ProductInput>,
) -> Response {
    match state.products.update(input) {
        Ok(product) => Json(Message::new(format!("{} updated", product.name))).into_response(),
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<DeleteBody>,
) -> Response {
    match state.products.delete(body.id.as_deref()) {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}
