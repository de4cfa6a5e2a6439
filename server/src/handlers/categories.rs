//! /categories handlers.

use crate::AppState;
use crate::extract::AppJson;
use crate::handlers::DeleteBody;
use crate::reply::{self, Message};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use storekeep_model::CategoryInput;

/// Categories report a missing record as 400, not 404.
const NOT_FOUND_STATUS: StatusCode = StatusCode::BAD_REQUEST;

pub async fn list(State(state): State<Arc<AppState>>) -> Response {
    match state.categories.list() {
        Ok(categories) => Json(categories).into_response(),
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<CategoryInput>,
) -> Response {
    match state.categories.create(input) {
        Ok(_) => {
            (StatusCode::CREATED, Json(Message::new("New category created"))).into_response()
        }
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<CategoryInput>,
) -> Response {
    match state.categories.update(input) {
        Ok(category) => {
            Json(Message::new(format!("{} updated", category.name))).into_response()
        }
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<DeleteBody>,
) -> Response {
    match state.categories.delete(body.id.as_deref()) {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}
