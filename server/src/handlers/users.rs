//! /users handlers. Responses never include password hashes; the service
//! layer only hands out `PublicUser`.

use crate::AppState;
use crate::extract::AppJson;
use crate::handlers::DeleteBody;
use crate::reply::{self, Message};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use storekeep_model::UserInput;

/// Users report a missing record as 400, not 404.
const NOT_FOUND_STATUS: StatusCode = StatusCode::BAD_REQUEST;

pub async fn list(State(state): State<Arc<AppState>>) -> Response {
    match state.users.list() {
        Ok(users) if users.is_empty() => {
            (StatusCode::BAD_REQUEST, Json(Message::new("No users found"))).into_response()
        }
        Ok(users) => Json(users).into_response(),
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<UserInput>,
) -> Response {
    match state.users.create(input) {
        Ok(user) => (
            StatusCode::CREATED,
            Json(Message::new(format!("New user {} created", user.name))),
        )
            .into_response(),
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<UserInput>,
) -> Response {
    match state.users.update(input) {
        Ok(user) => Json(Message::new(format!("{} updated", user.name))).into_response(),
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<DeleteBody>,
) -> Response {
    match state.users.delete(body.id.as_deref()) {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(err) => reply::error_response(err, NOT_FOUND_STATUS).into_response(),
    }
}
