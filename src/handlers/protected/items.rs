use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::handlers::{failure, AppState, AutoRadixIdPath};
use crate::items::BaseItem;

/// POST / - Create an item (requires `create:items`)
///
/// Failures use `AppState::create_failure_status`, which is 200 by default,
/// so clients must not treat a 200 here as proof of creation.
pub async fn create(State(state): State<AppState>, Json(item): Json<BaseItem>) -> Response {
    match state.items.create(item).await {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => failure(state.create_failure_status, "create item", e),
    }
}

/// PUT /:id - Update the item if it exists, otherwise create one from the body
/// (requires `update:items`)
///
/// The created item's id comes from the store, not from the path.
pub async fn update(
    State(state): State<AppState>,
    AutoRadixIdPath(id): AutoRadixIdPath,
    Json(body): Json<BaseItem>,
) -> Response {
    let result = match state.items.find(id).await {
        Ok(Some(_)) => state.items.update(id, body).await,
        Ok(None) => {
            tracing::debug!("Item {} not found, creating instead", id);
            state.items.create(body).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => failure(StatusCode::INTERNAL_SERVER_ERROR, "upsert item", e),
    }
}

/// DELETE /:id - Remove an item (requires `delete:items`)
pub async fn delete(State(state): State<AppState>, AutoRadixIdPath(id): AutoRadixIdPath) -> Response {
    match state.items.remove(id).await {
        Ok(()) => (StatusCode::OK, "Success").into_response(),
        Err(e) => failure(StatusCode::INTERNAL_SERVER_ERROR, "delete item", e),
    }
}
