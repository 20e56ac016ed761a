use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::handlers::{failure, AppState, ItemIdPath};

/// GET / - List all items
pub async fn list(State(state): State<AppState>) -> Response {
    match state.items.find_all().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => failure(StatusCode::INTERNAL_SERVER_ERROR, "list items", e),
    }
}

/// GET /:id - Get a single item
///
/// An unknown id is still a 200, with an empty body.
pub async fn get(State(state): State<AppState>, ItemIdPath(id): ItemIdPath) -> Response {
    match state.items.find(id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => StatusCode::OK.into_response(),
        Err(e) => failure(StatusCode::INTERNAL_SERVER_ERROR, "get item", e),
    }
}
