// handlers/mod.rs - Items router
//
// Two security tiers, scoped as separate route groups and merged:
// Public (no auth) → Protected (JWT auth + per-route permission)
pub mod public;
pub mod protected;


use std::sync::Arc;

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    middleware::{from_fn, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put, MethodRouter},
    Router,
};

use crate::items::{ItemPermission, ItemService, ItemServiceError, ParsedId};
use crate::middleware::{check_permissions, jwt_auth_middleware};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemService>,
    /// Status for a failed create; `200 OK` unless strict create errors are on
    pub create_failure_status: StatusCode,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemService>) -> Self {
        Self {
            items,
            create_failure_status: StatusCode::OK,
        }
    }

    pub fn with_strict_create_errors(mut self, strict: bool) -> Self {
        self.create_failure_status = if strict {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        };
        self
    }
}

/// Build the items router. Mount it under a base path such as `/items`.
pub fn items_router(state: AppState) -> Router {
    public_routes().merge(protected_routes()).with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::items_list))
        .route("/:id", get(public::items_get))
}

fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", gated(post(protected::items_create), ItemPermission::CreateItems))
        .route("/:id", gated(put(protected::items_update), ItemPermission::UpdateItems))
        .route("/:id", gated(delete(protected::items_delete), ItemPermission::DeleteItems))
}

/// JWT gate outermost, then the permission gate. Layered per method so
/// unrouted methods still fall through to 405.
fn gated(route: MethodRouter<AppState>, permission: ItemPermission) -> MethodRouter<AppState> {
    route
        .route_layer(from_fn_with_state(permission, check_permissions))
        .route_layer(from_fn(jwt_auth_middleware))
}

/// `:id` path segment, parsed base 10; never rejects a non-numeric id
pub struct ItemIdPath(pub ParsedId);

#[async_trait]
impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = PathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(ParsedId::parse(&segment)))
    }
}

/// `:id` path segment parsed without a radix, so `0x1f` reads as hex.
/// Used by the update and delete routes.
pub struct AutoRadixIdPath(pub ParsedId);

#[async_trait]
impl<S> FromRequestParts<S> for AutoRadixIdPath
where
    S: Send + Sync,
{
    type Rejection = PathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(ParsedId::parse_auto(&segment)))
    }
}

/// Plain-text failure body carrying the service error message
pub(crate) fn failure(status: StatusCode, operation: &str, err: ItemServiceError) -> Response {
    tracing::error!("{} failed: {}", operation, err);
    (status, err.to_string()).into_response()
}
