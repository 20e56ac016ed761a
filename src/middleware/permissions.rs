use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::items::ItemPermission;

/// Permission gate, installed per route with
/// `from_fn_with_state(ItemPermission::.., check_permissions)`.
///
/// Must run after `jwt_auth_middleware`.
pub async fn check_permissions(
    State(required): State<ItemPermission>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| ApiError::unauthorized("JWT authentication required before permission check"))?;

    if !auth_user.has_permission(required) {
        tracing::warn!(
            "Permission check failed: '{}' lacks '{}' for {} {}",
            auth_user.subject,
            required,
            request.method(),
            request.uri()
        );
        return Err(ApiError::forbidden("Insufficient permissions"));
    }

    Ok(next.run(request).await)
}
