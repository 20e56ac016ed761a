use axum::{
    http::{header, HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower::Layer;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, Environment};
use crate::handlers::{items_router, AppState};

/// Full application: items router under the configured base path plus
/// service-level routes and global middleware.
///
/// Trailing slashes are trimmed before routing, so `/items/` reaches the
/// collection routes.
pub fn app(state: AppState, settings: &AppConfig) -> NormalizePath<Router> {
    let base_path = settings.api.base_path.as_str();
    let items = items_router(state);

    let mut router = if base_path.is_empty() {
        items.route("/health", get(health))
    } else {
        let descriptor = json!({
            "name": "Items API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "items": base_path,
                "health": "/health",
            }
        });

        Router::new()
            .route("/", get(move || async move { Json(descriptor) }))
            .route("/health", get(health))
            .nest(base_path, items)
    };

    if settings.security.enable_cors {
        router = router.layer(cors_layer(settings));
    }
    if settings.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn cors_layer(settings: &AppConfig) -> CorsLayer {
    if matches!(settings.environment, Environment::Development) {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = settings
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(86400))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
