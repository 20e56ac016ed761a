use std::sync::Arc;

use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;

use crate::app::app;
use crate::config;
use crate::handlers::AppState;
use crate::items::{InMemoryItemService, ItemService};

pub async fn handle(port: Option<u16>) -> anyhow::Result<()> {
    let settings = config::config();

    let store: Arc<dyn ItemService> = if settings.items.seed_sample_items {
        Arc::new(InMemoryItemService::with_sample_items())
    } else {
        Arc::new(InMemoryItemService::new())
    };
    let state = AppState::new(store).with_strict_create_errors(settings.items.strict_create_errors);

    let port = port.unwrap_or(settings.api.port);
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!(
        "Items API listening on http://{} (items at '{}')",
        bind_addr,
        if settings.api.base_path.is_empty() { "/" } else { settings.api.base_path.as_str() }
    );

    let service = ServiceExt::<Request>::into_make_service(app(state, settings));
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Items API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
