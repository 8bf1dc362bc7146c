//! Server setup and routing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tracing::info;

use super::handlers;
use crate::connector::api::Container;

pub const API_PREFIX: &str = "/api/v1/chatGpt";

/// Largest accepted request body; sized for image uploads.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

pub type AppState = Arc<Container>;

/// Create the API router with all routes.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/modelList", get(handlers::model_list))
        .route("/prompt", post(handlers::prompt))
        .route("/image", post(handlers::upload_image))
        .route("/prompt/image", post(handlers::prompt_image));

    Router::new()
        .nest(API_PREFIX, api)
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Run the HTTP server until the process is stopped.
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving REST API on http://{}{}", listener.local_addr()?, API_PREFIX);
    axum::serve(listener, app).await?;
    Ok(())
}
