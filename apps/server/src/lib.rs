//! HTTP layer for shortforge.
//!
//! One page, one health probe, one generation endpoint. Each request is
//! handled statelessly; the only shared state is the immutable upstream
//! configuration.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod models;
pub mod state;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health_check))
        .route("/api/generate", post(api::generate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}
