//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. Routes are nested under `/api/`.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router over shared core state.
pub fn api_router(core: Arc<CoreState>) -> Router {
    let ctx = ApiContext::new(core);

    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/analyze", post(endpoints::analyze::analyze))
        .route("/entities/extract", post(endpoints::entities::extract))
        .route("/interactions/check", post(endpoints::interactions::check))
        .route("/dosage", post(endpoints::dosage::recommend))
        .route("/alternatives", post(endpoints::alternatives::suggest))
        .with_state(ctx);

    Router::new().nest("/api", api)
}
