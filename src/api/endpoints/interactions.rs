//! Interaction check endpoint.

use std::collections::BTreeSet;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::interactions::{self, InteractionPolicy};

#[derive(Deserialize)]
pub struct InteractionsRequest {
    pub drugs: Vec<String>,
}

#[derive(Serialize)]
pub struct InteractionsResponse {
    pub interactions: Vec<String>,
}

/// `POST /api/interactions/check` — table-driven interaction check
/// over an explicit drug list.
pub async fn check(
    State(ctx): State<ApiContext>,
    Json(req): Json<InteractionsRequest>,
) -> Result<Json<InteractionsResponse>, ApiError> {
    let drugs: BTreeSet<String> = req
        .drugs
        .iter()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect();

    let warnings = interactions::check(ctx.core.table(), &drugs, InteractionPolicy::TableDriven);
    Ok(Json(InteractionsResponse { interactions: warnings }))
}
