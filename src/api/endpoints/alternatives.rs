//! Alternative medication suggestions endpoint.

use std::collections::BTreeSet;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Deserialize)]
pub struct AlternativesRequest {
    pub drug: String,
}

#[derive(Serialize)]
pub struct AlternativesResponse {
    pub drug: String,
    pub alternatives: BTreeSet<String>,
}

/// `POST /api/alternatives` — declared alternatives for a drug.
pub async fn suggest(
    State(ctx): State<ApiContext>,
    Json(req): Json<AlternativesRequest>,
) -> Result<Json<AlternativesResponse>, ApiError> {
    let record = ctx
        .core
        .table()
        .lookup(&req.drug)
        .ok_or_else(|| ApiError::NotFound(format!("No alternatives found for: {}", req.drug.trim())))?;

    Ok(Json(AlternativesResponse {
        drug: record.name.clone(),
        alternatives: record.alternatives.clone(),
    }))
}
