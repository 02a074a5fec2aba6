//! Age-specific dosage recommendation endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::knowledge::AgeGroup;

#[derive(Deserialize)]
pub struct DosageRequest {
    pub drug: String,
    /// Numeric age in years; converted to a category at this boundary.
    pub age: u32,
}

#[derive(Serialize)]
pub struct DosageResponse {
    pub drug: String,
    pub age_group: AgeGroup,
    pub recommended_max_dose_mg: u32,
}

/// `POST /api/dosage` — maximum daily dose for a drug and numeric age.
pub async fn recommend(
    State(ctx): State<ApiContext>,
    Json(req): Json<DosageRequest>,
) -> Result<Json<DosageResponse>, ApiError> {
    let age_group = AgeGroup::from_age(req.age);
    let record = ctx
        .core
        .table()
        .lookup(&req.drug)
        .ok_or_else(|| ApiError::NotFound(format!("Drug not found: {}", req.drug.trim())))?;

    Ok(Json(DosageResponse {
        drug: record.name.clone(),
        age_group,
        recommended_max_dose_mg: record.max_dose_for(age_group),
    }))
}
