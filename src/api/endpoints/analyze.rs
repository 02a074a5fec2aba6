//! Full prescription analysis endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::knowledge::AgeGroup;
use crate::pipeline::{AnalysisError, AnalysisInput, AnalysisReport};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub age_group: AgeGroup,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub report: AnalysisReport,
    pub rendered: String,
}

/// `POST /api/analyze` — run the full pipeline on prescription text.
///
/// The entity provider is a blocking HTTP call, so the pipeline runs
/// under `spawn_blocking`. Empty text is rejected with 400 before the
/// pipeline is invoked.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let input = AnalysisInput {
        text: req.text,
        age_group: req.age_group,
    };

    let analyzer = ctx.core.analyzer();
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&input))
        .await
        .map_err(|e| ApiError::Internal(format!("Analysis task failed: {e}")))?;

    let report = result.map_err(|e| match e {
        AnalysisError::EmptyInput => {
            ApiError::BadRequest("Please enter a prescription text to analyze.".into())
        }
    })?;

    let rendered = report.render_markdown();
    Ok(Json(AnalyzeResponse { report, rendered }))
}
