//! Raw NER passthrough endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::Entity;

#[derive(Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub entities: Vec<Entity>,
    /// True when the provider failed and the list degraded to empty.
    pub degraded: bool,
}

/// `POST /api/entities/extract` — raw entity spans for a text.
///
/// Fail-soft like the pipeline: a provider failure yields an empty
/// list flagged `degraded`, never an error response.
pub async fn extract(
    State(ctx): State<ApiContext>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let text = req.text.trim().to_string();
    if text.is_empty() {
        return Err(ApiError::BadRequest("Text cannot be empty".into()));
    }

    let provider = ctx.core.provider();
    let result = tokio::task::spawn_blocking(move || provider.infer(&text))
        .await
        .map_err(|e| ApiError::Internal(format!("Inference task failed: {e}")))?;

    let (entities, degraded) = match result {
        Ok(entities) => (entities, false),
        Err(e) => {
            tracing::warn!(error = %e, "Entity provider failed, returning empty list");
            (Vec::new(), true)
        }
    };

    Ok(Json(ExtractResponse { entities, degraded }))
}
