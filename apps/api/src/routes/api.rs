//! JSON API mirroring the form flow for non-browser clients.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::frameworks::{comparison_table, ComparisonRow, FrameworkProfile, FRAMEWORKS};
use crate::state::AppState;
use crate::submission::{require_task, run_submission, Submission, SubmissionOutcome};
use crate::validation::{validate_task, ValidationResult};

#[derive(Debug, Serialize)]
pub struct FrameworksResponse {
    pub frameworks: &'static [FrameworkProfile],
    pub comparison: Vec<ComparisonRow>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub task_description: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub submission_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub outcome: SubmissionOutcome,
}

/// GET /api/v1/frameworks
pub async fn handle_frameworks() -> Json<FrameworksResponse> {
    Json(FrameworksResponse {
        frameworks: &FRAMEWORKS,
        comparison: comparison_table(),
    })
}

/// POST /api/v1/validate
///
/// Validation only. Always 200 for non-blank input: remote failures come back
/// as an invalid verdict with the error in `reason`.
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidationResult>, AppError> {
    let task = require_task(&request.task_description)?;
    Ok(Json(validate_task(task, state.llm.as_ref()).await))
}

/// POST /api/v1/recommend
///
/// Full flow: validate, then recommend when valid. A failed recommendation
/// call is an error response; a rejected task is a normal 200 outcome.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<Json<RecommendResponse>, AppError> {
    let submission_id = Uuid::new_v4();
    let outcome = run_submission(&submission, submission_id, state.llm.as_ref()).await?;

    if let SubmissionOutcome::Failed { error, .. } = &outcome {
        return Err(AppError::Llm(format!("Error getting recommendation: {error}")));
    }

    Ok(Json(RecommendResponse {
        submission_id,
        generated_at: Utc::now(),
        outcome,
    }))
}
