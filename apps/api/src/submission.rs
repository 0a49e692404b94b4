//! Submission flow: validate the task, then (only if valid) recommend.
//!
//! The two completion calls are strictly sequential. The coding-experience
//! choice travels with the request; nothing is kept between submissions.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::frameworks::{find_framework, FrameworkDetails};
use crate::llm_client::CompletionService;
use crate::recommendation::{generate_recommendation, CodingExperience, RecommendationResult};
use crate::validation::{validate_task, ValidationResult};

pub const EMPTY_TASK_MESSAGE: &str = "Please describe your AI automation task first!";

#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    /// Missing is treated like blank and rejected by `require_task`.
    #[serde(default)]
    pub task_description: String,
    #[serde(default, deserialize_with = "lenient_experience")]
    pub coding_experience: CodingExperience,
}

/// Unrecognized values fall back to the default instead of failing the request.
fn lenient_experience<'de, D>(deserializer: D) -> Result<CodingExperience, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::parse::<CodingExperience>) {
        Some(Ok(experience)) => experience,
        Some(Err(e)) => {
            warn!("{e}; using {}", CodingExperience::default());
            CodingExperience::default()
        }
        None => CodingExperience::default(),
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The validator judged the task out of scope.
    Rejected { validation: ValidationResult },
    /// `framework` is present only when the recommended name matches a profile.
    Recommended {
        validation: ValidationResult,
        recommendation: RecommendationResult,
        framework: Option<FrameworkDetails>,
    },
    /// The recommendation call itself failed; nothing usable to show.
    Failed {
        validation: ValidationResult,
        error: String,
    },
}

/// Rejects blank input before any remote call is made.
pub fn require_task(task_description: &str) -> Result<&str, AppError> {
    let task = task_description.trim();
    if task.is_empty() {
        return Err(AppError::Validation(EMPTY_TASK_MESSAGE.to_string()));
    }
    Ok(task)
}

/// Runs one submission end to end.
pub async fn run_submission(
    submission: &Submission,
    submission_id: Uuid,
    llm: &dyn CompletionService,
) -> Result<SubmissionOutcome, AppError> {
    let task = require_task(&submission.task_description)?;
    let experience = submission.coding_experience;

    let span = info_span!("submission", %submission_id, coding_experience = %experience);
    let outcome = async move {
        let validation = validate_task(task, llm).await;
        if !validation.is_valid {
            info!("Task rejected: {}", validation.reason);
            return SubmissionOutcome::Rejected { validation };
        }

        match generate_recommendation(task, experience, llm).await {
            Ok(recommendation) => {
                let framework = find_framework(&recommendation.recommended_framework)
                    .map(FrameworkDetails::from);
                if framework.is_none() {
                    info!(
                        "Recommended framework '{}' has no matching profile",
                        recommendation.recommended_framework
                    );
                }
                SubmissionOutcome::Recommended {
                    validation,
                    recommendation,
                    framework,
                }
            }
            Err(e) => {
                warn!("Recommendation call failed: {e}");
                SubmissionOutcome::Failed {
                    validation,
                    error: e.to_string(),
                }
            }
        }
    }
    .instrument(span)
    .await;

    Ok(outcome)
}
