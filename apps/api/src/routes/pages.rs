//! HTML handlers for the two tabs.

use axum::{extract::State, response::Html, Form};
use uuid::Uuid;

use crate::errors::AppError;
use crate::presentation::{render_overview_page, render_recommend_page, FormState, PageResult};
use crate::state::AppState;
use crate::submission::{run_submission, Submission};

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_recommend_page(&FormState::default(), None))
}

/// POST /
///
/// Runs the submission and re-renders the form with the result below it.
/// Failures never escape as error pages; they are shown inline.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(submission): Form<Submission>,
) -> Html<String> {
    let form = FormState {
        task_description: submission.task_description.clone(),
        coding_experience: submission.coding_experience,
    };

    let result = match run_submission(&submission, Uuid::new_v4(), state.llm.as_ref()).await {
        Ok(outcome) => PageResult::Outcome(outcome),
        Err(AppError::Validation(message)) => PageResult::Warning(message),
        Err(e) => PageResult::Warning(e.to_string()),
    };

    Html(render_recommend_page(&form, Some(&result)))
}

/// GET /frameworks
pub async fn handle_overview() -> Html<String> {
    Html(render_overview_page())
}
