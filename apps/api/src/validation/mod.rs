//! Input validation: asks the model whether a task description is about
//! building an agentic AI or AI automation system.
//!
//! Never fails: remote errors and malformed replies degrade to an "invalid"
//! verdict with confidence 0.0 and a reason describing what went wrong.

pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::extract::{
    extract_json_object, non_blank_str, unit_interval, ExtractError,
};
use crate::llm_client::CompletionService;
use crate::validation::prompts::VALIDATION_PROMPT_TEMPLATE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Between 0.0 and 1.0.
    pub confidence: f64,
    pub reason: String,
}

impl ValidationResult {
    fn rejected(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            confidence: 0.0,
            reason: reason.into(),
        }
    }
}

pub fn build_validation_prompt(task_description: &str) -> String {
    VALIDATION_PROMPT_TEMPLATE.replace("{task_description}", task_description)
}

/// Validates a task description with a single completion call. No retries.
pub async fn validate_task(
    task_description: &str,
    llm: &dyn CompletionService,
) -> ValidationResult {
    let prompt = build_validation_prompt(task_description);

    let reply = match llm.complete(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Validation call failed: {e}");
            return ValidationResult::rejected(format!("Validation error: {e}"));
        }
    };

    let result = parse_validation_reply(&reply);
    info!(
        "Validation verdict: is_valid={}, confidence={:.2}",
        result.is_valid, result.confidence
    );
    result
}

/// Brace-extracts the reply and applies field defaults.
pub fn parse_validation_reply(reply: &str) -> ValidationResult {
    let object = match extract_json_object(reply) {
        Ok(object) => object,
        Err(ExtractError::NoObject) => {
            warn!("Validation reply contained no JSON object");
            return ValidationResult::rejected("Unable to validate input");
        }
        Err(e @ ExtractError::Invalid(_)) => {
            warn!("Validation reply was not valid JSON: {e}");
            return ValidationResult::rejected(format!("Validation error: {e}"));
        }
    };

    ValidationResult {
        is_valid: object
            .get("is_valid")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false),
        confidence: unit_interval(&object, "confidence"),
        reason: non_blank_str(&object, "reason")
            .unwrap_or_else(|| "No reason provided".to_string()),
    }
}
