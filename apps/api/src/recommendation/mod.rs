//! Framework recommendation: turns a validated task description and the
//! user's coding experience into a structured recommendation.
//!
//! Steering toward the no-code option lives in the prompt text, not in code.

pub mod prompts;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::frameworks::{FrameworkProfile, FRAMEWORKS};
use crate::llm_client::extract::{extract_json_object, non_blank_str, string_list, unit_interval};
use crate::llm_client::{CompletionService, LlmError};
use crate::recommendation::prompts::{
    CODING_GUIDANCE, NO_CODE_GUIDANCE, RECOMMENDATION_PROMPT_TEMPLATE,
};

/// Placeholder framework name used when the reply could not be parsed.
pub const UNPARSED_FRAMEWORK: &str = "Unable to parse";

/// Whether the user has coding experience. Passed per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodingExperience {
    #[default]
    #[serde(alias = "yes", alias = "YES")]
    Yes,
    #[serde(alias = "no", alias = "NO")]
    No,
}

impl CodingExperience {
    pub fn as_str(self) -> &'static str {
        match self {
            CodingExperience::Yes => "Yes",
            CodingExperience::No => "No",
        }
    }
}

impl fmt::Display for CodingExperience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodingExperience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(CodingExperience::Yes),
            "no" => Ok(CodingExperience::No),
            other => Err(format!("coding experience must be Yes or No, got '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Expected to name one of the four profiles, but not guaranteed.
    pub recommended_framework: String,
    /// Between 0.0 and 1.0.
    pub confidence_score: f64,
    pub reasoning: String,
    pub alternative_options: Vec<String>,
    pub implementation_tips: Vec<String>,
    pub potential_challenges: Vec<String>,
}

impl RecommendationResult {
    /// Fallback when the reply holds no parseable object; the raw reply is kept
    /// as the reasoning so the user still sees what the model said.
    fn unparsed(reply: &str) -> Self {
        Self {
            recommended_framework: UNPARSED_FRAMEWORK.to_string(),
            confidence_score: 0.0,
            reasoning: reply.to_string(),
            alternative_options: Vec::new(),
            implementation_tips: Vec::new(),
            potential_challenges: Vec::new(),
        }
    }
}

fn format_framework_option(index: usize, profile: &FrameworkProfile) -> String {
    format!(
        "{}. {} - {}. Best for: {}.",
        index + 1,
        profile.name,
        profile.description,
        profile.best_for.join(", ").to_lowercase()
    )
}

pub fn build_recommendation_prompt(task_description: &str, experience: CodingExperience) -> String {
    let framework_options = FRAMEWORKS
        .iter()
        .enumerate()
        .map(|(i, f)| format_framework_option(i, f))
        .collect::<Vec<_>>()
        .join("\n\n");

    let guidance = match experience {
        CodingExperience::No => NO_CODE_GUIDANCE,
        CodingExperience::Yes => CODING_GUIDANCE,
    };

    // Task text goes in last so user input is never re-expanded as a placeholder.
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{framework_options}", &framework_options)
        .replace("{experience_guidance}", guidance)
        .replace("{coding_experience}", experience.as_str())
        .replace("{task_description}", task_description)
}

/// Requests a recommendation. Remote failures are returned as errors; a
/// malformed reply yields the `Unable to parse` fallback instead.
pub async fn generate_recommendation(
    task_description: &str,
    experience: CodingExperience,
    llm: &dyn CompletionService,
) -> Result<RecommendationResult, LlmError> {
    let prompt = build_recommendation_prompt(task_description, experience);
    let reply = llm.complete(&prompt).await?;

    let result = parse_recommendation_reply(&reply);
    info!(
        "Recommendation: framework={}, confidence={:.2}",
        result.recommended_framework, result.confidence_score
    );
    Ok(result)
}

/// Brace-extracts the reply and applies field defaults.
pub fn parse_recommendation_reply(reply: &str) -> RecommendationResult {
    let object = match extract_json_object(reply) {
        Ok(object) => object,
        Err(e) => {
            warn!("Recommendation reply could not be parsed: {e}");
            return RecommendationResult::unparsed(reply);
        }
    };

    RecommendationResult {
        recommended_framework: non_blank_str(&object, "recommended_framework")
            .unwrap_or_else(|| UNPARSED_FRAMEWORK.to_string()),
        confidence_score: unit_interval(&object, "confidence_score"),
        reasoning: non_blank_str(&object, "reasoning").unwrap_or_default(),
        alternative_options: string_list(&object, "alternative_options"),
        implementation_tips: string_list(&object, "implementation_tips"),
        potential_challenges: string_list(&object, "potential_challenges"),
    }
}
