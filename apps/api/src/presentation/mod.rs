//! Server-rendered pages for the two tabs: the recommendation form and the
//! static framework overview.

pub mod html;

use std::fmt::Write;

use crate::frameworks::{comparison_table, FrameworkDetails, FrameworkProfile, FRAMEWORKS};
use crate::presentation::html::{bullet_list, escape, percent, titled_list};
use crate::recommendation::{CodingExperience, RecommendationResult};
use crate::submission::SubmissionOutcome;
use crate::validation::ValidationResult;

const TITLE: &str = "Agentic AI Framework Recommender";

const TASK_PLACEHOLDER: &str = "Example: I want to build a personalized email generator that gets \
information from email domains and creates customized outreach emails based on the company's \
profile and industry...";

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
nav a{margin-right:1rem}nav a.active{font-weight:bold}\
textarea{width:100%;height:9rem}\
.error{color:#b00020}.warning{color:#8a6d00}.success{color:#1b5e20}\
.panel{border:1px solid #ddd;padding:1rem;margin:1rem 0}\
table{border-collapse:collapse}td,th{border:1px solid #ddd;padding:.4rem .8rem}";

const VALID_REQUEST_GUIDE: &str = "<details><summary>What makes a valid AI automation request?</summary>\
<p>This tool is for AI automation systems that involve:</p>\
<p><strong>Valid examples:</strong></p><ul>\
<li>AI workflows that automate business processes</li>\
<li>Tools that use AI to analyze, generate, or personalize content</li>\
<li>Multi-agent systems with role-based AI agents</li>\
<li>Autonomous agents that can make decisions independently</li>\
<li>AI-powered data processing and analysis systems</li>\
<li>Intelligent automation for customer service, sales, or marketing</li></ul>\
<p><strong>Invalid examples:</strong></p><ul>\
<li>General programming questions</li>\
<li>Non-AI related tasks or basic calculators</li>\
<li>Educational questions about AI concepts</li>\
<li>Simple static websites without AI components</li></ul>\
<p><strong>Try describing:</strong></p><ul>\
<li>What AI capabilities your system needs</li>\
<li>How the AI will process or analyze data</li>\
<li>What automated decisions or actions the AI will take</li>\
<li>How different AI components will work together</li></ul></details>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Recommend,
    Overview,
}

/// What the user typed, echoed back into the form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub task_description: String,
    pub coding_experience: CodingExperience,
}

/// Result area of the recommendation tab after a submit.
#[derive(Debug, Clone)]
pub enum PageResult {
    Warning(String),
    Outcome(SubmissionOutcome),
}

fn layout(active: Tab, body: &str) -> String {
    let class = |tab: Tab| if tab == active { " class=\"active\"" } else { "" };
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>{TITLE}</title><style>{STYLE}</style></head><body>\
<h1>{TITLE}</h1>\
<nav><a href=\"/\"{}>Get Recommendation</a><a href=\"/frameworks\"{}>Framework Overview</a></nav>\
<main>{body}</main></body></html>",
        class(Tab::Recommend),
        class(Tab::Overview),
    )
}

fn render_form(form: &FormState) -> String {
    let checked = |exp: CodingExperience| {
        if form.coding_experience == exp {
            " checked"
        } else {
            ""
        }
    };
    format!(
        "<h2>Describe Your Agentic AI System</h2>\
<form method=\"post\" action=\"/\">\
<label for=\"task_description\">Describe your AI automation system:</label>\
<textarea id=\"task_description\" name=\"task_description\" placeholder=\"{placeholder}\">{task}</textarea>\
<h3>Technical Background</h3>\
<p>Do you have coding experience?</p>\
<label><input type=\"radio\" name=\"coding_experience\" value=\"Yes\"{yes}> Yes</label> \
<label><input type=\"radio\" name=\"coding_experience\" value=\"No\"{no}> No</label>\
<p><button type=\"submit\">Get Recommendation</button></p></form>",
        placeholder = escape(TASK_PLACEHOLDER),
        task = escape(&form.task_description),
        yes = checked(CodingExperience::Yes),
        no = checked(CodingExperience::No),
    )
}

fn render_rejection(validation: &ValidationResult) -> String {
    format!(
        "<div class=\"panel\"><p class=\"error\">Invalid Request</p>\
<p class=\"warning\"><strong>Reason:</strong> {}</p>{VALID_REQUEST_GUIDE}\
<h3>Suggestion</h3><p>Try describing a system that uses AI to automate tasks, analyze data, \
or make intelligent decisions.</p></div>",
        escape(&validation.reason)
    )
}

fn render_details(details: &FrameworkDetails) -> String {
    format!(
        "<aside class=\"panel\"><h3>Framework Details</h3>\
<p><strong>Description:</strong> {}</p><p><strong>Key Strengths:</strong></p>{}</aside>",
        escape(details.description),
        bullet_list(&details.key_strengths)
    )
}

pub fn render_recommendation(
    recommendation: &RecommendationResult,
    framework: Option<&FrameworkDetails>,
) -> String {
    let mut out =
        String::from("<div class=\"panel\"><p class=\"success\">Recommendation generated!</p>");
    let _ = write!(
        out,
        "<h2>Recommended Framework: <strong>{}</strong></h2>\
<p>Confidence Score: <strong>{}</strong></p>\
<h3>Reasoning</h3><p>{}</p>",
        escape(&recommendation.recommended_framework),
        percent(recommendation.confidence_score),
        escape(&recommendation.reasoning),
    );
    out.push_str(&titled_list("Alternative Options", &recommendation.alternative_options));
    out.push_str(&titled_list("Implementation Tips", &recommendation.implementation_tips));
    out.push_str(&titled_list("Potential Challenges", &recommendation.potential_challenges));
    if let Some(details) = framework {
        out.push_str(&render_details(details));
    }
    out.push_str("</div>");
    out
}

fn render_result(result: &PageResult) -> String {
    match result {
        PageResult::Warning(message) => format!("<p class=\"warning\">{}</p>", escape(message)),
        PageResult::Outcome(SubmissionOutcome::Rejected { validation }) => {
            render_rejection(validation)
        }
        PageResult::Outcome(SubmissionOutcome::Recommended {
            recommendation,
            framework,
            ..
        }) => render_recommendation(recommendation, framework.as_ref()),
        PageResult::Outcome(SubmissionOutcome::Failed { error, .. }) => format!(
            "<p class=\"error\">Error getting recommendation: {}</p>",
            escape(error)
        ),
    }
}

/// The "Get Recommendation" tab, optionally with the result of a submit.
pub fn render_recommend_page(form: &FormState, result: Option<&PageResult>) -> String {
    let mut body = render_form(form);
    if let Some(result) = result {
        body.push_str(&render_result(result));
    }
    layout(Tab::Recommend, &body)
}

fn render_profile(profile: &FrameworkProfile) -> String {
    format!(
        "<details class=\"panel\"><summary><strong>{name}</strong></summary>\
<p><strong>Description:</strong> {description}</p>\
<p><strong>Key Strengths:</strong></p>{strengths}\
<p><strong>Best Use Cases:</strong></p>{best_for}\
<p><em>{title}</em>: {blurb}</p></details>",
        name = escape(profile.name),
        description = escape(profile.description),
        strengths = bullet_list(profile.strengths),
        best_for = bullet_list(profile.best_for),
        title = escape(profile.highlight_title),
        blurb = escape(profile.highlight_blurb),
    )
}

/// The "Framework Overview" tab. Static content, rendered unconditionally.
pub fn render_overview_page() -> String {
    let mut body = String::from(
        "<h2>Framework Overview</h2><p>Learn about each agentic AI framework and their capabilities</p>",
    );
    for profile in &FRAMEWORKS {
        body.push_str(&render_profile(profile));
    }

    body.push_str(
        "<h2>Quick Comparison</h2><table><tr><th>Framework</th><th>Complexity</th>\
<th>Learning Curve</th><th>Best For</th></tr>",
    );
    for row in comparison_table() {
        let _ = write!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(row.framework),
            escape(row.complexity),
            escape(row.learning_curve),
            escape(row.best_for)
        );
    }
    body.push_str("</table>");

    layout(Tab::Overview, &body)
}
