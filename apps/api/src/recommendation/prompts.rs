// LLM prompt templates for framework recommendation.

/// Recommendation prompt template.
/// Replace: {framework_options}, {experience_guidance}, {coding_experience}, {task_description}
/// `{task_description}` must be substituted last.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"You are an expert in agentic AI frameworks. The user has already been validated as asking about building an agentic AI system. Based on the following task description and their coding experience, recommend the most suitable framework from these options: n8n, LangGraph, CrewAI, or AutoGen.

Task Description: {task_description}
User's Coding Experience: {coding_experience}

Framework Options:
{framework_options}

IMPORTANT: Consider the user's coding experience when making recommendations:
- If coding experience is "No": Strongly favor n8n for its visual, no-code approach
- If coding experience is "Yes": Consider all frameworks based on the specific requirements
{experience_guidance}

Provide your recommendation in the following JSON format:
{
    "recommended_framework": "framework_name",
    "confidence_score": 0.85,
    "reasoning": "Detailed explanation of why this framework is best suited for this agentic AI system, considering their coding experience",
    "alternative_options": ["alternative1", "alternative2"],
    "implementation_tips": ["tip1", "tip2", "tip3"],
    "potential_challenges": ["challenge1", "challenge2"]
}

Consider factors specific to agentic AI systems:
- Agent autonomy requirements
- Multi-agent coordination needs
- Task complexity and reasoning depth
- Integration with external systems
- Scalability for multiple agents
- Development and maintenance complexity
- User's technical background and coding experience"#;

/// Added when the user has no coding experience.
pub const NO_CODE_GUIDANCE: &str = "This user has NO coding experience: recommend n8n unless the task is impossible to build without code, and explain how n8n covers it.";

/// Added when the user can code.
pub const CODING_GUIDANCE: &str = "This user can code: weigh every framework on the task's requirements alone.";
