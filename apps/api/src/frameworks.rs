//! Static reference data for the four supported agentic AI frameworks.

use serde::Serialize;

/// A framework profile. Defined once at compile time, never mutated.
#[derive(Debug, Serialize)]
pub struct FrameworkProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub best_for: &'static [&'static str],
    /// Overview call-out, e.g. "Visual & No-Code".
    pub highlight_title: &'static str,
    pub highlight_blurb: &'static str,
    pub complexity: &'static str,
    pub learning_curve: &'static str,
    /// One-phrase summary used in the comparison table.
    pub focus: &'static str,
}

pub static FRAMEWORKS: [FrameworkProfile; 4] = [
    FrameworkProfile {
        name: "n8n",
        description: "A visual workflow automation tool with AI capabilities",
        strengths: &[
            "Visual workflow builder",
            "No-code/low-code",
            "Extensive integrations",
            "Easy to use",
        ],
        best_for: &[
            "Workflow automation",
            "Data integration",
            "Business process automation",
            "Non-technical users",
        ],
        highlight_title: "Visual & No-Code",
        highlight_blurb: "Perfect for teams without deep technical expertise",
        complexity: "Low",
        learning_curve: "Easy",
        focus: "Business Automation",
    },
    FrameworkProfile {
        name: "LangGraph",
        description: "A library for building stateful, multi-actor applications with LLMs",
        strengths: &[
            "Stateful workflows",
            "Complex reasoning chains",
            "Graph-based architecture",
            "LangChain integration",
        ],
        best_for: &[
            "Complex reasoning tasks",
            "Multi-step workflows",
            "State management",
            "Research applications",
        ],
        highlight_title: "Complex Reasoning",
        highlight_blurb: "Ideal for sophisticated multi-step workflows",
        complexity: "High",
        learning_curve: "Steep",
        focus: "Research & Complex Tasks",
    },
    FrameworkProfile {
        name: "CrewAI",
        description: "A framework for orchestrating role-playing, autonomous AI agents",
        strengths: &[
            "Role-based agents",
            "Collaborative workflows",
            "Task delegation",
            "Hierarchical structures",
        ],
        best_for: &[
            "Team collaboration simulation",
            "Multi-agent systems",
            "Role-specific tasks",
            "Creative projects",
        ],
        highlight_title: "Role-Based Agents",
        highlight_blurb: "Great for simulating team collaboration",
        complexity: "Medium",
        learning_curve: "Moderate",
        focus: "Creative & Role-Play",
    },
    FrameworkProfile {
        name: "AutoGen",
        description: "Microsoft's framework for multi-agent conversation systems",
        strengths: &[
            "Conversational AI",
            "Multi-agent chat",
            "Code generation",
            "Human-in-the-loop",
        ],
        best_for: &[
            "Conversational workflows",
            "Code generation",
            "Problem-solving discussions",
            "Interactive agents",
        ],
        highlight_title: "Conversational AI",
        highlight_blurb: "Excellent for interactive agent systems",
        complexity: "Medium",
        learning_curve: "Moderate",
        focus: "Conversational Systems",
    },
];

/// Looks up a profile by name, ignoring surrounding whitespace and ASCII case.
pub fn find_framework(name: &str) -> Option<&'static FrameworkProfile> {
    let name = name.trim();
    FRAMEWORKS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Row of the quick-comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub framework: &'static str,
    pub complexity: &'static str,
    pub learning_curve: &'static str,
    pub best_for: &'static str,
}

pub fn comparison_table() -> Vec<ComparisonRow> {
    FRAMEWORKS
        .iter()
        .map(|f| ComparisonRow {
            framework: f.name,
            complexity: f.complexity,
            learning_curve: f.learning_curve,
            best_for: f.focus,
        })
        .collect()
}

/// Compact view of a profile shown next to a recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkDetails {
    pub name: &'static str,
    pub description: &'static str,
    pub key_strengths: Vec<&'static str>,
}

const DETAIL_STRENGTHS: usize = 3;

impl From<&'static FrameworkProfile> for FrameworkDetails {
    fn from(profile: &'static FrameworkProfile) -> Self {
        Self {
            name: profile.name,
            description: profile.description,
            key_strengths: profile.strengths.iter().take(DETAIL_STRENGTHS).copied().collect(),
        }
    }
}
