use serde::{Deserialize, Serialize};

pub const FALLBACK_STRENGTH: &str = "Keep building your profile.";
pub const FALLBACK_WEAKNESS: &str = "Continue developing your application.";
pub const FALLBACK_SUGGESTION: &str = "Focus on specific areas for improvement.";

/// Coarse admissions-odds signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitivenessLevel {
    Reach,
    Match,
    Safety,
    #[default]
    Unclear,
}

impl CompetitivenessLevel {
    pub const ALL: [CompetitivenessLevel; 4] = [
        CompetitivenessLevel::Reach,
        CompetitivenessLevel::Match,
        CompetitivenessLevel::Safety,
        CompetitivenessLevel::Unclear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitivenessLevel::Reach => "Reach",
            CompetitivenessLevel::Match => "Match",
            CompetitivenessLevel::Safety => "Safety",
            CompetitivenessLevel::Unclear => "Unclear",
        }
    }

    /// Case-insensitive label match; anything else is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for CompetitivenessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verdict returned by every evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub level: CompetitivenessLevel,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

impl EvaluationResult {
    /// Fills any empty advice list with a generic entry so no section renders blank.
    pub fn with_fallback_advice(mut self) -> Self {
        fill_if_empty(&mut self.strengths, FALLBACK_STRENGTH);
        fill_if_empty(&mut self.weaknesses, FALLBACK_WEAKNESS);
        fill_if_empty(&mut self.suggestions, FALLBACK_SUGGESTION);
        self
    }
}

fn fill_if_empty(items: &mut Vec<String>, fallback: &str) {
    items.retain(|s| !s.trim().is_empty());
    if items.is_empty() {
        items.push(fallback.to_string());
    }
}
