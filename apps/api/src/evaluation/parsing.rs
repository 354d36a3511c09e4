//! Turns generated text into an `EvaluationResult`.
//!
//! Structured JSON is preferred. When no JSON object can be read, a best-effort
//! text scan looks for a level token and labelled bullet lists. Output that yields
//! neither is rejected so the caller can fall back to the heuristic verdict.

use serde::Deserialize;

use crate::evaluation::heuristic::summary_for;
use crate::llm_client::{extract_json_object, strip_json_fences};
use crate::models::evaluation::{CompetitivenessLevel, EvaluationResult};
use crate::models::profile::ProfileInputs;

/// Loose mirror of the verdict shape; every field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeneratedVerdict {
    level: Option<String>,
    summary: Option<String>,
    strengths: Option<Vec<String>>,
    weaknesses: Option<Vec<String>>,
    suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Strengths,
    Weaknesses,
    Suggestions,
}

const SECTION_LABELS: &[(&str, Section)] = &[
    ("strengths", Section::Strengths),
    ("strength", Section::Strengths),
    ("weaknesses", Section::Weaknesses),
    ("weakness", Section::Weaknesses),
    ("gaps", Section::Weaknesses),
    ("suggestions", Section::Suggestions),
    ("suggestion", Section::Suggestions),
    ("next steps", Section::Suggestions),
];

/// Parses generated text. `None` means nothing usable was found.
pub fn parse_generated_verdict(text: &str, profile: &ProfileInputs) -> Option<EvaluationResult> {
    parse_json_verdict(text, profile).or_else(|| parse_text_verdict(text, profile))
}

fn parse_json_verdict(text: &str, profile: &ProfileInputs) -> Option<EvaluationResult> {
    let candidate = extract_json_object(strip_json_fences(text))?;
    let generated: GeneratedVerdict = serde_json::from_str(candidate).ok()?;

    let level = generated
        .level
        .as_deref()
        .and_then(CompetitivenessLevel::from_label)
        .unwrap_or_default();
    let summary = generated
        .summary
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| summary_for(level, profile));

    Some(
        EvaluationResult {
            level,
            summary,
            strengths: generated.strengths.unwrap_or_default(),
            weaknesses: generated.weaknesses.unwrap_or_default(),
            suggestions: generated.suggestions.unwrap_or_default(),
        }
        .with_fallback_advice(),
    )
}

/// Best-effort extraction from free text. Requires a level token.
pub fn parse_text_verdict(text: &str, profile: &ProfileInputs) -> Option<EvaluationResult> {
    let level = find_level_token(text)?;

    let summary = text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| summary_for(level, profile));

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut suggestions = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            current = None;
            continue;
        }
        if let Some(section) = section_label(line) {
            current = Some(section);
            continue;
        }
        let (Some(section), Some(item)) = (current, bullet_text(line)) else {
            continue;
        };
        let list = match section {
            Section::Strengths => &mut strengths,
            Section::Weaknesses => &mut weaknesses,
            Section::Suggestions => &mut suggestions,
        };
        list.push(item.to_string());
    }

    Some(
        EvaluationResult {
            level,
            summary,
            strengths,
            weaknesses,
            suggestions,
        }
        .with_fallback_advice(),
    )
}

/// Earliest literal level token in the text.
fn find_level_token(text: &str) -> Option<CompetitivenessLevel> {
    CompetitivenessLevel::ALL
        .into_iter()
        .filter_map(|level| text.find(level.as_str()).map(|idx| (idx, level)))
        .min_by_key(|(idx, _)| *idx)
        .map(|(_, level)| level)
}

/// Recognises a heading such as "Strengths:" or "**Weaknesses**".
fn section_label(line: &str) -> Option<Section> {
    let normalized = line
        .trim_matches(|c: char| c == '*' || c == '#' || c.is_whitespace())
        .trim_end_matches(':')
        .trim_matches('*')
        .trim()
        .to_lowercase();
    SECTION_LABELS
        .iter()
        .find(|(label, _)| normalized == *label)
        .map(|(_, section)| *section)
}

/// Strips a bullet or list-number prefix; plain lines are not list items.
fn bullet_text(line: &str) -> Option<&str> {
    let rest = if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))
    {
        rest
    } else {
        let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        line[digits..]
            .strip_prefix('.')
            .or_else(|| line[digits..].strip_prefix(')'))?
    };
    let rest = rest.trim();
    (!rest.is_empty()).then_some(rest)
}
