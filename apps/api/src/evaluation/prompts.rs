// Evaluation LLM prompt templates.

use crate::catalog::universities::University;
use crate::llm_client::prompts::{HONESTY_INSTRUCTION, JSON_ONLY_INSTRUCTION};
use crate::models::activity::Activity;
use crate::models::profile::ProfileInputs;

pub const EVALUATION_SYSTEM: &str = "\
You are an experienced college admissions counselor. \
Provide realistic, constructive feedback. Never fabricate achievements.";

const EVALUATION_TASK: &str = r#"TASK:
Provide a realistic, constructive evaluation. Be specific and actionable. Do NOT inflate chances.

1. Determine competitiveness level: "Reach", "Match", "Safety", or "Unclear" (if insufficient info)
2. Write a brief summary (2-3 sentences) explaining the level
3. List 3-5 specific STRENGTHS based on actual activities and scores
4. List 3-5 specific WEAKNESSES/GAPS that need improvement
5. Provide 3-5 SPECIFIC, ACTIONABLE next steps (not generic advice)

OUTPUT SCHEMA (return exactly this structure):
{
  "level": "Reach" | "Match" | "Safety" | "Unclear",
  "summary": "string",
  "strengths": ["string"],
  "weaknesses": ["string"],
  "suggestions": ["string"]
}"#;

/// Builds the user prompt for a narrative evaluation.
///
/// `references` are the catalog universities matched against the student's targets;
/// when none matched, the raw target text is embedded instead.
pub fn build_evaluation_prompt(
    profile: &ProfileInputs,
    activities: &[Activity],
    references: &[&University],
) -> String {
    let activities_text = if activities.is_empty() {
        "No extracurriculars listed yet.".to_string()
    } else {
        activities
            .iter()
            .map(activity_line)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let targets_text = if !references.is_empty() {
        references
            .iter()
            .map(|u| reference_line(u))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        or_placeholder(&profile.target_universities, "Not specified").to_string()
    };

    format!(
        "You are helping a high school student assess their competitiveness for international universities.

STUDENT PROFILE:
- GPA: {gpa}
- SAT: {sat}
- IELTS: {ielts}
- TOEFL: {toefl}
- Intended Major: {major}

EXTRACURRICULAR ACTIVITIES:
{activities_text}

TARGET UNIVERSITIES & REQUIREMENTS:
{targets_text}

{EVALUATION_TASK}

{HONESTY_INSTRUCTION}
{JSON_ONLY_INSTRUCTION}",
        gpa = or_placeholder(&profile.gpa, "Not provided"),
        sat = or_placeholder(&profile.sat, "Not provided"),
        ielts = or_placeholder(&profile.ielts, "Not provided"),
        toefl = or_placeholder(&profile.toefl, "Not provided"),
        major = or_placeholder(&profile.intended_major, "Not specified"),
    )
}

fn activity_line(activity: &Activity) -> String {
    let hours = activity
        .total_hours
        .or(activity.hours_per_week)
        .map(|h| h.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "- {} ({} at {}): {}. Category: {}, Duration: {}, Hours: {}",
        activity.title,
        activity.role,
        activity.organization,
        activity.display_description().trim(),
        activity.category,
        activity.duration,
        hours
    )
}

fn reference_line(university: &University) -> String {
    let mut stats = Vec::new();
    if let Some(median) = university.requirements.sat.and_then(|s| s.median) {
        stats.push(format!("SAT median: {median}"));
    }
    if let Some(median) = university.requirements.gpa.and_then(|g| g.median) {
        stats.push(format!("GPA median: {median}"));
    }
    if let Some(rate) = university.acceptance_rate {
        stats.push(format!("acceptance rate: {rate}%"));
    }
    format!("{}: {}", university.name, stats.join(", "))
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::universities::{find_university, match_target_universities, UNIVERSITIES};
    use crate::models::activity::ActivityCategory;

    #[test]
    fn test_prompt_uses_placeholders_for_blank_profile() {
        let prompt = build_evaluation_prompt(&ProfileInputs::default(), &[], &[]);
        assert!(prompt.contains("- GPA: Not provided"));
        assert!(prompt.contains("- Intended Major: Not specified"));
        assert!(prompt.contains("No extracurriculars listed yet."));
        assert!(prompt.contains("TARGET UNIVERSITIES & REQUIREMENTS:\nNot specified"));
    }

    #[test]
    fn test_prompt_prefers_enhanced_description_and_total_hours() {
        let activity = Activity {
            title: "Robotics".to_string(),
            role: "Captain".to_string(),
            organization: "School Club".to_string(),
            duration: "2 years".to_string(),
            description: "plain text".to_string(),
            ai_enhanced_description: Some("Led a team of 12".to_string()),
            hours_per_week: Some(6.0),
            total_hours: Some(300.0),
            category: ActivityCategory::Academic,
            ..Default::default()
        };
        let prompt = build_evaluation_prompt(&ProfileInputs::default(), &[activity], &[]);
        assert!(prompt.contains(
            "- Robotics (Captain at School Club): Led a team of 12. Category: Academic, Duration: 2 years, Hours: 300"
        ));
        assert!(!prompt.contains("plain text"));
    }

    #[test]
    fn test_prompt_embeds_reference_statistics() {
        let profile = ProfileInputs {
            target_universities: "MIT".to_string(),
            ..Default::default()
        };
        let references = match_target_universities(&profile.target_universities, UNIVERSITIES);
        let prompt = build_evaluation_prompt(&profile, &[], &references);
        assert!(prompt.contains("Massachusetts Institute of Technology: SAT median: 1540"));
        assert!(prompt.contains("GPA median: 4.17"));
    }

    #[test]
    fn test_reference_line_skips_missing_stats() {
        let sorbonne = find_university("sorbonne").unwrap();
        assert_eq!(
            reference_line(sorbonne),
            "Sorbonne University: acceptance rate: 50%"
        );
    }
}
