//! Rule-based activity description enhancement.
//!
//! Rewrites a plain description into an action-and-results framing, emphasising
//! themes already present in the text. Never adds achievements that are not there.

use crate::models::activity::Activity;

const EMPHASES: &[(&str, &[&str])] = &[
    (
        "leadership",
        &["led", "organized", "founded", "captain", "president"],
    ),
    (
        "community impact",
        &["tutored", "mentored", "volunteer", "community", "outreach"],
    ),
    (
        "academic initiative",
        &["research", "paper", "competition", "olympiad", "hackathon"],
    ),
];

/// Themes detected in a description, in fixed order.
pub fn detect_emphasis(description: &str) -> Vec<&'static str> {
    let lower = description.to_lowercase();
    EMPHASES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(theme, _)| *theme)
        .collect()
}

pub fn enhance_description(activity: &Activity) -> String {
    let base = activity.description.trim();
    let emphasis = detect_emphasis(base);

    let emphasis_text = if emphasis.is_empty() {
        ", emphasizing clear initiative and measurable results".to_string()
    } else {
        format!(", highlighting your {}", emphasis.join(" and "))
    };
    let role = non_blank(&activity.role).unwrap_or("a key member");
    let organization = non_blank(&activity.organization).unwrap_or("this activity");
    let hours = activity
        .hours_per_week
        .map(|h| h.to_string())
        .unwrap_or_else(|| "X".to_string());

    format!(
        "Led and sustained the role of {role} at {organization}, investing approximately \
         {hours} hours per week to drive meaningful outcomes. {base} This description focuses \
         on concrete actions, scale, and results{emphasis_text}, without exaggerating or adding \
         achievements you did not actually complete."
    )
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_multiple_themes_in_order() {
        assert_eq!(
            detect_emphasis("Founded a hackathon and mentored new coders"),
            vec!["leadership", "community impact", "academic initiative"]
        );
        assert!(detect_emphasis("Played the violin").is_empty());
    }

    #[test]
    fn test_enhancement_embeds_activity_details() {
        let activity = Activity {
            role: "President".to_string(),
            organization: "Debate Society".to_string(),
            hours_per_week: Some(5.0),
            description: "Organized weekly practice rounds.".to_string(),
            ..Default::default()
        };
        let text = enhance_description(&activity);
        assert!(text.starts_with("Led and sustained the role of President at Debate Society"));
        assert!(text.contains("approximately 5 hours per week"));
        assert!(text.contains("Organized weekly practice rounds."));
        assert!(text.contains("highlighting your leadership"));
    }

    #[test]
    fn test_enhancement_defaults_for_blank_fields() {
        let text = enhance_description(&Activity::default());
        assert!(text.contains("role of a key member at this activity"));
        assert!(text.contains("approximately X hours"));
        assert!(text.contains("emphasizing clear initiative and measurable results"));
    }
}
