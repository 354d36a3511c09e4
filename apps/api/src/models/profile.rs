use serde::{Deserialize, Serialize};

/// Academic and testing inputs supplied by the student.
///
/// Every field is free text as typed into the form. Numeric fields are parsed
/// leniently at scoring time; nothing here is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInputs {
    pub gpa: String,
    pub sat: String,
    pub ielts: String,
    pub toefl: String,
    pub intended_major: String,
    /// Comma-separated institution names, e.g. "MIT, University of Toronto".
    pub target_universities: String,
}

impl ProfileInputs {
    pub fn gpa_value(&self) -> f64 {
        parse_score(&self.gpa)
    }

    pub fn sat_value(&self) -> f64 {
        parse_score(&self.sat)
    }

    pub fn has_intended_major(&self) -> bool {
        !self.intended_major.trim().is_empty()
    }

    /// Target institution names, trimmed, blanks dropped.
    pub fn target_tokens(&self) -> Vec<&str> {
        split_targets(&self.target_universities)
    }
}

/// Parses a score field, treating blank, malformed and non-finite input as 0.
pub fn parse_score(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

pub fn split_targets(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_accepts_padded_decimal() {
        assert_eq!(parse_score(" 3.75 "), 3.75);
        assert_eq!(parse_score("1450"), 1450.0);
    }

    #[test]
    fn test_parse_score_malformed_is_zero() {
        assert_eq!(parse_score(""), 0.0);
        assert_eq!(parse_score("around 1400"), 0.0);
        assert_eq!(parse_score("NaN"), 0.0);
        assert_eq!(parse_score("inf"), 0.0);
    }

    #[test]
    fn test_split_targets_drops_blanks() {
        assert_eq!(
            split_targets(" MIT, ,University of Toronto ,"),
            vec!["MIT", "University of Toronto"]
        );
        assert!(split_targets("   ").is_empty());
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let profile: ProfileInputs = serde_json::from_str(r#"{"gpa": "3.9"}"#).unwrap();
        assert_eq!(profile.gpa_value(), 3.9);
        assert_eq!(profile.sat_value(), 0.0);
        assert!(!profile.has_intended_major());
    }
}
