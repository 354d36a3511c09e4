use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    Academic,
    Leadership,
    Sports,
    Volunteering,
    Research,
    Startup,
    Creative,
    #[default]
    Other,
}

impl ActivityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Academic => "Academic",
            ActivityCategory::Leadership => "Leadership",
            ActivityCategory::Sports => "Sports",
            ActivityCategory::Volunteering => "Volunteering",
            ActivityCategory::Research => "Research",
            ActivityCategory::Startup => "Startup",
            ActivityCategory::Creative => "Creative",
            ActivityCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracurricular record in a student's portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub role: String,
    pub organization: String,
    /// Free text: "2 years", "6 months", "Ongoing", ...
    pub duration: String,
    pub hours_per_week: Option<f64>,
    pub total_hours: Option<f64>,
    pub description: String,
    pub category: ActivityCategory,
    /// Lower is more important. Ties are allowed.
    pub importance_rank: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: Option<bool>,
    pub ai_enhanced_description: Option<String>,
}

impl Activity {
    /// The enhanced description when one exists, otherwise the plain one.
    pub fn display_description(&self) -> &str {
        self.ai_enhanced_description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.description)
    }

    pub fn ongoing(&self) -> bool {
        self.is_ongoing.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityView {
    Ranked,
    Timeline,
}

/// Orders activities for display. Both orderings are stable.
pub fn arrange(mut activities: Vec<Activity>, view: ActivityView) -> Vec<Activity> {
    match view {
        ActivityView::Ranked => activities.sort_by_key(|a| a.importance_rank),
        // Undated activities sink to the end.
        ActivityView::Timeline => activities.sort_by_key(|a| (a.start_date.is_none(), a.start_date)),
    }
    activities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: &str, rank: i32, start: Option<NaiveDate>) -> Activity {
        Activity {
            id: id.to_string(),
            importance_rank: rank,
            start_date: start,
            ..Default::default()
        }
    }

    #[test]
    fn test_display_description_prefers_enhanced() {
        let mut a = Activity {
            description: "plain".to_string(),
            ai_enhanced_description: Some("enhanced".to_string()),
            ..Default::default()
        };
        assert_eq!(a.display_description(), "enhanced");

        a.ai_enhanced_description = Some("   ".to_string());
        assert_eq!(a.display_description(), "plain");

        a.ai_enhanced_description = None;
        assert_eq!(a.display_description(), "plain");
    }

    #[test]
    fn test_category_deserializes_from_label() {
        let a: Activity =
            serde_json::from_str(r#"{"title": "Robotics", "category": "Research"}"#).unwrap();
        assert_eq!(a.category, ActivityCategory::Research);
        assert_eq!(a.importance_rank, 0);
        assert!(!a.ongoing());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = serde_json::from_str::<Activity>(r#"{"category": "Gaming"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ranked_view_is_stable_for_ties() {
        let input = vec![activity("a", 2, None), activity("b", 1, None), activity("c", 2, None)];
        let ids: Vec<_> = arrange(input, ActivityView::Ranked)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_timeline_view_puts_undated_last() {
        let early = NaiveDate::from_ymd_opt(2022, 9, 1);
        let late = NaiveDate::from_ymd_opt(2024, 1, 15);
        let input = vec![activity("undated", 1, None), activity("late", 1, late), activity("early", 1, early)];
        let ids: Vec<_> = arrange(input, ActivityView::Timeline)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["early", "late", "undated"]);
    }
}
