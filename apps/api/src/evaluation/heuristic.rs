//! Heuristic Evaluator — deterministic, rule-based competitiveness verdict.
//!
//! Level comes from GPA/SAT thresholds. Advice comes from an ordered table of
//! independent rules; every rule runs on every call and contributes at most one
//! strength, weakness and suggestion. No I/O, no state.

use async_trait::async_trait;
use tracing::debug;

use crate::evaluation::{EvaluationSource, Evaluator, Verdict};
use crate::models::activity::{Activity, ActivityCategory};
use crate::models::evaluation::{CompetitivenessLevel, EvaluationResult};
use crate::models::profile::ProfileInputs;

const REACH_GPA: f64 = 3.8;
const REACH_SAT: f64 = 1480.0;
const MATCH_GPA: f64 = 3.6;
const MATCH_SAT: f64 = 1350.0;

const LEADERSHIP_KEYWORDS: &[&str] = &["lead", "captain", "president", "head", "founder"];

/// Leading month counts at or above this read as a year-long commitment.
const LONG_TERM_MONTHS: f64 = 12.0;

const UNCLEAR_SUMMARY: &str = "With the current information, your overall competitiveness is \
    hard to estimate. Adding test scores, GPA, and clearer activity details will unlock a \
    more precise view.";

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

enum Strength {
    Fixed(&'static str),
    Render(fn(&[Activity]) -> String),
}

/// What a rule contributes for one of its two outcomes.
struct Advice {
    strength: Option<Strength>,
    weakness: Option<&'static str>,
    suggestion: Option<&'static str>,
}

impl Advice {
    const NOTHING: Advice = Advice {
        strength: None,
        weakness: None,
        suggestion: None,
    };
}

struct Rule {
    name: &'static str,
    holds: fn(&ProfileInputs, &[Activity]) -> bool,
    when_met: Advice,
    when_unmet: Advice,
}

static RULES: &[Rule] = &[
    Rule {
        name: "leadership",
        holds: has_leadership_role,
        when_met: Advice {
            strength: Some(Strength::Render(leadership_strength)),
            ..Advice::NOTHING
        },
        when_unmet: Advice {
            strength: None,
            weakness: Some("Limited formal leadership roles across activities."),
            suggestion: Some(
                "Add leadership depth in at least one existing activity (e.g., run a project, \
                 coordinate a small team, or formalize your role).",
            ),
        },
    },
    Rule {
        name: "longevity",
        holds: has_long_term_commitment,
        when_met: Advice {
            strength: Some(Strength::Fixed(
                "You show consistency through multi-year or ongoing commitments.",
            )),
            ..Advice::NOTHING
        },
        when_unmet: Advice {
            strength: None,
            weakness: Some(
                "Most activities appear short-term; selective universities value sustained \
                 involvement.",
            ),
            suggestion: Some(
                "Convert one volunteering or club activity into a 1-2 year project with clear \
                 milestones and outcomes.",
            ),
        },
    },
    Rule {
        name: "academic_spike",
        holds: has_academic_spike,
        when_met: Advice {
            strength: Some(Strength::Fixed(
                "You have an academic or research spike that can support your intended major.",
            )),
            ..Advice::NOTHING
        },
        when_unmet: Advice {
            strength: None,
            weakness: Some(
                "Your extracurriculars do not yet clearly support your intended academic spike.",
            ),
            suggestion: Some(
                "Strengthen an academic spike aligned with your intended major (e.g., \
                 competitions, research, online courses, or building a project).",
            ),
        },
    },
    Rule {
        name: "volunteering_depth",
        holds: has_volunteering,
        when_met: Advice {
            suggestion: Some(
                "Consider converting one volunteering activity into a structured, long-term \
                 initiative with clear impact metrics (hours, people reached, funds raised).",
            ),
            ..Advice::NOTHING
        },
        when_unmet: Advice::NOTHING,
    },
    Rule {
        name: "intended_major",
        holds: has_intended_major,
        when_met: Advice::NOTHING,
        when_unmet: Advice {
            strength: None,
            weakness: Some("Intended major is not specified."),
            suggestion: Some(
                "Clarify a tentative intended major so your activities and essays can tell a \
                 focused story.",
            ),
        },
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Evaluation
// ────────────────────────────────────────────────────────────────────────────

/// Evaluates a profile and its activities. Never fails: malformed numbers count
/// as zero and every advice list comes back non-empty.
pub fn evaluate_profile(profile: &ProfileInputs, activities: &[Activity]) -> EvaluationResult {
    let level = classify_level(profile.gpa_value(), profile.sat_value());

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut suggestions = Vec::new();

    for rule in RULES {
        let met = (rule.holds)(profile, activities);
        debug!(rule = rule.name, met, "heuristic rule evaluated");

        let advice = if met { &rule.when_met } else { &rule.when_unmet };
        if let Some(strength) = &advice.strength {
            strengths.push(match strength {
                Strength::Fixed(text) => text.to_string(),
                Strength::Render(render) => render(activities),
            });
        }
        if let Some(weakness) = advice.weakness {
            weaknesses.push(weakness.to_string());
        }
        if let Some(suggestion) = advice.suggestion {
            suggestions.push(suggestion.to_string());
        }
    }

    EvaluationResult {
        level,
        summary: summary_for(level, profile),
        strengths,
        weaknesses,
        suggestions,
    }
    .with_fallback_advice()
}

pub fn classify_level(gpa: f64, sat: f64) -> CompetitivenessLevel {
    if gpa >= REACH_GPA && sat >= REACH_SAT {
        CompetitivenessLevel::Reach
    } else if gpa >= MATCH_GPA && sat >= MATCH_SAT {
        CompetitivenessLevel::Match
    } else if gpa > 0.0 && sat > 0.0 {
        CompetitivenessLevel::Safety
    } else {
        CompetitivenessLevel::Unclear
    }
}

/// Summary sentence for a level, naming the student's targets when given.
pub fn summary_for(level: CompetitivenessLevel, profile: &ProfileInputs) -> String {
    if level == CompetitivenessLevel::Unclear {
        return UNCLEAR_SUMMARY.to_string();
    }

    let targets = profile.target_tokens();
    let audience = if targets.is_empty() {
        "many of your target universities".to_string()
    } else {
        format!("many of your target universities ({})", targets.join(", "))
    };

    format!(
        "Based on your academic indicators and extracurricular pattern, your overall profile \
         currently looks like a {level} level for {audience}."
    )
}

fn has_leadership_role(_: &ProfileInputs, activities: &[Activity]) -> bool {
    activities.iter().any(is_leadership_role)
}

fn has_long_term_commitment(_: &ProfileInputs, activities: &[Activity]) -> bool {
    activities.iter().any(is_long_term)
}

fn has_academic_spike(_: &ProfileInputs, activities: &[Activity]) -> bool {
    activities.iter().any(|a| {
        matches!(
            a.category,
            ActivityCategory::Academic | ActivityCategory::Research
        )
    })
}

fn has_volunteering(_: &ProfileInputs, activities: &[Activity]) -> bool {
    activities
        .iter()
        .any(|a| a.category == ActivityCategory::Volunteering)
}

fn has_intended_major(profile: &ProfileInputs, _: &[Activity]) -> bool {
    profile.has_intended_major()
}

fn is_leadership_role(activity: &Activity) -> bool {
    let role = activity.role.to_lowercase();
    LEADERSHIP_KEYWORDS.iter().any(|k| role.contains(k))
}

fn is_long_term(activity: &Activity) -> bool {
    let duration = activity.duration.to_lowercase();
    duration.contains("year")
        || activity.ongoing()
        || (duration.contains("month")
            && leading_number(&duration).is_some_and(|m| m >= LONG_TERM_MONTHS))
}

fn leading_number(text: &str) -> Option<f64> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

fn leadership_strength(activities: &[Activity]) -> String {
    let examples: Vec<String> = activities
        .iter()
        .filter(|a| is_leadership_role(a))
        .take(2)
        .map(|a| format!("{} in {}", a.role, a.title))
        .collect();
    format!(
        "You already demonstrate leadership through roles such as {}.",
        examples.join(", ")
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Evaluator backend
// ────────────────────────────────────────────────────────────────────────────

/// Heuristic-only backend. Used when narrative evaluation is disabled.
pub struct HeuristicEvaluator;

#[async_trait]
impl Evaluator for HeuristicEvaluator {
    async fn evaluate(&self, profile: &ProfileInputs, activities: &[Activity]) -> Verdict {
        Verdict {
            result: evaluate_profile(profile, activities),
            source: EvaluationSource::Heuristic,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evaluation::{FALLBACK_STRENGTH, FALLBACK_SUGGESTION, FALLBACK_WEAKNESS};

    fn profile(gpa: &str, sat: &str, major: &str) -> ProfileInputs {
        ProfileInputs {
            gpa: gpa.to_string(),
            sat: sat.to_string(),
            intended_major: major.to_string(),
            ..Default::default()
        }
    }

    fn activity(title: &str, role: &str, duration: &str, category: ActivityCategory) -> Activity {
        Activity {
            id: title.to_lowercase(),
            title: title.to_string(),
            role: role.to_string(),
            duration: duration.to_string(),
            category,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_scores_are_unclear() {
        let result = evaluate_profile(&profile("0", "0", "Physics"), &[]);
        assert_eq!(result.level, CompetitivenessLevel::Unclear);
        assert_eq!(result.summary, UNCLEAR_SUMMARY);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(classify_level(3.9, 1500.0), CompetitivenessLevel::Reach);
        assert_eq!(classify_level(3.8, 1480.0), CompetitivenessLevel::Reach);
        assert_eq!(classify_level(3.65, 1380.0), CompetitivenessLevel::Match);
        assert_eq!(classify_level(3.9, 1400.0), CompetitivenessLevel::Match);
        assert_eq!(classify_level(3.6, 1320.0), CompetitivenessLevel::Safety);
        assert_eq!(classify_level(4.0, 0.0), CompetitivenessLevel::Unclear);
        assert_eq!(classify_level(0.0, 1600.0), CompetitivenessLevel::Unclear);
    }

    #[test]
    fn test_unparseable_scores_are_unclear() {
        let result = evaluate_profile(&profile("great", "n/a", ""), &[]);
        assert_eq!(result.level, CompetitivenessLevel::Unclear);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let p = profile("3.7", "1450", "Biology");
        let acts = vec![
            activity("Debate", "President", "2 years", ActivityCategory::Leadership),
            activity("Shelter", "Volunteer", "3 months", ActivityCategory::Volunteering),
        ];
        assert_eq!(evaluate_profile(&p, &acts), evaluate_profile(&p, &acts));
    }

    #[test]
    fn test_lists_never_empty() {
        // Everything satisfied: no weaknesses or suggestions from rules.
        let p = profile("3.9", "1550", "Computer Science");
        let acts = vec![activity("Robotics", "Team Lead", "3 years", ActivityCategory::Research)];
        let result = evaluate_profile(&p, &acts);
        assert_eq!(result.weaknesses, vec![FALLBACK_WEAKNESS]);
        assert_eq!(result.suggestions, vec![FALLBACK_SUGGESTION]);
        assert_eq!(result.strengths.len(), 3);

        // Nothing satisfied: no strengths from rules.
        let result = evaluate_profile(&ProfileInputs::default(), &[]);
        assert_eq!(result.strengths, vec![FALLBACK_STRENGTH]);
        assert!(!result.weaknesses.is_empty());
        assert!(!result.suggestions.is_empty());
    }

    #[test]
    fn test_captain_triggers_leadership_strength() {
        let acts = vec![activity("Varsity Soccer", "Captain", "4 months", ActivityCategory::Sports)];
        let result = evaluate_profile(&profile("3.5", "1300", "History"), &acts);

        assert!(result
            .strengths
            .iter()
            .any(|s| s.contains("leadership") && s.contains("Captain in Varsity Soccer")));
        assert!(!result.weaknesses.iter().any(|w| w.contains("leadership")));
    }

    #[test]
    fn test_no_leadership_role_triggers_weakness_and_suggestion() {
        let acts = vec![activity("Chess Club", "Member", "2 years", ActivityCategory::Other)];
        let result = evaluate_profile(&profile("3.5", "1300", "History"), &acts);

        assert!(!result.strengths.iter().any(|s| s.contains("leadership")));
        assert!(result.weaknesses.iter().any(|w| w.contains("leadership")));
        assert!(result.suggestions.iter().any(|s| s.contains("leadership depth")));
    }

    #[test]
    fn test_leadership_strength_names_at_most_two() {
        let acts = vec![
            activity("Debate", "President", "1 year", ActivityCategory::Leadership),
            activity("Robotics", "Founder", "1 year", ActivityCategory::Startup),
            activity("Band", "Section Head", "1 year", ActivityCategory::Creative),
        ];
        let result = evaluate_profile(&profile("3.9", "1500", "Music"), &acts);
        let strength = &result.strengths[0];
        assert!(strength.contains("President in Debate"));
        assert!(strength.contains("Founder in Robotics"));
        assert!(!strength.contains("Band"));
    }

    #[test]
    fn test_ongoing_flag_counts_as_long_term() {
        let mut a = activity("Tutoring", "Tutor", "a few weeks", ActivityCategory::Volunteering);
        a.is_ongoing = Some(true);
        let result = evaluate_profile(&profile("3.5", "1300", "Education"), &[a]);
        assert!(result.strengths.iter().any(|s| s.contains("consistency")));
    }

    #[test]
    fn test_month_count_of_a_year_counts_as_long_term() {
        let a = activity("Newspaper", "Writer", "18 months", ActivityCategory::Creative);
        assert!(is_long_term(&a));
        let a = activity("Newspaper", "Writer", "6 months", ActivityCategory::Creative);
        assert!(!is_long_term(&a));
    }

    #[test]
    fn test_volunteering_adds_suggestion_only() {
        let acts = vec![activity("Food Bank", "Volunteer", "2 years", ActivityCategory::Volunteering)];
        let result = evaluate_profile(&profile("3.5", "1300", "Sociology"), &acts);
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("volunteering activity")));
        assert!(!result.strengths.iter().any(|s| s.contains("olunteer")));
    }

    #[test]
    fn test_match_scenario_collects_four_gaps() {
        let p = profile("3.7", "1450", "");
        let acts = vec![activity("Soccer", "Member", "6 months", ActivityCategory::Sports)];
        let result = evaluate_profile(&p, &acts);

        assert_eq!(result.level, CompetitivenessLevel::Match);
        assert_eq!(result.weaknesses.len(), 4);
        assert!(result.weaknesses[0].contains("leadership"));
        assert!(result.weaknesses[1].contains("short-term"));
        assert!(result.weaknesses[2].contains("academic spike"));
        assert!(result.weaknesses[3].contains("major"));
        assert_eq!(result.suggestions.len(), 4);
        assert_eq!(result.strengths, vec![FALLBACK_STRENGTH]);
    }

    #[test]
    fn test_summary_mentions_level_and_targets() {
        let mut p = profile("3.9", "1500", "Math");
        p.target_universities = "MIT, , Stanford".to_string();
        let result = evaluate_profile(&p, &[]);
        assert!(result.summary.contains("Reach"));
        assert!(result.summary.contains("(MIT, Stanford)"));
    }

    #[tokio::test]
    async fn test_heuristic_backend_reports_source() {
        let verdict = HeuristicEvaluator
            .evaluate(&profile("3.6", "1320", ""), &[])
            .await;
        assert_eq!(verdict.source, EvaluationSource::Heuristic);
        assert_eq!(verdict.result.level, CompetitivenessLevel::Safety);
    }
}
