//! Admissions roadmap — stage checklists tailored to grade level and target region.
//!
//! Stateless: callers send their saved stages back with every request. An empty
//! stage list means "not started yet" and is replaced with the defaults.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::region::TargetRegion;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[default]
    #[serde(rename = "11")]
    Eleven,
    #[serde(rename = "12")]
    Twelve,
    Gap,
}

impl GradeLevel {
    /// Juniors, seniors and gap-year students should lock in test scores now.
    pub fn tests_early(&self) -> bool {
        matches!(self, GradeLevel::Eleven | GradeLevel::Twelve | GradeLevel::Gap)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub checklist: Vec<ChecklistItem>,
    pub suggested_next_step: String,
}

impl RoadmapStage {
    fn new(
        id: &str,
        title: &str,
        description: &str,
        items: &[(&str, &str)],
        suggested_next_step: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            checklist: items
                .iter()
                .map(|(id, label)| ChecklistItem {
                    id: id.to_string(),
                    label: label.to_string(),
                    done: false,
                })
                .collect(),
            suggested_next_step: suggested_next_step.to_string(),
        }
    }

    /// Whole-number completion percentage. An empty checklist counts as 0%.
    pub fn progress_percent(&self) -> u8 {
        let done = self.checklist.iter().filter(|c| c.done).count();
        let total = self.checklist.len().max(1);
        ((done as f64 / total as f64) * 100.0).round() as u8
    }
}

pub fn default_stages(grade: GradeLevel, region: TargetRegion) -> Vec<RoadmapStage> {
    let early = grade.tests_early();

    let mut test_items = vec![
        ("plan-sat", "Choose your SAT / ACT target window"),
        ("diagnostic", "Take a diagnostic SAT or ACT to see your baseline"),
    ];
    if region.expects_english_test() {
        test_items.push((
            "english-test",
            "Decide on IELTS / TOEFL / Duolingo English Test (if needed)",
        ));
    }

    let mut stages = vec![
        RoadmapStage::new(
            "tests",
            "Standardized tests",
            if early {
                "Lock in your scores early so you can focus on essays and applications."
            } else {
                "Map out when you'll take key exams. No need to rush, just be intentional."
            },
            &test_items,
            if early {
                "Pick your final SAT/ACT date and block out weekly practice sessions on your calendar."
            } else {
                "Take one diagnostic test and use the result to decide whether standardized \
                 testing will be a strength or simply 'good enough'."
            },
        ),
        RoadmapStage::new(
            "extracurriculars",
            "Extracurricular development",
            "Deepen 2-3 activities instead of spreading yourself across many disconnected ones.",
            &[
                (
                    "pick-core",
                    "Choose 2-3 core activities you are willing to commit to long-term",
                ),
                (
                    "leadership-plan",
                    "Identify one realistic way to add leadership or responsibility in an existing activity",
                ),
                (
                    "impact-metric",
                    "Define at least one simple impact metric (hours, people reached, funds raised, outcomes)",
                ),
            ],
            "Pick ONE activity and design a small project or event around it that you can ship \
             within the next 6-8 weeks.",
        ),
        RoadmapStage::new(
            "essays",
            "Essays & personal statement",
            "Translate your experiences into a focused narrative instead of listing everything again.",
            &[
                (
                    "storylines",
                    "Brainstorm 3-4 possible personal stories that connect your background, interests, and impact",
                ),
                ("outline", "Create a simple outline for your main personal statement"),
                ("feedback", "Ask one trusted adult to give feedback on clarity (not style)"),
            ],
            "Pick one story and write a rough, honest draft. No polishing yet, just get \
             everything on the page.",
        ),
        RoadmapStage::new(
            "documents",
            "Recommendations & documents",
            "Make it easy for teachers and counselors to write strong, specific letters.",
            &[
                (
                    "shortlist-teachers",
                    "Shortlist 2 teachers who know you well academically and personally",
                ),
                (
                    "brag-sheet",
                    "Prepare a 1-2 page 'context sheet' with your activities, interests, and examples of growth",
                ),
                ("deadlines", "Share a clear list of deadlines with each recommender"),
            ],
            "Ask your first recommender early, then send them a short, organized document that \
             makes their job easier.",
        ),
        RoadmapStage::new(
            "applications",
            "Applications & submission",
            "Translate your profile into polished, accurate forms without last-minute panic.",
            &[
                (
                    "school-list",
                    "Finalize a balanced list of reach, match, and safety universities",
                ),
                (
                    "platforms",
                    "Open accounts on relevant platforms (Common App, UCAS, university portals, etc.)",
                ),
                (
                    "review",
                    "Do a final consistency check across activities, essays, and recommendations",
                ),
            ],
            "Choose one application platform and complete your basic profile details before \
             touching essays again.",
        ),
    ];

    if region == TargetRegion::Usa {
        stages.push(RoadmapStage::new(
            "interviews",
            "Optional interviews",
            "Treat interviews as a conversation about fit, not a test you can 'game'.",
            &[
                ("research", "Research how each target school handles interviews"),
                (
                    "stories-interview",
                    "Prepare 3 short stories that show curiosity, initiative, and impact",
                ),
            ],
            "Write down a few concrete examples you can talk about comfortably, then practice \
             explaining them out loud once.",
        ));
    }

    stages
}

/// The caller's stages, or the defaults when none have been saved yet.
pub fn ensure_defaults(
    stages: Vec<RoadmapStage>,
    grade: GradeLevel,
    region: TargetRegion,
) -> Vec<RoadmapStage> {
    if stages.is_empty() {
        default_stages(grade, region)
    } else {
        stages
    }
}

/// Flips one checklist item.
pub fn toggle_item(
    mut stages: Vec<RoadmapStage>,
    stage_id: &str,
    item_id: &str,
) -> Result<Vec<RoadmapStage>, AppError> {
    let stage = stages
        .iter_mut()
        .find(|s| s.id == stage_id)
        .ok_or_else(|| AppError::NotFound(format!("Roadmap stage {stage_id} not found")))?;
    let item = stage
        .checklist
        .iter_mut()
        .find(|c| c.id == item_id)
        .ok_or_else(|| {
            AppError::NotFound(format!("Checklist item {item_id} not found in stage {stage_id}"))
        })?;
    item.done = !item.done;
    Ok(stages)
}
