//! Static catalog of extracurricular opportunities (competitions, olympiads, programs).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::activity::{Activity, ActivityCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpportunityLevel {
    Local,
    National,
    International,
}

impl OpportunityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityLevel::Local => "Local",
            OpportunityLevel::National => "National",
            OpportunityLevel::International => "International",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Opportunity {
    pub id: &'static str,
    pub title: &'static str,
    pub category: ActivityCategory,
    pub level: OpportunityLevel,
    pub description: &'static str,
    pub eligibility: &'static str,
    pub application_deadline: Option<&'static str>,
    pub website: Option<&'static str>,
    pub tags: &'static [&'static str],
}

/// Rank given to activities added straight from the catalog.
const CATALOG_ACTIVITY_RANK: i32 = 5;

impl Opportunity {
    /// Starts a portfolio activity from this opportunity.
    pub fn to_activity(&self) -> Activity {
        Activity {
            id: Uuid::new_v4().to_string(),
            title: self.title.to_string(),
            role: "Participant".to_string(),
            organization: self.level.as_str().to_string(),
            duration: "Ongoing".to_string(),
            description: self.description.to_string(),
            category: self.category,
            importance_rank: CATALOG_ACTIVITY_RANK,
            is_ongoing: Some(true),
            ..Default::default()
        }
    }
}

pub static OPPORTUNITIES: &[Opportunity] = &[
    Opportunity {
        id: "math-olympiad",
        title: "International Mathematical Olympiad (IMO)",
        category: ActivityCategory::Academic,
        level: OpportunityLevel::International,
        description: "The most prestigious international mathematics olympiad for secondary \
            school students, with hard problems in algebra, geometry and combinatorics.",
        eligibility: "Students under 20 selected through their national olympiad",
        application_deadline: Some("Varies by country"),
        website: Some("https://www.imo-official.org/"),
        tags: &["Mathematics", "Olympiad", "Prestigious"],
    },
    Opportunity {
        id: "usamo",
        title: "USA Mathematical Olympiad (USAMO)",
        category: ActivityCategory::Academic,
        level: OpportunityLevel::National,
        description: "The final round of the US mathematics competition series; top \
            performers are invited to train for the international team.",
        eligibility: "US students qualifying through the AMC and AIME",
        application_deadline: Some("September-October"),
        website: None,
        tags: &["Mathematics", "Olympiad", "USA"],
    },
    Opportunity {
        id: "ioi",
        title: "International Olympiad in Informatics (IOI)",
        category: ActivityCategory::Academic,
        level: OpportunityLevel::International,
        description: "An international algorithmic programming competition for secondary \
            school students.",
        eligibility: "Secondary school students selected through national olympiads",
        application_deadline: None,
        website: Some("https://ioinformatics.org/"),
        tags: &["Programming", "Computer Science", "Algorithms"],
    },
    Opportunity {
        id: "regeneron-sts",
        title: "Regeneron Science Talent Search",
        category: ActivityCategory::Research,
        level: OpportunityLevel::International,
        description: "The oldest science and math research competition for high school \
            seniors, judged on an original independent research project.",
        eligibility: "High school seniors in the United States",
        application_deadline: Some("November"),
        website: Some("https://www.societyforscience.org/regeneron-sts/"),
        tags: &["Research", "Science", "Prestigious"],
    },
    Opportunity {
        id: "isef",
        title: "International Science and Engineering Fair (ISEF)",
        category: ActivityCategory::Research,
        level: OpportunityLevel::International,
        description: "The largest pre-college science fair, where students present \
            independent research projects to expert judges.",
        eligibility: "Grades 9-12, through affiliated regional fairs",
        application_deadline: Some("Varies by region"),
        website: Some("https://www.societyforscience.org/isef/"),
        tags: &["Research", "Engineering", "Science Fair"],
    },
    Opportunity {
        id: "boys-girls-state",
        title: "Boys/Girls State",
        category: ActivityCategory::Leadership,
        level: OpportunityLevel::National,
        description: "A week-long civics program where students build a model state \
            government and run for office.",
        eligibility: "Grade 11, nominated by a school or local organization",
        application_deadline: None,
        website: None,
        tags: &["Leadership", "Government", "Civics"],
    },
    Opportunity {
        id: "hosa",
        title: "Health Occupations Students of America (HOSA)",
        category: ActivityCategory::Leadership,
        level: OpportunityLevel::International,
        description: "A student organization for future health professionals with \
            competitive events and leadership conferences.",
        eligibility: "Students in health science programs",
        application_deadline: None,
        website: Some("https://hosa.org/"),
        tags: &["Healthcare", "Leadership", "Competition"],
    },
    Opportunity {
        id: "decabusiness",
        title: "DECA Business Competition",
        category: ActivityCategory::Leadership,
        level: OpportunityLevel::International,
        description: "Role-play and case competitions in marketing, finance, hospitality \
            and management for emerging business leaders.",
        eligibility: "Grades 9-12",
        application_deadline: None,
        website: Some("https://www.deca.org/"),
        tags: &["Business", "Entrepreneurship", "Marketing"],
    },
    Opportunity {
        id: "fbla",
        title: "Future Business Leaders of America (FBLA)",
        category: ActivityCategory::Leadership,
        level: OpportunityLevel::International,
        description: "A career and technical student organization with business \
            competitions and chapter leadership roles.",
        eligibility: "Middle school, high school and college students",
        application_deadline: None,
        website: Some("https://www.fbla.org/"),
        tags: &["Business", "Leadership", "Competition"],
    },
    Opportunity {
        id: "scholastic-awards",
        title: "Scholastic Art & Writing Awards",
        category: ActivityCategory::Creative,
        level: OpportunityLevel::National,
        description: "A long-running recognition program for creative teens in visual art \
            and writing categories.",
        eligibility: "Grades 7-12",
        application_deadline: Some("December-January"),
        website: Some("https://www.artandwriting.org/"),
        tags: &["Art", "Writing", "Creative"],
    },
    Opportunity {
        id: "mun",
        title: "Model United Nations (MUN)",
        category: ActivityCategory::Leadership,
        level: OpportunityLevel::International,
        description: "Simulated UN committee sessions where delegates research, debate and \
            negotiate resolutions on world issues.",
        eligibility: "Secondary school and university students",
        application_deadline: None,
        website: None,
        tags: &["Debate", "International Relations", "Leadership"],
    },
];

pub fn find_opportunity(id: &str) -> Option<&'static Opportunity> {
    OPPORTUNITIES.iter().find(|o| o.id == id)
}

/// Catalog search: optional category filter, then a case-insensitive query over
/// title, description and tags.
pub fn search_opportunities(
    query: Option<&str>,
    category: Option<ActivityCategory>,
) -> Vec<&'static Opportunity> {
    let query = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    OPPORTUNITIES
        .iter()
        .filter(|o| category.map_or(true, |c| o.category == c))
        .filter(|o| match &query {
            None => true,
            Some(q) => {
                o.title.to_lowercase().contains(q)
                    || o.description.to_lowercase().contains(q)
                    || o.tags.iter().any(|t| t.to_lowercase().contains(q))
            }
        })
        .collect()
}
