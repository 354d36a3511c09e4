//! Static university reference table.
//!
//! Used for catalog search and to give the narrative evaluator admission statistics
//! for the student's target institutions.

use serde::Serialize;

use crate::models::profile::split_targets;
use crate::models::region::TargetRegion;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

/// SAT or ACT statistics.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TestScores {
    pub median: Option<u32>,
    pub range: Option<ScoreRange>,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GpaStats {
    pub min: Option<f64>,
    pub median: Option<f64>,
    pub weighted: bool,
}

/// IELTS, TOEFL or IB minimum.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MinimumScore {
    pub min: f64,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ALevels {
    pub min_grades: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Requirements {
    pub sat: Option<TestScores>,
    pub act: Option<TestScores>,
    pub gpa: Option<GpaStats>,
    pub ielts: Option<MinimumScore>,
    pub toefl: Option<MinimumScore>,
    pub ib: Option<MinimumScore>,
    pub a_levels: Option<ALevels>,
}

impl Requirements {
    const NONE: Requirements = Requirements {
        sat: None,
        act: None,
        gpa: None,
        ielts: None,
        toefl: None,
        ib: None,
        a_levels: None,
    };
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ranking {
    pub us_news: Option<u32>,
    pub qs: Option<u32>,
    pub times: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct University {
    pub id: &'static str,
    pub name: &'static str,
    /// Common abbreviations ("MIT", "UCLA") matched alongside the full name.
    pub short_names: &'static [&'static str],
    pub country: &'static str,
    pub city: &'static str,
    pub region: TargetRegion,
    pub requirements: Requirements,
    /// Percent of applicants admitted.
    pub acceptance_rate: Option<f64>,
    pub ranking: Ranking,
    pub notable_programs: &'static [&'static str],
    pub description: &'static str,
    pub website: &'static str,
    pub application_deadline: Option<&'static str>,
}

const fn scores(median: u32, range: Option<ScoreRange>) -> Option<TestScores> {
    Some(TestScores {
        median: Some(median),
        range,
        required: false,
    })
}

const fn range(min: u32, max: u32) -> Option<ScoreRange> {
    Some(ScoreRange { min, max })
}

const fn gpa(min: f64, median: Option<f64>) -> Option<GpaStats> {
    Some(GpaStats {
        min: Some(min),
        median,
        weighted: true,
    })
}

const fn minimum(min: f64, required: bool) -> Option<MinimumScore> {
    Some(MinimumScore { min, required })
}

const fn a_levels(min_grades: &'static str) -> Option<ALevels> {
    Some(ALevels {
        min_grades,
        required: true,
    })
}

const fn ranking(us_news: Option<u32>, qs: u32, times: u32) -> Ranking {
    Ranking {
        us_news,
        qs: Some(qs),
        times: Some(times),
    }
}

pub static UNIVERSITIES: &[University] = &[
    University {
        id: "harvard",
        name: "Harvard University",
        short_names: &[],
        country: "United States",
        city: "Cambridge, MA",
        region: TargetRegion::Usa,
        requirements: Requirements {
            sat: scores(1540, range(1460, 1580)),
            act: scores(35, range(33, 36)),
            gpa: gpa(3.9, Some(4.18)),
            ielts: minimum(7.0, true),
            toefl: minimum(100.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(3.2),
        ranking: ranking(Some(3), 4, 2),
        notable_programs: &["Economics", "Computer Science", "Government", "Biology"],
        description: "One of the most prestigious universities in the world, founded in 1636. \
            Known for strong programs in the humanities, sciences and business.",
        website: "https://www.harvard.edu/",
        application_deadline: Some("January 1 (Regular Decision)"),
    },
    University {
        id: "mit",
        name: "Massachusetts Institute of Technology",
        short_names: &["MIT"],
        country: "United States",
        city: "Cambridge, MA",
        region: TargetRegion::Usa,
        requirements: Requirements {
            sat: scores(1540, range(1500, 1570)),
            act: scores(35, range(34, 36)),
            gpa: gpa(4.0, Some(4.17)),
            ielts: minimum(7.0, true),
            toefl: minimum(90.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(6.7),
        ranking: ranking(Some(2), 1, 5),
        notable_programs: &["Engineering", "Computer Science", "Physics", "Mathematics"],
        description: "A leading technical university known for research and innovation in \
            technology, engineering and the natural sciences.",
        website: "https://www.mit.edu/",
        application_deadline: Some("January 5"),
    },
    University {
        id: "stanford",
        name: "Stanford University",
        short_names: &[],
        country: "United States",
        city: "Palo Alto, CA",
        region: TargetRegion::Usa,
        requirements: Requirements {
            sat: scores(1505, range(1440, 1570)),
            act: scores(34, range(32, 35)),
            gpa: gpa(3.95, Some(3.96)),
            ielts: minimum(7.0, true),
            toefl: minimum(100.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(4.3),
        ranking: ranking(Some(6), 5, 4),
        notable_programs: &["Computer Science", "Engineering", "Business", "Psychology"],
        description: "A Silicon Valley university with close ties to the technology industry \
            and entrepreneurship.",
        website: "https://www.stanford.edu/",
        application_deadline: Some("January 5"),
    },
    University {
        id: "yale",
        name: "Yale University",
        short_names: &[],
        country: "United States",
        city: "New Haven, CT",
        region: TargetRegion::Usa,
        requirements: Requirements {
            sat: scores(1520, range(1460, 1580)),
            act: scores(34, range(33, 35)),
            gpa: gpa(3.9, Some(4.14)),
            ielts: minimum(7.0, true),
            toefl: minimum(100.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(5.1),
        ranking: ranking(Some(5), 16, 9),
        notable_programs: &["History", "Political Science", "Economics", "English"],
        description: "One of the oldest Ivy League universities, known for its humanities and \
            social science programs.",
        website: "https://www.yale.edu/",
        application_deadline: Some("January 2"),
    },
    University {
        id: "princeton",
        name: "Princeton University",
        short_names: &[],
        country: "United States",
        city: "Princeton, NJ",
        region: TargetRegion::Usa,
        requirements: Requirements {
            sat: scores(1515, range(1460, 1570)),
            act: scores(34, range(33, 35)),
            gpa: gpa(3.9, Some(3.91)),
            ielts: minimum(7.0, true),
            toefl: minimum(100.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(5.7),
        ranking: ranking(Some(1), 17, 7),
        notable_programs: &["Economics", "Public Policy", "Engineering", "Politics"],
        description: "An Ivy League university known for a rigorous undergraduate curriculum \
            and close faculty mentorship.",
        website: "https://www.princeton.edu/",
        application_deadline: Some("January 1"),
    },
    University {
        id: "columbia",
        name: "Columbia University",
        short_names: &[],
        country: "United States",
        city: "New York, NY",
        region: TargetRegion::Usa,
        requirements: Requirements {
            sat: scores(1515, range(1450, 1570)),
            act: scores(34, range(33, 35)),
            gpa: gpa(3.9, Some(4.12)),
            ielts: minimum(7.0, true),
            toefl: minimum(100.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(5.1),
        ranking: ranking(Some(12), 23, 11),
        notable_programs: &["Journalism", "Business", "Engineering", "Political Science"],
        description: "An Ivy League university in New York City, known for journalism, \
            business and engineering.",
        website: "https://www.columbia.edu/",
        application_deadline: Some("January 1"),
    },
    University {
        id: "nyu",
        name: "New York University",
        short_names: &["NYU"],
        country: "United States",
        city: "New York, NY",
        region: TargetRegion::Usa,
        requirements: Requirements {
            sat: scores(1450, range(1370, 1510)),
            act: scores(32, range(31, 34)),
            gpa: gpa(3.7, Some(3.8)),
            ielts: minimum(7.5, true),
            toefl: minimum(100.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(12.8),
        ranking: ranking(Some(35), 38, 27),
        notable_programs: &["Business", "Arts", "Film", "International Relations"],
        description: "A large private university in New York City, known for business, \
            the arts and film.",
        website: "https://www.nyu.edu/",
        application_deadline: Some("January 5"),
    },
    University {
        id: "ucla",
        name: "University of California, Los Angeles",
        short_names: &["UCLA"],
        country: "United States",
        city: "Los Angeles, CA",
        region: TargetRegion::Usa,
        requirements: Requirements {
            sat: scores(1415, range(1290, 1510)),
            act: scores(31, range(29, 35)),
            gpa: gpa(3.9, Some(3.9)),
            ielts: minimum(7.0, true),
            toefl: minimum(100.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(11.0),
        ranking: ranking(Some(15), 29, 21),
        notable_programs: &["Film", "Business", "Engineering", "Psychology"],
        description: "A leading public university in California with a broad range of \
            programs and strong research output.",
        website: "https://www.ucla.edu/",
        application_deadline: Some("November 30"),
    },
    University {
        id: "oxford",
        name: "University of Oxford",
        short_names: &[],
        country: "United Kingdom",
        city: "Oxford",
        region: TargetRegion::Uk,
        requirements: Requirements {
            sat: scores(1470, range(1400, 1550)),
            act: scores(32, None),
            a_levels: a_levels("A*A*A - AAA"),
            ib: minimum(38.0, false),
            ielts: minimum(7.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(17.5),
        ranking: ranking(None, 3, 1),
        notable_programs: &["PPE", "Law", "Medicine", "Mathematics"],
        description: "One of the oldest universities in the world, known for its collegiate \
            system and demanding academic standards.",
        website: "https://www.ox.ac.uk/",
        application_deadline: Some("October 15 (via UCAS)"),
    },
    University {
        id: "cambridge",
        name: "University of Cambridge",
        short_names: &[],
        country: "United Kingdom",
        city: "Cambridge",
        region: TargetRegion::Uk,
        requirements: Requirements {
            sat: scores(1500, range(1460, 1530)),
            act: scores(33, None),
            a_levels: a_levels("A*A*A - A*AA"),
            ib: minimum(40.0, false),
            ielts: minimum(7.5, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(20.8),
        ranking: ranking(None, 2, 3),
        notable_programs: &["Natural Sciences", "Mathematics", "Engineering", "Economics"],
        description: "A world-leading university known for the natural sciences, mathematics \
            and engineering.",
        website: "https://www.cam.ac.uk/",
        application_deadline: Some("October 15 (via UCAS)"),
    },
    University {
        id: "lse",
        name: "London School of Economics and Political Science",
        short_names: &["LSE"],
        country: "United Kingdom",
        city: "London",
        region: TargetRegion::Uk,
        requirements: Requirements {
            sat: scores(1450, range(1370, 1520)),
            act: scores(32, None),
            a_levels: a_levels("A*AA - AAA"),
            ib: minimum(37.0, false),
            ielts: minimum(7.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(12.2),
        ranking: ranking(None, 45, 27),
        notable_programs: &["Economics", "International Relations", "Law", "Politics"],
        description: "A leading social science university, known for economics, politics and \
            international relations.",
        website: "https://www.lse.ac.uk/",
        application_deadline: Some("January 25 (via UCAS)"),
    },
    University {
        id: "imperial",
        name: "Imperial College London",
        short_names: &[],
        country: "United Kingdom",
        city: "London",
        region: TargetRegion::Uk,
        requirements: Requirements {
            sat: scores(1450, None),
            a_levels: a_levels("A*A*A - AAA"),
            ib: minimum(38.0, false),
            ielts: minimum(7.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(14.3),
        ranking: ranking(None, 6, 10),
        notable_programs: &["Engineering", "Medicine", "Natural Sciences", "Business"],
        description: "The UK's leading technical university, focused on science, engineering, \
            medicine and business.",
        website: "https://www.imperial.ac.uk/",
        application_deadline: Some("January 25 (via UCAS)"),
    },
    University {
        id: "ucl",
        name: "University College London",
        short_names: &["UCL"],
        country: "United Kingdom",
        city: "London",
        region: TargetRegion::Uk,
        requirements: Requirements {
            sat: scores(1440, None),
            a_levels: a_levels("A*A*A - AAB"),
            ib: minimum(34.0, false),
            ielts: minimum(6.5, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(38.0),
        ranking: ranking(None, 9, 22),
        notable_programs: &["Architecture", "Medicine", "Law", "Economics"],
        description: "One of London's largest and most diverse universities, strong across \
            many fields.",
        website: "https://www.ucl.ac.uk/",
        application_deadline: Some("January 25 (via UCAS)"),
    },
    University {
        id: "utoronto",
        name: "University of Toronto",
        short_names: &["UofT"],
        country: "Canada",
        city: "Toronto, ON",
        region: TargetRegion::Canada,
        requirements: Requirements {
            sat: scores(1370, range(1330, 1500)),
            act: scores(31, None),
            gpa: gpa(3.7, None),
            ielts: minimum(6.5, true),
            toefl: minimum(100.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(43.0),
        ranking: ranking(None, 21, 18),
        notable_programs: &["Computer Science", "Engineering", "Business", "Medicine"],
        description: "Canada's leading university, known for computer science, engineering \
            and business.",
        website: "https://www.utoronto.ca/",
        application_deadline: Some("January 15"),
    },
    University {
        id: "mcgill",
        name: "McGill University",
        short_names: &[],
        country: "Canada",
        city: "Montreal, QC",
        region: TargetRegion::Canada,
        requirements: Requirements {
            sat: scores(1400, range(1300, 1500)),
            gpa: gpa(3.7, None),
            ielts: minimum(6.5, true),
            toefl: minimum(90.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(46.0),
        ranking: ranking(None, 30, 46),
        notable_programs: &["Medicine", "Law", "Business", "Engineering"],
        description: "A prestigious university in Montreal, known for medicine, law and \
            business.",
        website: "https://www.mcgill.ca/",
        application_deadline: Some("January 15"),
    },
    University {
        id: "eth-zurich",
        name: "ETH Zurich",
        short_names: &["ETH"],
        country: "Switzerland",
        city: "Zurich",
        region: TargetRegion::Europe,
        requirements: Requirements {
            sat: scores(1450, None),
            ib: minimum(38.0, true),
            ielts: minimum(7.0, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(27.0),
        ranking: ranking(None, 7, 11),
        notable_programs: &["Engineering", "Computer Science", "Mathematics", "Physics"],
        description: "Switzerland's leading technical university, known for engineering and \
            the natural sciences.",
        website: "https://www.ethz.ch/",
        application_deadline: Some("December 31"),
    },
    University {
        id: "sorbonne",
        name: "Sorbonne University",
        short_names: &[],
        country: "France",
        city: "Paris",
        region: TargetRegion::Europe,
        requirements: Requirements {
            ib: minimum(35.0, false),
            ielts: minimum(6.5, true),
            ..Requirements::NONE
        },
        acceptance_rate: Some(50.0),
        ranking: ranking(None, 77, 48),
        notable_programs: &["Arts", "Humanities", "Sciences", "Medicine"],
        description: "A Paris university formed by the merger of Paris-Sorbonne and Pierre \
            and Marie Curie University.",
        website: "https://www.sorbonne-universite.fr/",
        application_deadline: Some("Varies by program"),
    },
];

pub fn find_university(id: &str) -> Option<&'static University> {
    UNIVERSITIES.iter().find(|u| u.id == id)
}

/// Selects the universities relevant to a comma-separated target list.
///
/// A university is relevant when its name contains a target token, or the token
/// contains its name, ignoring case. Short names ("MIT", "UCL") only match a whole
/// word of a token. Table order is kept.
pub fn match_target_universities<'a>(
    targets: &str,
    table: &'a [University],
) -> Vec<&'a University> {
    let tokens: Vec<String> = split_targets(targets)
        .into_iter()
        .map(str::to_lowercase)
        .collect();
    if tokens.is_empty() {
        return Vec::new();
    }

    table
        .iter()
        .filter(|u| {
            let name = u.name.to_lowercase();
            tokens.iter().any(|t| {
                name.contains(t.as_str())
                    || t.contains(name.as_str())
                    || u.short_names.iter().any(|short| has_word(t, short))
            })
        })
        .collect()
}

fn has_word(token: &str, word: &str) -> bool {
    token
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| w.eq_ignore_ascii_case(word))
}

/// Catalog search: optional region filter, then a case-insensitive query over
/// name, city and notable programs.
pub fn search_universities(
    query: Option<&str>,
    region: Option<TargetRegion>,
) -> Vec<&'static University> {
    let query = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    UNIVERSITIES
        .iter()
        .filter(|u| region.map_or(true, |r| u.region == r))
        .filter(|u| match &query {
            None => true,
            Some(q) => {
                u.name.to_lowercase().contains(q)
                    || u.city.to_lowercase().contains(q)
                    || u.notable_programs
                        .iter()
                        .any(|p| p.to_lowercase().contains(q))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(universities: &[&University]) -> Vec<&'static str> {
        universities.iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        assert!(UNIVERSITIES.iter().all(|u| seen.insert(u.id)));
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let matched = match_target_universities("stanford, YALE", UNIVERSITIES);
        assert_eq!(ids(&matched), vec!["stanford", "yale"]);
    }

    #[test]
    fn test_match_when_target_contains_reference_name() {
        let matched = match_target_universities("McGill University (Montreal)", UNIVERSITIES);
        assert_eq!(ids(&matched), vec!["mcgill"]);
    }

    #[test]
    fn test_match_by_short_name() {
        let matched = match_target_universities("MIT, LSE", UNIVERSITIES);
        assert_eq!(ids(&matched), vec!["mit", "lse"]);

        let matched = match_target_universities("UCL (London)", UNIVERSITIES);
        assert_eq!(ids(&matched), vec!["ucl"]);
    }

    #[test]
    fn test_short_name_must_be_a_whole_word() {
        let ucla = match_target_universities("UCLA", UNIVERSITIES);
        assert_eq!(ids(&ucla), vec!["ucla"]);
        assert!(match_target_universities("Smith College", UNIVERSITIES).is_empty());
        assert!(match_target_universities("Bethel University", UNIVERSITIES).is_empty());
    }

    #[test]
    fn test_match_keeps_table_order_and_is_a_filter() {
        let matched = match_target_universities("Toronto, Harvard", UNIVERSITIES);
        assert_eq!(ids(&matched), vec!["harvard", "utoronto"]);
    }

    #[test]
    fn test_blank_targets_match_nothing() {
        assert!(match_target_universities(" , ,", UNIVERSITIES).is_empty());
        assert!(match_target_universities("Hogwarts", UNIVERSITIES).is_empty());
    }

    #[test]
    fn test_search_by_region_and_program() {
        let uk_law = search_universities(Some("law"), Some(TargetRegion::Uk));
        assert_eq!(ids(&uk_law), vec!["oxford", "lse", "ucl"]);

        let all = search_universities(Some("   "), None);
        assert_eq!(all.len(), UNIVERSITIES.len());
    }

    #[test]
    fn test_search_by_city() {
        let london = search_universities(Some("LONDON"), None);
        assert_eq!(ids(&london), vec!["lse", "imperial", "ucl"]);
    }
}
