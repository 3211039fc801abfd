use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Salary key read by the salary scorer
pub const FULL_TIME: &str = "full-time";

/// Candidate record as supplied by the applicant dataset
///
/// Only `name` and `email` are required. Every other field may be absent and
/// absence always means "no information".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experiences: Option<Vec<WorkExperience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_salary_expectation: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_availability: Option<Vec<String>>,
}

impl Candidate {
    /// Minimal candidate with only identity fields set
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            submitted_at: None,
            skills: None,
            work_experiences: None,
            education: None,
            location: None,
            annual_salary_expectation: None,
            work_availability: None,
        }
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }

    pub fn experiences(&self) -> &[WorkExperience] {
        self.work_experiences.as_deref().unwrap_or_default()
    }

    pub fn availability(&self) -> &[String] {
        self.work_availability.as_deref().unwrap_or_default()
    }

    /// Raw full-time salary expectation, if the candidate gave one
    pub fn full_time_salary(&self) -> Option<&str> {
        self.annual_salary_expectation
            .as_ref()
            .and_then(|salaries| salaries.get(FULL_TIME))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub company: String,
    #[serde(rename = "roleName", default)]
    pub role_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub highest_level: String,
    #[serde(default)]
    pub degrees: Vec<Degree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Degree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "originalSchool", default, skip_serializing_if = "Option::is_none")]
    pub original_school: Option<String>,
    #[serde(rename = "isTop50", default, skip_serializing_if = "Option::is_none")]
    pub is_top50: Option<bool>,
    #[serde(rename = "isTop25", default, skip_serializing_if = "Option::is_none")]
    pub is_top25: Option<bool>,
}

impl Degree {
    pub fn top50(&self) -> bool {
        self.is_top50.unwrap_or(false)
    }

    pub fn top25(&self) -> bool {
        self.is_top25.unwrap_or(false)
    }
}

/// Hiring preferences. Empty or absent lists leave that dimension neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_companies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_locations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_availability: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_subjects: Option<Vec<String>>,
}

/// Returns the list only when it carries at least one entry
fn non_empty(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|items| !items.is_empty())
}

impl CandidateQuery {
    pub fn skills(&self) -> Option<&[String]> {
        non_empty(&self.skills)
    }

    pub fn target_roles(&self) -> Option<&[String]> {
        non_empty(&self.target_roles)
    }

    pub fn preferred_companies(&self) -> Option<&[String]> {
        non_empty(&self.preferred_companies)
    }

    pub fn preferred_locations(&self) -> Option<&[String]> {
        non_empty(&self.preferred_locations)
    }

    pub fn required_availability(&self) -> Option<&[String]> {
        non_empty(&self.required_availability)
    }

    pub fn preferred_subjects(&self) -> Option<&[String]> {
        non_empty(&self.preferred_subjects)
    }
}

/// Salary budget. Missing bounds are open: `min` 0, `max` unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn min(&self) -> f64 {
        self.min.unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }
}

/// Caller-supplied weights. Unset fields fall back to the resolver defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateWeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<f64>,
}

impl CandidateWeights {
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Skills => self.skills,
            Dimension::Experience => self.experience,
            Dimension::Education => self.education,
            Dimension::Location => self.location,
            Dimension::Salary => self.salary,
            Dimension::Availability => self.availability,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Reserved. Carried through resolution but not used by the scoring math.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prioritize_recent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

/// One of the six independent scoring axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Skills,
    Experience,
    Education,
    Location,
    Salary,
    Availability,
}

impl Dimension {
    /// All dimensions in evaluation order
    pub const ALL: [Dimension; 6] = [
        Dimension::Skills,
        Dimension::Experience,
        Dimension::Education,
        Dimension::Location,
        Dimension::Salary,
        Dimension::Availability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Skills => "skills",
            Dimension::Experience => "experience",
            Dimension::Education => "education",
            Dimension::Location => "location",
            Dimension::Salary => "salary",
            Dimension::Availability => "availability",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate plus its ranking annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(rename = "rankingScore")]
    pub ranking_score: f64,
    /// Raw 0-100 score per dimension with a positive weight
    #[serde(rename = "scoreBreakdown")]
    pub score_breakdown: BTreeMap<Dimension, f64>,
    #[serde(rename = "matchedCriteria")]
    pub matched_criteria: Vec<String>,
}
