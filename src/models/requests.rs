use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{BudgetRange, Candidate, CandidateOptions, CandidateQuery, CandidateWeights};

/// Request to rank a candidate pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(custom(function = "validate_candidates"))]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub query: CandidateQuery,
    #[serde(default)]
    #[validate(custom(function = "validate_weights"))]
    pub weights: CandidateWeights,
    #[serde(default)]
    #[validate(custom(function = "validate_options"))]
    pub options: CandidateOptions,
}

impl RankRequest {
    /// Options as the engine expects them.
    ///
    /// Clients send `maxResults: 0` to mean "no limit"; the engine reads an
    /// absent `max_results` that way.
    pub fn engine_options(&self) -> CandidateOptions {
        CandidateOptions {
            max_results: self.options.max_results.filter(|n| *n > 0),
            ..self.options
        }
    }
}

fn validate_candidates(candidates: &[Candidate]) -> Result<(), ValidationError> {
    if candidates.iter().any(|c| c.email.trim().is_empty()) {
        return Err(ValidationError::new("candidate_email_required"));
    }
    Ok(())
}

fn validate_weights(weights: &CandidateWeights) -> Result<(), ValidationError> {
    let all = [
        weights.skills,
        weights.experience,
        weights.education,
        weights.location,
        weights.salary,
        weights.availability,
    ];
    if all.iter().flatten().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ValidationError::new("weights_must_be_non_negative"));
    }
    Ok(())
}

/// `minScore` has no upper bound: weights summing past 100 score past 100
fn validate_options(options: &CandidateOptions) -> Result<(), ValidationError> {
    if let Some(min_score) = options.min_score {
        if !min_score.is_finite() || min_score < 0.0 {
            return Err(ValidationError::new("min_score_out_of_range"));
        }
    }
    Ok(())
}

/// Request to summarize a candidate pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub candidates: Vec<Candidate>,
}

/// Free-text query fields as typed into a search form.
///
/// List fields are comma separated; budget bounds are plain numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryText {
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub target_roles: Option<String>,
    #[serde(default)]
    pub preferred_companies: Option<String>,
    #[serde(default)]
    pub preferred_locations: Option<String>,
    #[serde(default)]
    pub required_availability: Option<String>,
    #[serde(default)]
    pub preferred_subjects: Option<String>,
    #[serde(default)]
    pub budget_min: Option<f64>,
    #[serde(default)]
    pub budget_max: Option<f64>,
}

impl QueryText {
    pub fn into_query(self) -> CandidateQuery {
        let budget_range = match (self.budget_min, self.budget_max) {
            (None, None) => None,
            (min, max) => Some(BudgetRange { min, max }),
        };

        CandidateQuery {
            skills: parse_term_list(self.skills.as_deref()),
            target_roles: parse_term_list(self.target_roles.as_deref()),
            preferred_companies: parse_term_list(self.preferred_companies.as_deref()),
            preferred_locations: parse_term_list(self.preferred_locations.as_deref()),
            budget_range,
            required_availability: parse_term_list(self.required_availability.as_deref()),
            preferred_subjects: parse_term_list(self.preferred_subjects.as_deref()),
        }
    }
}

/// Split comma-separated text into trimmed, non-empty terms
pub fn parse_term_list(text: Option<&str>) -> Option<Vec<String>> {
    let terms: Vec<String> = text?
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}
