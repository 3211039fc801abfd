use crate::core::lookup::{education_level_score, gpa_score};
use crate::core::options::{contains_either, ResolvedOptions};
use crate::core::salary::parse_salary;
use crate::models::{Candidate, CandidateQuery, Dimension};

/// Score for a dimension the query expresses no preference on
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Education score for a candidate without any listed degree
pub const EDUCATION_FLOOR: f64 = 20.0;

/// Run the scorer for one dimension.
///
/// Every scorer is pure and returns a value in `[0, 100]`.
pub fn score_dimension(
    dimension: Dimension,
    candidate: &Candidate,
    query: &CandidateQuery,
    options: &ResolvedOptions,
) -> f64 {
    match dimension {
        Dimension::Skills => skills_score(candidate, query, options),
        Dimension::Experience => experience_score(candidate, query, options),
        Dimension::Education => education_score(candidate, query, options),
        Dimension::Location => location_score(candidate, query, options),
        Dimension::Salary => salary_score(candidate, query, options),
        Dimension::Availability => availability_score(candidate, query, options),
    }
}

/// Skills score (0-100)
///
/// score = min(
///     exact / |query| * 80 +          # query skills the candidate lists verbatim
///     partial / |query| * 20 +        # remaining ones matched as substrings
///     min(|skills| / 10 * 10, 20),    # breadth bonus
///     100
/// )
pub fn skills_score(candidate: &Candidate, query: &CandidateQuery, options: &ResolvedOptions) -> f64 {
    let Some(query_skills) = query.skills() else {
        return NEUTRAL_SCORE;
    };

    let candidate_skills = candidate.skills();
    if candidate_skills.is_empty() {
        return 0.0;
    }

    let wanted = options.fold_all(query_skills);
    let have = options.fold_all(candidate_skills);

    let mut exact = 0usize;
    let mut partial = 0usize;
    for skill in &wanted {
        if have.contains(skill) {
            exact += 1;
        } else if have.iter().any(|h| contains_either(h, skill)) {
            partial += 1;
        }
    }

    let total = wanted.len() as f64;
    let exact_score = exact as f64 / total * 80.0;
    let partial_score = partial as f64 / total * 20.0;
    let diversity_bonus = (candidate_skills.len() as f64 / 10.0 * 10.0).min(20.0);

    (exact_score + partial_score + diversity_bonus).min(100.0)
}

/// Experience score (0-100): history length, role relevance and company relevance
pub fn experience_score(
    candidate: &Candidate,
    query: &CandidateQuery,
    options: &ResolvedOptions,
) -> f64 {
    let experiences = candidate.experiences();
    if experiences.is_empty() {
        return 0.0;
    }

    let count = experiences.len() as f64;
    let count_score = (count / 5.0 * 40.0).min(40.0);

    let role_score = match query.target_roles() {
        Some(roles) => {
            let roles = options.fold_all(roles);
            let matching = experiences
                .iter()
                .filter(|exp| {
                    let role = options.fold(&exp.role_name);
                    roles.iter().any(|target| contains_either(&role, target))
                })
                .count();
            matching as f64 / count * 40.0
        }
        None => 30.0,
    };

    let company_score = match query.preferred_companies() {
        Some(companies) => {
            let companies = options.fold_all(companies);
            let matching = experiences
                .iter()
                .filter(|exp| {
                    let company = options.fold(&exp.company);
                    companies.iter().any(|c| contains_either(&company, c))
                })
                .count();
            matching as f64 / count * 20.0
        }
        None => 10.0,
    };

    (count_score + role_score + company_score).min(100.0)
}

/// Education score (0-100): level, subject relevance, prestige and GPA
///
/// Prestige is tiered, not additive: a top-50 degree anywhere yields 20 and
/// short-circuits the top-25 check, which only yields 30 when no degree is
/// flagged top-50.
pub fn education_score(
    candidate: &Candidate,
    query: &CandidateQuery,
    options: &ResolvedOptions,
) -> f64 {
    let Some(education) = candidate.education.as_ref().filter(|e| !e.degrees.is_empty()) else {
        return EDUCATION_FLOOR;
    };
    let degrees = &education.degrees;

    let level_score = education_level_score(&education.highest_level);

    let subject_score = match query.preferred_subjects() {
        Some(subjects) => {
            let subjects = options.fold_all(subjects);
            let matching = degrees
                .iter()
                .filter_map(|d| d.subject.as_deref())
                .filter(|subject| !subject.is_empty())
                .filter(|subject| {
                    let subject = options.fold(subject);
                    subjects.iter().any(|s| contains_either(&subject, s))
                })
                .count();
            matching as f64 / degrees.len() as f64 * 40.0
        }
        None => 30.0,
    };

    let prestige_score = if degrees.iter().any(|d| d.top50()) {
        20.0
    } else if degrees.iter().any(|d| d.top25()) {
        30.0
    } else {
        0.0
    };

    let gpa = degrees
        .iter()
        .filter_map(|d| d.gpa.as_deref())
        .map(gpa_score)
        .fold(0.0, f64::max);

    (level_score + subject_score + prestige_score + gpa).min(100.0)
}

/// Location score: 100 exact, 70 substring either way, 0 otherwise.
///
/// A missing location is the empty string, which every preference contains.
pub fn location_score(
    candidate: &Candidate,
    query: &CandidateQuery,
    options: &ResolvedOptions,
) -> f64 {
    let Some(preferred) = query.preferred_locations() else {
        return NEUTRAL_SCORE;
    };

    let location = options.fold(candidate.location.as_deref().unwrap_or_default());
    let preferred = options.fold_all(preferred);

    if preferred.contains(&location) {
        100.0
    } else if preferred.iter().any(|p| contains_either(&location, p)) {
        70.0
    } else {
        0.0
    }
}

/// Salary score against the query budget
pub fn salary_score(candidate: &Candidate, query: &CandidateQuery, _options: &ResolvedOptions) -> f64 {
    let (Some(budget), Some(_)) = (query.budget_range, candidate.annual_salary_expectation.as_ref())
    else {
        return NEUTRAL_SCORE;
    };

    let salary = candidate.full_time_salary().map(parse_salary).unwrap_or(0);
    budget_fit(salary as f64, budget.min(), budget.max())
}

/// Score a numeric salary against an inclusive `[min, max]` budget.
///
/// Below budget decays from 80 towards a floor of 60; above budget decays
/// from 50 towards 0.
pub fn budget_fit(salary: f64, min: f64, max: f64) -> f64 {
    if salary >= min && salary <= max {
        100.0
    } else if salary < min {
        (80.0 - (min - salary) / min * 50.0).max(60.0)
    } else if max <= 0.0 {
        0.0
    } else {
        (50.0 - (salary - max) / max * 50.0).max(0.0)
    }
}

/// Share of required availability types the candidate offers, scaled to 100
pub fn availability_score(
    candidate: &Candidate,
    query: &CandidateQuery,
    options: &ResolvedOptions,
) -> f64 {
    let Some(required) = query.required_availability() else {
        return NEUTRAL_SCORE;
    };

    let offered = options.fold_all(candidate.availability());
    let matched = required
        .iter()
        .filter(|r| offered.contains(&options.fold(r)))
        .count();

    matched as f64 / required.len() as f64 * 100.0
}
