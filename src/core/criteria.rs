use crate::core::options::ResolvedOptions;
use crate::models::{Candidate, CandidateQuery};

/// Human-readable list of query criteria the candidate satisfies.
///
/// Only exact skill matches are explained. Skills are reported in query
/// order, spelled as the query spelled them. Has no effect on scoring.
pub fn matched_criteria(
    candidate: &Candidate,
    query: &CandidateQuery,
    options: &ResolvedOptions,
) -> Vec<String> {
    let mut matched = Vec::new();

    if let Some(query_skills) = query.skills() {
        let have = options.fold_all(candidate.skills());
        let skills: Vec<&str> = query_skills
            .iter()
            .filter(|s| have.contains(&options.fold(s)))
            .map(String::as_str)
            .collect();

        if !skills.is_empty() {
            matched.push(format!("Skills: {}", skills.join(", ")));
        }
    }

    matched
}
