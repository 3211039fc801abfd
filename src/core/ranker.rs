use crate::core::{
    criteria::matched_criteria,
    options::ResolvedOptions,
    scoring::score_dimension,
    weights::{resolve_weights, ResolvedWeights, WeightSumWarning},
};
use crate::models::{Candidate, CandidateOptions, CandidateQuery, CandidateWeights, RankedCandidate};
use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of one ranking call
#[derive(Debug, Clone)]
pub struct RankOutcome {
    pub results: Vec<RankedCandidate>,
    pub total_candidates: usize,
    pub weights: ResolvedWeights,
    pub warning: Option<WeightSumWarning>,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Resolve weights over the configured defaults
/// 2. Resolve options against the candidate count
/// 3. Score every candidate on each positively weighted dimension
/// 4. Filter by minimum score, stable sort descending, truncate
///
/// Holds no state between calls; ranking the same input twice yields the
/// same output, tie order included.
#[derive(Debug, Clone)]
pub struct Ranker {
    defaults: ResolvedWeights,
}

impl Ranker {
    pub fn new(defaults: ResolvedWeights) -> Self {
        Self { defaults }
    }

    pub fn with_default_weights() -> Self {
        Self {
            defaults: ResolvedWeights::default(),
        }
    }

    pub fn defaults(&self) -> &ResolvedWeights {
        &self.defaults
    }

    /// Rank `candidates` against `query`.
    ///
    /// # Arguments
    /// * `candidates` - Candidate pool, never mutated
    /// * `query` - Hiring preferences; empty criteria leave a dimension neutral
    /// * `weights` - Partial weights merged over this ranker's defaults
    /// * `options` - Result bounds and matching options
    pub fn rank(
        &self,
        candidates: &[Candidate],
        query: &CandidateQuery,
        weights: &CandidateWeights,
        options: &CandidateOptions,
    ) -> RankOutcome {
        let total_candidates = candidates.len();
        let weights = resolve_weights(weights, &self.defaults);
        let options = ResolvedOptions::resolve(options, total_candidates);

        let scored = score_all(candidates, query, &weights, &options);
        let results = select(scored, &options);

        tracing::debug!(
            "Ranked {} of {} candidates (min_score: {}, max_results: {})",
            results.len(),
            total_candidates,
            options.min_score,
            options.max_results
        );

        RankOutcome {
            results,
            total_candidates,
            weights,
            warning: weights.sum_warning(),
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank candidates with the built-in default weights (40/25/15/10/5/5)
pub fn rank_candidates(
    candidates: &[Candidate],
    query: &CandidateQuery,
    weights: &CandidateWeights,
    options: &CandidateOptions,
) -> Vec<RankedCandidate> {
    Ranker::with_default_weights()
        .rank(candidates, query, weights, options)
        .results
}

/// Score one candidate on every active dimension
pub fn score_candidate(
    candidate: &Candidate,
    query: &CandidateQuery,
    weights: &ResolvedWeights,
    options: &ResolvedOptions,
) -> RankedCandidate {
    let mut total = 0.0;
    let mut score_breakdown = BTreeMap::new();

    for (dimension, weight) in weights.active() {
        let score = score_dimension(dimension, candidate, query, options);
        score_breakdown.insert(dimension, score);
        total += score * weight / 100.0;
    }

    RankedCandidate {
        candidate: candidate.clone(),
        ranking_score: round2(total),
        score_breakdown,
        matched_criteria: matched_criteria(candidate, query, options),
    }
}

/// Candidates are independent, so scoring fans out when `parallel` is on.
/// Collection keeps input order either way.
fn score_all(
    candidates: &[Candidate],
    query: &CandidateQuery,
    weights: &ResolvedWeights,
    options: &ResolvedOptions,
) -> Vec<RankedCandidate> {
    #[cfg(feature = "parallel")]
    {
        candidates
            .par_iter()
            .map(|c| score_candidate(c, query, weights, options))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        candidates
            .iter()
            .map(|c| score_candidate(c, query, weights, options))
            .collect()
    }
}

/// Filter by `min_score`, stable sort by score descending, truncate
fn select(scored: Vec<RankedCandidate>, options: &ResolvedOptions) -> Vec<RankedCandidate> {
    let mut results: Vec<RankedCandidate> = scored
        .into_iter()
        .filter(|c| c.ranking_score >= options.min_score)
        .collect();

    // sort_by is stable: equal scores keep input order
    results.sort_by(|a, b| {
        b.ranking_score
            .partial_cmp(&a.ranking_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results.truncate(options.max_results);
    results
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dimension;

    fn create_candidate(id: usize, skills: &[&str]) -> Candidate {
        Candidate {
            skills: Some(skills.iter().map(|s| s.to_string()).collect()),
            ..Candidate::new(format!("User {}", id), format!("user{}@example.com", id))
        }
    }

    fn skills_query(skills: &[&str]) -> CandidateQuery {
        CandidateQuery {
            skills: Some(skills.iter().map(|s| s.to_string()).collect()),
            ..CandidateQuery::default()
        }
    }

    fn skills_only() -> CandidateWeights {
        CandidateWeights {
            skills: Some(100.0),
            experience: Some(0.0),
            education: Some(0.0),
            location: Some(0.0),
            salary: Some(0.0),
            availability: Some(0.0),
        }
    }

    #[test]
    fn test_rank_sorted_by_score() {
        let candidates = vec![
            create_candidate(1, &["Go"]),
            create_candidate(2, &["Rust", "Docker"]),
            create_candidate(3, &["Rust"]),
        ];
        let query = skills_query(&["Rust", "Docker"]);

        let results = rank_candidates(&candidates, &query, &skills_only(), &CandidateOptions::default());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].candidate.email, "user2@example.com");
        assert_eq!(results[1].candidate.email, "user3@example.com");
        assert_eq!(results[2].candidate.email, "user1@example.com");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates: Vec<Candidate> = (0..10).map(|i| create_candidate(i, &["Rust"])).collect();
        let query = skills_query(&["Rust"]);

        let results = rank_candidates(&candidates, &query, &CandidateWeights::default(), &CandidateOptions::default());

        let emails: Vec<&str> = results.iter().map(|r| r.candidate.email.as_str()).collect();
        let expected: Vec<String> = (0..10).map(|i| format!("user{}@example.com", i)).collect();
        assert_eq!(emails, expected);
    }

    #[test]
    fn test_zero_weight_dimensions_skipped() {
        let candidates = vec![create_candidate(1, &["Rust"])];
        let query = skills_query(&["Rust"]);

        let results = rank_candidates(&candidates, &query, &skills_only(), &CandidateOptions::default());

        let breakdown = &results[0].score_breakdown;
        assert_eq!(breakdown.len(), 1);
        // 80 exact + 1 diversity, weight 100 passes the score through unchanged
        assert_eq!(breakdown[&Dimension::Skills], 81.0);
        assert_eq!(results[0].ranking_score, 81.0);
    }

    #[test]
    fn test_min_score_and_max_results() {
        let candidates = vec![
            create_candidate(1, &["Go"]),
            create_candidate(2, &["Rust", "Docker"]),
            create_candidate(3, &["Rust"]),
            create_candidate(4, &["Rust", "Docker", "Kubernetes"]),
        ];
        let query = skills_query(&["Rust", "Docker"]);
        let options = CandidateOptions {
            min_score: Some(50.0),
            max_results: Some(1),
            ..CandidateOptions::default()
        };

        let results = rank_candidates(&candidates, &query, &skills_only(), &options);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate.email, "user4@example.com");
    }

    #[test]
    fn test_unbalanced_weights_still_rank() {
        let ranker = Ranker::with_default_weights();
        let candidates = vec![create_candidate(1, &["Rust"])];
        let weights = CandidateWeights {
            skills: Some(200.0),
            ..CandidateWeights::default()
        };

        let outcome = ranker.rank(&candidates, &skills_query(&["Rust"]), &weights, &CandidateOptions::default());

        assert_eq!(outcome.warning.map(|w| w.total), Some(260.0));
        assert_eq!(outcome.results.len(), 1);
        assert!(outcome.results[0].ranking_score > 100.0);
    }

    #[test]
    fn test_configured_defaults_apply() {
        let ranker = Ranker::new(ResolvedWeights {
            skills: 100.0,
            experience: 0.0,
            education: 0.0,
            location: 0.0,
            salary: 0.0,
            availability: 0.0,
        });
        let candidates = vec![create_candidate(1, &["Rust"])];

        let outcome = ranker.rank(
            &candidates,
            &CandidateQuery::default(),
            &CandidateWeights::default(),
            &CandidateOptions::default(),
        );

        assert!(outcome.warning.is_none());
        assert_eq!(outcome.results[0].ranking_score, 50.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345678), 12.35);
        assert_eq!(round2(99.994), 99.99);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_empty_pool() {
        let results = rank_candidates(&[], &CandidateQuery::default(), &CandidateWeights::default(), &CandidateOptions::default());
        assert!(results.is_empty());
    }
}
