use crate::models::CandidateOptions;
use std::borrow::Cow;

/// Ranking options with every default filled in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub max_results: usize,
    pub min_score: f64,
    pub case_sensitive: bool,
    pub prioritize_recent: bool,
}

impl ResolvedOptions {
    /// Fill unset options: `max_results` becomes the candidate count,
    /// `min_score` 0, `case_sensitive` false and `prioritize_recent` true.
    pub fn resolve(options: &CandidateOptions, candidate_count: usize) -> Self {
        Self {
            max_results: options.max_results.unwrap_or(candidate_count),
            min_score: options.min_score.unwrap_or(0.0),
            case_sensitive: options.case_sensitive.unwrap_or(false),
            prioritize_recent: options.prioritize_recent.unwrap_or(true),
        }
    }

    /// Case-fold a string for comparison unless matching is case sensitive
    #[inline]
    pub fn fold<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(value)
        } else {
            Cow::Owned(value.to_lowercase())
        }
    }

    /// Fold every entry of a list
    pub fn fold_all<'a>(&self, values: &'a [String]) -> Vec<Cow<'a, str>> {
        values.iter().map(|v| self.fold(v)).collect()
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self::resolve(&CandidateOptions::default(), usize::MAX)
    }
}

/// Either-direction substring match. An empty side is contained in anything.
#[inline]
pub fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
