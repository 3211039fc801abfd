//! Talent Rank - multi-criteria candidate ranking engine
//!
//! This library scores candidates against structured hiring preferences on six
//! weighted dimensions, explains which criteria matched and returns a sorted,
//! filtered, size-bounded result list. The `routes` module exposes the same
//! engine over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{rank_candidates, RankOutcome, Ranker, ResolvedWeights, WeightSumWarning};
pub use crate::models::{
    Candidate, CandidateOptions, CandidateQuery, CandidateWeights, Dimension, RankedCandidate,
};
