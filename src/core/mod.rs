// Core algorithm exports
pub mod criteria;
pub mod insights;
pub mod lookup;
pub mod options;
pub mod ranker;
pub mod salary;
pub mod scoring;
pub mod weights;

pub use criteria::matched_criteria;
pub use insights::{summarize, PoolSummary};
pub use lookup::{EducationLevel, GpaBucket};
pub use options::ResolvedOptions;
pub use ranker::{rank_candidates, score_candidate, RankOutcome, Ranker};
pub use salary::parse_salary;
pub use scoring::{
    availability_score, education_score, experience_score, location_score, salary_score,
    score_dimension, skills_score, NEUTRAL_SCORE,
};
pub use weights::{resolve_weights, ResolvedWeights, WeightSumWarning};
